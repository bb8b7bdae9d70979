//! Filesystem download sink.

use async_trait::async_trait;
use finview_core::{DownloadSink, Result, ViewError};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Saves downloads as files in a directory.
///
/// The directory is created on first save. Existing files with the same name
/// are overwritten. File names must be plain names, without path separators.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    /// Create a sink that writes into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a file with this name is saved to.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf> {
        let plain = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if filename.is_empty() || !plain {
            return Err(ViewError::Export(format!("invalid file name: {filename:?}")));
        }
        Ok(self.dir.join(filename))
    }
}

#[async_trait]
impl DownloadSink for DirectoryDownloads {
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    async fn save(&self, filename: &str, content: &[u8], mime_type: &str) -> Result<()> {
        let path = self.path_for(filename)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ViewError::Export(format!("Failed to create {}: {e}", self.dir.display())))?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ViewError::Export(format!("Failed to write {}: {e}", path.display())))?;
        debug!(path = %path.display(), "Saved download");
        Ok(())
    }
}
