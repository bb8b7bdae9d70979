//! In-memory sink implementations.

use async_trait::async_trait;
use finview_core::{ClipboardSink, DownloadSink, Result};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Clipboard that keeps the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RwLock<Option<String>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last written text, if any.
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl ClipboardSink for MemoryClipboard {
    #[instrument(skip(self, text))]
    async fn write(&self, text: &str) -> Result<()> {
        *self.contents.write().await = Some(text.to_string());
        debug!(bytes = text.len(), "Stored clipboard text");
        Ok(())
    }
}

/// A file handed to [`MemoryDownloads`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// File name as given to the sink.
    pub filename: String,
    /// File content.
    pub content: Vec<u8>,
    /// MIME type as given to the sink.
    pub mime_type: String,
}

/// Download sink that keeps every saved file in order.
#[derive(Debug, Default)]
pub struct MemoryDownloads {
    files: RwLock<Vec<SavedFile>>,
}

impl MemoryDownloads {
    /// Create an empty download sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the saved files in save order.
    pub async fn files(&self) -> Vec<SavedFile> {
        self.files.read().await.clone()
    }
}

#[async_trait]
impl DownloadSink for MemoryDownloads {
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    async fn save(&self, filename: &str, content: &[u8], mime_type: &str) -> Result<()> {
        self.files.write().await.push(SavedFile {
            filename: filename.to_string(),
            content: content.to_vec(),
            mime_type: mime_type.to_string(),
        });
        debug!("Stored download");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().await.is_none());

        clipboard.write("first").await.unwrap();
        clipboard.write("second").await.unwrap();
        assert_eq!(clipboard.contents().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_memory_downloads() {
        let downloads = MemoryDownloads::new();
        downloads
            .save("AAPL_IS_statement.csv", b"Metric,2023-09-30", "text/csv;charset=utf-8")
            .await
            .unwrap();
        downloads
            .save("AAPL_BS_statement.csv", b"Metric", "text/csv;charset=utf-8")
            .await
            .unwrap();

        let files = downloads.files().await;
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "AAPL_IS_statement.csv");
        assert_eq!(files[0].content, b"Metric,2023-09-30");
        assert_eq!(files[1].mime_type, "text/csv;charset=utf-8");
    }
}
