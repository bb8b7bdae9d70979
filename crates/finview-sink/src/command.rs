//! Clipboard backed by a platform command.
//!
//! The text is piped into the standard input of the platform's clipboard tool:
//! `pbcopy` on macOS, `clip` on Windows, and `wl-copy` or `xclip` elsewhere
//! depending on whether a Wayland session is running.

use async_trait::async_trait;
use finview_core::{ClipboardSink, Result, ViewError};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Clipboard that writes through an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Create a clipboard that pipes text into `program args...`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Picks the clipboard tool for the current platform.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::<String>::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::<String>::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::<String>::new())
        } else {
            Self::new("xclip", ["-selection", "clipboard"])
        }
    }

    /// Program the text is piped into.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardSink for CommandClipboard {
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    async fn write(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ViewError::Export(format!("Failed to start {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ViewError::Export(format!("Failed to write to {}: {e}", self.program)))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ViewError::Export(format!("{} did not finish: {e}", self.program)))?;
        if !status.success() {
            return Err(ViewError::Export(format!("{} exited with {status}", self.program)));
        }

        debug!(program = %self.program, "Copied text to clipboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_picks_a_program() {
        assert!(!CommandClipboard::detect().program().is_empty());
    }

    #[tokio::test]
    async fn test_missing_program_is_export_error() {
        let clipboard = CommandClipboard::new("finview-no-such-clipboard-tool", Vec::<String>::new());
        let err = clipboard.write("Metric").await.unwrap_err();
        assert!(matches!(err, ViewError::Export(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_pipes_text_into_program() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("clip.txt");
        let clipboard = CommandClipboard::new(
            "sh",
            ["-c".to_string(), format!("cat > '{}'", out.display())],
        );
        clipboard.write("Metric\t2023-09-30\nCash\t29965").await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "Metric\t2023-09-30\nCash\t29965"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_export_error() {
        let clipboard = CommandClipboard::new("sh", ["-c", "cat > /dev/null; exit 3"]);
        let err = clipboard.write("Metric").await.unwrap_err();
        assert!(matches!(err, ViewError::Export(_)));
    }
}
