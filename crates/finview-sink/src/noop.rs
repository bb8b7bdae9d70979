//! No-op sink implementation.

use async_trait::async_trait;
use finview_core::{ClipboardSink, DownloadSink, Result};
use tracing::trace;

/// A sink that accepts everything and keeps nothing.
///
/// Every write and save returns `Ok(())`. Useful where an export target must be
/// supplied but the output is not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardSink for NoopSink {
    async fn write(&self, text: &str) -> Result<()> {
        trace!(bytes = text.len(), "NoopSink: clipboard write discarded");
        Ok(())
    }
}

#[async_trait]
impl DownloadSink for NoopSink {
    async fn save(&self, filename: &str, content: &[u8], _mime_type: &str) -> Result<()> {
        trace!(filename, bytes = content.len(), "NoopSink: download discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_accepts_everything() {
        let sink = NoopSink::new();
        assert!(sink.write("Metric\t2023-01-01").await.is_ok());
        assert!(sink.save("AAPL_IS_statement.csv", b"Metric", "text/csv").await.is_ok());
    }
}
