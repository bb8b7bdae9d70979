//! Export sink traits.
//!
//! This module defines [`ClipboardSink`] and [`DownloadSink`], the two side
//! effects an exported table can have. The hosting environment supplies the
//! implementations; failures are reported back to the caller, which is
//! expected to turn them into a user-visible notification.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::Result;

/// Destination for copied table text.
#[async_trait]
pub trait ClipboardSink: Send + Sync + Debug {
    /// Writes the text to the clipboard.
    async fn write(&self, text: &str) -> Result<()>;
}

/// Destination for exported files.
#[async_trait]
pub trait DownloadSink: Send + Sync + Debug {
    /// Saves the content under the given file name.
    async fn save(&self, filename: &str, content: &[u8], mime_type: &str) -> Result<()>;
}
