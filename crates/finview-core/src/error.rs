//! Error types for viewer operations.
//!
//! This module defines [`ViewError`] which covers every failure a view can
//! surface: missing data, failed fetches, malformed responses and failed
//! exports. None of them are fatal to the process.

use thiserror::Error;

/// Errors that can occur while fetching, transforming or exporting statements.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The backend has no statements for the identifier.
    #[error("No data found for {0}")]
    NotFound(String),

    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {reason}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Status text and response body, where available.
        reason: String,
    },

    /// A response or document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A clipboard write or file save failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Local I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

impl ViewError {
    /// Returns true if the error means "no data", as opposed to a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if the error came from fetching statements.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

/// Result type alias using [`ViewError`].
pub type Result<T> = std::result::Result<T, ViewError>;
