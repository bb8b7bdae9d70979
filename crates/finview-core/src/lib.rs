#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for the financial statement viewer.
//!
//! This crate provides the foundational abstractions shared by the other crates:
//!
//! - [`StatementSource`](source::StatementSource) - Fetches statement records for an identifier
//! - [`ClipboardSink`](sink::ClipboardSink) - Receives copied table text
//! - [`DownloadSink`](sink::DownloadSink) - Receives exported files
//! - [`StatementRecord`](types::StatementRecord) - Raw statement data as served by the backend

/// Error types for viewer operations.
pub mod error;
/// Export sink traits.
pub mod sink;
/// Statement source trait.
pub mod source;
/// Statement type and selection definitions.
pub mod statement;
/// Core data types (records, rows, directory entries).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{Result, ViewError};
pub use sink::{ClipboardSink, DownloadSink};
pub use source::StatementSource;
pub use statement::{StatementSelection, StatementType};
pub use types::{
    CONTROL_KEYS, Cik, CompanyDirectoryEntry, REPORT_PERIOD_KEY, RecordId, Row, StatementRecord,
};
