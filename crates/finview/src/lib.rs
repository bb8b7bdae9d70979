#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Financial statement viewer.
//!
//! This crate re-exports the core types, the table pipeline, the HTTP source
//! and the export sinks, and provides a [`StatementViewer`] tying them
//! together.
//!
//! # Features
//!
//! - `api` - HTTP statement source and company directory loader
//! - `sinks` - Clipboard and download sink implementations
//! - `frame` - Polars conversion of display tables
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use finview::{ApiClient, DirectoryLoader, StatementViewer, ViewState};
//!
//! #[tokio::main]
//! async fn main() -> finview::Result<()> {
//!     let directory = DirectoryLoader::load_file("company_tickers.json").await?;
//!     let viewer = StatementViewer::new(
//!         Arc::new(ApiClient::new("http://localhost:3000")),
//!         Arc::new(directory),
//!     );
//!
//!     if let Some(ViewState::Loaded(view)) = viewer.open("AAPL").await {
//!         for panel in view.panels() {
//!             println!("{}: {} rows", panel.label(), panel.table.rows.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use finview_core::*;

// Table pipeline
pub use finview_table::{
    CSV_MIME_TYPE, CompanyDirectory, CsvDocument, DisplayTable, SuggestionList, collate, export,
    filter_by_type, filter_companies, normalize, resolve, search, sort_statements,
    to_clipboard_text, to_csv,
};

// Statement source
#[cfg(feature = "api")]
pub use finview_api::{ApiClient, DEFAULT_BASE_URL, DirectoryLoader};

// Sinks
#[cfg(feature = "sinks")]
pub use finview_sink::{
    CommandClipboard, DirectoryDownloads, MemoryClipboard, MemoryDownloads, NoopSink, SavedFile,
};

mod view;
pub use view::{
    Navigation, Navigator, Notification, NotificationKind, StatementPanel, StatementView,
    StatementViewer, ViewState,
};
