#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Statement transformation pipeline.
//!
//! Every function in this crate is pure: the same record always yields the
//! same table, and nothing here touches the network, the clipboard or the
//! filesystem.
//!
//! # Example
//!
//! ```
//! use finview_core::{Row, StatementRecord, StatementType};
//! use finview_table::{export, normalize};
//!
//! let record = StatementRecord::new(
//!     "1",
//!     "0000320193",
//!     StatementType::IncomeStatement,
//!     vec![
//!         Row::from(["reportPeriod", "20230630"]),
//!         Row::from(["form", "10-Q"]),
//!         Row::from(["Revenue, Net", "81797"]),
//!     ],
//! );
//!
//! let table = normalize::normalize(&record);
//! assert_eq!(table.periods, ["2023-06-30"]);
//!
//! let csv = export::to_csv("AAPL", &record.statement_type, &table.periods, &table.rows);
//! assert_eq!(csv.filename, "AAPL_IS_statement.csv");
//! assert_eq!(csv.content, "Metric,2023-06-30\n\"Revenue, Net\",81797");
//! ```

/// Statement ordering and filtering.
pub mod collate;
/// Company directory reference data.
pub mod directory;
/// Clipboard and CSV serialization.
pub mod export;
/// Record normalization into display tables.
pub mod normalize;
/// Company search and identifier resolution.
pub mod search;

/// Polars conversion of display tables.
#[cfg(feature = "frame")]
pub mod frame;

pub use collate::{collate, filter_by_type, sort_statements};
pub use directory::CompanyDirectory;
pub use export::{CSV_MIME_TYPE, CsvDocument, to_clipboard_text, to_csv};
pub use normalize::{DisplayTable, extract_display_rows, extract_periods, format_period, normalize};
pub use search::{DEFAULT_SUGGESTION_LIMIT, SuggestionList, filter_companies, resolve};
