#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! HTTP access to the statements backend and the company directory.
//!
//! # Example
//!
//! ```no_run
//! use finview_api::{ApiClient, DirectoryLoader};
//! use finview_core::StatementSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = DirectoryLoader::new("MyApp/1.0 (contact@example.com)")?
//!         .fetch_sec()
//!         .await?;
//!     let apple = directory.lookup_ticker("AAPL").expect("AAPL is listed");
//!
//!     let client = ApiClient::new("http://localhost:3000");
//!     let records = client.fetch_statements(&apple.cik.padded()).await?;
//!     println!("{} statements", records.len());
//!
//!     Ok(())
//! }
//! ```

/// Statements backend client.
pub mod client;
/// Company directory loading.
pub mod directory;

pub use client::{ApiClient, DEFAULT_BASE_URL, parse_statements};
pub use directory::{COMPANY_TICKERS_URL, DirectoryLoader};
