#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finview/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Export sinks for the financial statement viewer.
//!
//! This crate provides implementations of the [`ClipboardSink`] and
//! [`DownloadSink`] traits from `finview-core`:
//!
//! - [`CommandClipboard`] - System clipboard through `pbcopy`, `wl-copy`, `xclip` or `clip`
//! - [`DirectoryDownloads`] - Saves files into a directory
//! - [`MemoryClipboard`] and [`MemoryDownloads`] - In-memory sinks for testing
//! - [`NoopSink`] - Sink that discards everything

/// Clipboard backed by a platform command.
pub mod command;
/// Filesystem download sink.
pub mod fs;
/// In-memory sinks.
pub mod memory;
/// No-op sink.
pub mod noop;

// Re-export the traits for convenience
pub use finview_core::{ClipboardSink, DownloadSink};

// Re-export implementations
pub use command::CommandClipboard;
pub use fs::DirectoryDownloads;
pub use memory::{MemoryClipboard, MemoryDownloads, SavedFile};
pub use noop::NoopSink;
