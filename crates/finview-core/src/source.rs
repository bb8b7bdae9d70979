//! Statement source trait.
//!
//! A [`StatementSource`] turns an identifier (a raw ticker or a zero-padded CIK)
//! into the statement records stored for it.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::Result, types::StatementRecord};

/// Source of statement records.
///
/// Implementations must report "nothing stored for this identifier" as
/// [`ViewError::NotFound`](crate::ViewError::NotFound) and never as an empty
/// vector, so callers can tell the two outcomes of a successful request apart
/// from a failed one.
#[async_trait]
pub trait StatementSource: Send + Sync + Debug {
    /// Returns the name of this source (e.g., "Statements API").
    fn name(&self) -> &str;

    /// Fetches every statement stored for the identifier.
    async fn fetch_statements(&self, identifier: &str) -> Result<Vec<StatementRecord>>;
}
