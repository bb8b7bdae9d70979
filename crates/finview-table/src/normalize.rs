//! Record normalization.
//!
//! A [`StatementRecord`] carries its period axis as the `reportPeriod` row and
//! mixes metadata rows in with the metrics. [`normalize`] splits a record into
//! the formatted period axis and the rows worth displaying.

use finview_core::{REPORT_PERIOD_KEY, Row, StatementRecord};
use serde::Serialize;

/// A statement ready for display or export.
///
/// `rows` keep their full cell list (key first). In a well-formed table every
/// row has exactly one value per period.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayTable {
    /// Formatted period labels (`YYYY-MM-DD`), one per column.
    pub periods: Vec<String>,
    /// Displayable metric rows in source order.
    pub rows: Vec<Row>,
}

impl DisplayTable {
    /// Returns true if every row has one value per period.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.values().len() == self.periods.len())
    }

    /// Returns true if there are no displayable rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Formats an 8-character `YYYYMMDD` token as `YYYY-MM-DD`.
///
/// No validation is done: the token is cut at character positions 4, 6 and 8,
/// and anything shorter yields shorter pieces. An empty token yields an empty
/// string.
#[must_use]
pub fn format_period(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    format!(
        "{}-{}-{}",
        char_slice(token, 0, 4),
        char_slice(token, 4, 6),
        char_slice(token, 6, 8)
    )
}

/// Slice by character positions, clamped to the end of the string.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[byte_at(start)..byte_at(end)]
}

/// Returns the formatted period axis of a record.
///
/// Uses the first `reportPeriod` row. Empty tokens are dropped; order is kept.
#[must_use]
pub fn extract_periods(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .find(|row| row.key() == REPORT_PERIOD_KEY)
        .map(|row| {
            row.values()
                .iter()
                .map(|token| format_period(token))
                .filter(|period| !period.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Returns the rows worth displaying, in source order.
///
/// A row survives if its key is non-empty, is not a control key, and at least
/// one of its values is non-empty.
#[must_use]
pub fn extract_display_rows(rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .filter(|row| !row.key().is_empty() && !row.is_control() && row.has_values())
        .cloned()
        .collect()
}

/// Derives the display table of a record.
#[must_use]
pub fn normalize(record: &StatementRecord) -> DisplayTable {
    DisplayTable {
        periods: extract_periods(&record.rows),
        rows: extract_display_rows(&record.rows),
    }
}
