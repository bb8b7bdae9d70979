//! Core data types for statement records and company reference data.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Row`] - One labelled line of a statement
//! - [`StatementRecord`] - A statement as served by the backend
//! - [`RecordId`] - Opaque record identifier
//! - [`Cik`] - SEC Central Index Key
//! - [`CompanyDirectoryEntry`] - Company reference information

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;
use crate::statement::StatementType;

/// Key of the row holding the canonical period tokens of a record.
pub const REPORT_PERIOD_KEY: &str = "reportPeriod";

/// Row keys that carry record metadata rather than displayable metrics.
pub const CONTROL_KEYS: [&str; 7] = [
    "accessionNumber",
    "form",
    "reportDate",
    "denomination",
    REPORT_PERIOD_KEY,
    "reportDurationInMonths",
    "separator",
];

/// One line of a statement: a metric key followed by per-period values.
///
/// Value `i` (position `i + 1` of the row) belongs to the `i`-th period of the
/// record. `null` cells are read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Option<String>>", into = "Vec<String>")]
pub struct Row(Vec<String>);

impl Row {
    /// Creates a row from its cells, key first.
    #[must_use]
    pub const fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Metric key of the row, empty for an empty row.
    #[must_use]
    pub fn key(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// Per-period values (every cell after the key).
    #[must_use]
    pub fn values(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    /// All cells, key first.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Returns true if the key names record metadata.
    #[must_use]
    pub fn is_control(&self) -> bool {
        CONTROL_KEYS.contains(&self.key())
    }

    /// Returns true if at least one per-period value is non-empty.
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.values().iter().any(|v| !v.is_empty())
    }

    /// Consumes the row and returns its cells.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<Option<String>>> for Row {
    fn from(cells: Vec<Option<String>>) -> Self {
        Self(cells.into_iter().map(Option::unwrap_or_default).collect())
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(cells: [&str; N]) -> Self {
        Self(cells.iter().map(|c| (*c).to_string()).collect())
    }
}

impl From<Row> for Vec<String> {
    fn from(row: Row) -> Self {
        row.0
    }
}

/// Opaque identifier of a stored record.
///
/// The backend serves either a plain string or an extended-JSON object id
/// (`{"$oid": "..."}`); both are read into the same string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecordId", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecordId {
    Plain(String),
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl From<RawRecordId> for RecordId {
    fn from(raw: RawRecordId) -> Self {
        match raw {
            RawRecordId::Plain(s) | RawRecordId::ObjectId { oid: s } => Self(s),
        }
    }
}

/// A financial statement as served by the backend.
///
/// Records are immutable once received and live as long as the view that
/// fetched them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Store identifier.
    #[serde(rename = "_id", default)]
    pub id: RecordId,
    /// Company identifier (zero-padded CIK), empty if the record has none.
    #[serde(rename = "cik", default, deserialize_with = "null_as_default")]
    pub entity_id: String,
    /// Kind of statement. A missing or `null` type reads as an empty
    /// [`StatementType::Other`].
    #[serde(rename = "financialStatementType", default)]
    pub statement_type: StatementType,
    /// Statement lines in source order.
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub rows: Vec<Row>,
}

/// Reads `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl StatementRecord {
    /// Creates a new record with required fields.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        entity_id: impl Into<String>,
        statement_type: StatementType,
        rows: Vec<Row>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_id: entity_id.into(),
            statement_type,
            rows,
        }
    }

    /// Returns the first row with the given key.
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.key() == key)
    }
}

/// SEC Central Index Key.
///
/// Displayed and sent to the backend zero-padded to 10 digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cik(u64);

impl Cik {
    /// Width of a padded CIK.
    pub const WIDTH: usize = 10;

    /// Creates a CIK from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the CIK zero-padded to 10 digits.
    #[must_use]
    pub fn padded(&self) -> String {
        format!("{:0>width$}", self.0, width = Self::WIDTH)
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.padded())
    }
}

impl FromStr for Cik {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches("CIK");
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|e| ViewError::InvalidParameter(format!("invalid CIK {s:?}: {e}")))
    }
}

impl From<u64> for Cik {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Company reference information from the SEC ticker directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyDirectoryEntry {
    /// SEC CIK number.
    #[serde(rename = "cik_str")]
    pub cik: Cik,
    /// Ticker symbol.
    pub ticker: String,
    /// Company name.
    #[serde(rename = "title")]
    pub name: String,
}

impl CompanyDirectoryEntry {
    /// Creates a new directory entry.
    #[must_use]
    pub fn new(cik: u64, ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cik: Cik::new(cik),
            ticker: ticker.into(),
            name: name.into(),
        }
    }
}
