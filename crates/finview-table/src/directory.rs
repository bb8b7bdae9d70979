//! Company directory reference data.
//!
//! The directory is the SEC ticker list. It is loaded once, never mutated, and
//! shared by reference with whatever needs to search it.

use finview_core::{CompanyDirectoryEntry, Result, ViewError};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use crate::search::{self, DEFAULT_SUGGESTION_LIMIT};

/// Read-only list of companies in directory order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyDirectory {
    entries: Vec<CompanyDirectoryEntry>,
}

/// The two layouts a directory document comes in.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectoryDocument {
    /// SEC layout: `{"0": {...}, "1": {...}}`.
    Keyed(KeyedEntries),
    /// Plain array of entries.
    Listed(Vec<CompanyDirectoryEntry>),
}

/// Object members in document order.
struct KeyedEntries(Vec<(String, CompanyDirectoryEntry)>);

impl<'de> Deserialize<'de> for KeyedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = KeyedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of company entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(member) = map.next_entry::<String, CompanyDirectoryEntry>()? {
                    entries.push(member);
                }
                Ok(KeyedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Returns the key as an array index: plain decimal digits, no leading zero,
/// below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}

/// Array-index keys ascending ahead of all other keys. Other keys compare
/// equal so a stable sort keeps them in document order, as a JavaScript
/// object enumerates its members.
fn key_order(a: &str, b: &str) -> Ordering {
    match (array_index(a), array_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl CompanyDirectory {
    /// Creates a directory from entries already in directory order.
    #[must_use]
    pub const fn new(entries: Vec<CompanyDirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Parses a directory document.
    ///
    /// Accepts the SEC `company_tickers.json` layout, ordered by its numeric
    /// keys with any other keys after them in document order, or a plain JSON
    /// array of entries kept in array order.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: DirectoryDocument = serde_json::from_str(json)
            .map_err(|e| ViewError::Parse(format!("Failed to parse company directory: {e}")))?;

        let entries = match document {
            DirectoryDocument::Keyed(KeyedEntries(mut keyed)) => {
                keyed.sort_by(|(a, _), (b, _)| key_order(a, b));
                keyed.into_iter().map(|(_, entry)| entry).collect()
            }
            DirectoryDocument::Listed(entries) => entries,
        };

        debug!(companies = entries.len(), "Loaded company directory");
        Ok(Self { entries })
    }

    /// Number of companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the directory has no companies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in directory order.
    #[must_use]
    pub fn entries(&self) -> &[CompanyDirectoryEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &CompanyDirectoryEntry> {
        self.entries.iter()
    }

    /// Returns up to five companies matching the query.
    ///
    /// See [`search::filter_companies`].
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&CompanyDirectoryEntry> {
        search::filter_companies(&self.entries, query, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Finds the company with exactly this ticker, ignoring case.
    #[must_use]
    pub fn lookup_ticker(&self, ticker: &str) -> Option<&CompanyDirectoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.ticker.eq_ignore_ascii_case(ticker.trim()))
    }
}

impl<'a> IntoIterator for &'a CompanyDirectory {
    type Item = &'a CompanyDirectoryEntry;
    type IntoIter = std::slice::Iter<'a, CompanyDirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<CompanyDirectoryEntry> for CompanyDirectory {
    fn from_iter<I: IntoIterator<Item = CompanyDirectoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
