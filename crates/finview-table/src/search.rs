//! Company search and identifier resolution.
//!
//! Search is a plain case-insensitive substring filter over tickers and names.
//! Results come back in directory order, not ranked by relevance.

use finview_core::CompanyDirectoryEntry;

/// Number of suggestions offered for a query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Returns true if the lowercased needle occurs in the ticker or the name.
fn matches(entry: &CompanyDirectoryEntry, needle: &str) -> bool {
    entry.ticker.to_lowercase().contains(needle) || entry.name.to_lowercase().contains(needle)
}

/// Returns the first `limit` companies whose ticker or name contains the query.
///
/// A query that is blank after trimming matches nothing.
#[must_use]
pub fn filter_companies<'a>(
    directory: &'a [CompanyDirectoryEntry],
    query: &str,
    limit: usize,
) -> Vec<&'a CompanyDirectoryEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    directory
        .iter()
        .filter(|entry| matches(entry, &needle))
        .take(limit)
        .collect()
}

/// Returns the identifier used to request a company's statements: its CIK
/// zero-padded to 10 digits.
#[must_use]
pub fn resolve(entry: &CompanyDirectoryEntry) -> String {
    entry.cik.padded()
}

/// Suggestions for a search box, with a keyboard-driven selection.
///
/// Every query change recomputes the suggestions and clears the selection.
#[derive(Clone, Debug)]
pub struct SuggestionList<'a> {
    directory: &'a [CompanyDirectoryEntry],
    limit: usize,
    query: String,
    suggestions: Vec<&'a CompanyDirectoryEntry>,
    selected: Option<usize>,
}

impl<'a> SuggestionList<'a> {
    /// Creates an empty suggestion list over a directory.
    #[must_use]
    pub const fn new(directory: &'a [CompanyDirectoryEntry]) -> Self {
        Self {
            directory,
            limit: DEFAULT_SUGGESTION_LIMIT,
            query: String::new(),
            suggestions: Vec::new(),
            selected: None,
        }
    }

    /// Sets the maximum number of suggestions.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replaces the query and recomputes the suggestions.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = None;
        self.suggestions = filter_companies(self.directory, &self.query, self.limit);
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current suggestions in directory order.
    #[must_use]
    pub fn suggestions(&self) -> &[&'a CompanyDirectoryEntry] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted suggestion.
    #[must_use]
    pub fn selected(&self) -> Option<&'a CompanyDirectoryEntry> {
        self.selected.and_then(|i| self.suggestions.get(i).copied())
    }

    /// Moves the highlight down, stopping at the last suggestion.
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    /// Moves the highlight up; moving up from the first suggestion clears it.
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Clears the query, the suggestions and the highlight.
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.selected = None;
    }

    /// The company a submit navigates to: the highlighted suggestion, or the
    /// first one when nothing is highlighted. Nothing for a blank query.
    #[must_use]
    pub fn submit(&self) -> Option<&'a CompanyDirectoryEntry> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.selected().or_else(|| self.suggestions.first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<CompanyDirectoryEntry> {
        vec![
            CompanyDirectoryEntry::new(320193, "AAPL", "Apple Inc."),
            CompanyDirectoryEntry::new(789019, "MSFT", "MICROSOFT CORP"),
            CompanyDirectoryEntry::new(1418121, "APLE", "Apple Hospitality REIT, Inc."),
            CompanyDirectoryEntry::new(1108134, "BHLB", "BERKSHIRE HILLS BANCORP INC"),
            CompanyDirectoryEntry::new(6951, "AMAT", "APPLIED MATERIALS INC /DE"),
            CompanyDirectoryEntry::new(1467858, "GM", "General Motors Co"),
            CompanyDirectoryEntry::new(1800, "ABT", "ABBOTT LABORATORIES"),
            CompanyDirectoryEntry::new(1090872, "A", "AGILENT TECHNOLOGIES, INC."),
        ]
    }

    fn tickers(entries: &[&CompanyDirectoryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.ticker.clone()).collect()
    }

    #[test]
    fn test_case_insensitive_ticker_match() {
        let dir = directory();
        let found = filter_companies(&dir, "appl", DEFAULT_SUGGESTION_LIMIT);
        assert!(found.iter().any(|e| e.ticker == "AAPL"));
        assert!(found.len() <= DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(tickers(&found), ["AAPL", "APLE", "AMAT"]);
    }

    #[test]
    fn test_name_match_in_directory_order() {
        let dir = directory();
        assert_eq!(
            tickers(&filter_companies(&dir, "inc", 10)),
            ["AAPL", "APLE", "BHLB", "AMAT", "A"]
        );
    }

    #[test]
    fn test_limit() {
        let dir = directory();
        assert_eq!(filter_companies(&dir, "a", DEFAULT_SUGGESTION_LIMIT).len(), 5);
        assert_eq!(tickers(&filter_companies(&dir, "a", 2)), ["AAPL", "APLE"]);
        assert!(filter_companies(&dir, "a", 0).is_empty());
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let dir = directory();
        assert!(filter_companies(&dir, "", 5).is_empty());
        assert!(filter_companies(&dir, "   ", 5).is_empty());
        assert!(filter_companies(&dir, "zzzz", 5).is_empty());
    }

    #[test]
    fn test_resolve_pads_cik() {
        let entry = CompanyDirectoryEntry::new(320193, "AAPL", "Apple Inc.");
        assert_eq!(resolve(&entry), "0000320193");
        let entry = CompanyDirectoryEntry::new(6951, "AMAT", "APPLIED MATERIALS INC /DE");
        assert_eq!(resolve(&entry), "0000006951");
    }

    #[test]
    fn test_suggestion_navigation() {
        let dir = directory();
        let mut list = SuggestionList::new(&dir);
        list.set_query("appl");
        assert_eq!(list.suggestions().len(), 3);
        assert!(list.selected().is_none());

        list.select_next();
        list.select_next();
        assert_eq!(list.selected().unwrap().ticker, "APLE");
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_index(), Some(2));

        list.select_previous();
        assert_eq!(list.selected().unwrap().ticker, "APLE");
        list.select_previous();
        list.select_previous();
        assert!(list.selected().is_none());
        list.select_previous();
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_submit() {
        let dir = directory();
        let mut list = SuggestionList::new(&dir);
        assert!(list.submit().is_none());

        list.set_query("appl");
        assert_eq!(list.submit().unwrap().ticker, "AAPL");
        list.select_next();
        list.select_next();
        assert_eq!(list.submit().unwrap().ticker, "APLE");

        list.set_query("applied");
        assert!(list.selected().is_none());
        assert_eq!(list.submit().unwrap().ticker, "AMAT");

        list.set_query("zzzz");
        assert!(list.submit().is_none());
    }

    #[test]
    fn test_clear() {
        let dir = directory();
        let mut list = SuggestionList::new(&dir).with_limit(1);
        list.set_query("a");
        assert_eq!(list.suggestions().len(), 1);
        list.select_next();
        list.clear();
        assert_eq!(list.query(), "");
        assert!(list.suggestions().is_empty());
        assert!(list.selected().is_none());
        list.select_next();
        assert!(list.selected().is_none());
    }
}
