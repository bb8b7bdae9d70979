//! Navigation, view state and export actions.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use finview_core::{
    ClipboardSink, CompanyDirectoryEntry, DownloadSink, StatementRecord, StatementSelection,
    StatementSource, StatementType, ViewError,
};
use finview_table::{
    CompanyDirectory, CsvDocument, DisplayTable, filter_by_type, normalize, resolve,
    sort_statements, to_clipboard_text, to_csv,
};

/// Issues navigations and tells whether one is still the latest.
///
/// Every navigation takes a new generation number. Leaving the view bumps the
/// generation as well, so a fetch that completes afterwards is stale.
#[derive(Debug, Default)]
pub struct Navigator {
    generation: AtomicU64,
}

impl Navigator {
    /// Create a navigator with no navigation issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a navigation, superseding every earlier one.
    pub fn navigate(&self, identifier: impl Into<String>, ticker: impl Into<String>) -> Navigation {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Navigation {
            generation,
            identifier: identifier.into(),
            ticker: ticker.into(),
        }
    }

    /// Leaves the view. Navigations in flight become stale.
    pub fn leave(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns true if no navigation was started and the view was not left
    /// since `navigation` was issued.
    #[must_use]
    pub fn is_current(&self, navigation: &Navigation) -> bool {
        self.generation.load(Ordering::SeqCst) == navigation.generation
    }
}

/// One request to show a company's statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    generation: u64,
    /// Identifier sent to the statement source (padded CIK or raw ticker).
    pub identifier: String,
    /// Ticker shown to the user and used in export filenames.
    pub ticker: String,
}

impl Navigation {
    /// Generation number issued by the [`Navigator`].
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of a navigation that was still current when its fetch completed.
#[derive(Debug)]
pub enum ViewState {
    /// The company has statements.
    Loaded(StatementView),
    /// The source has nothing for the identifier.
    NotFound {
        /// Ticker the user asked for.
        ticker: String,
    },
    /// The fetch failed.
    Failed {
        /// Ticker the user asked for.
        ticker: String,
        /// Underlying error.
        error: ViewError,
    },
}

impl ViewState {
    /// Returns the loaded view, if any.
    #[must_use]
    pub const fn view(&self) -> Option<&StatementView> {
        match self {
            Self::Loaded(view) => Some(view),
            _ => None,
        }
    }

    /// Message shown instead of the tables, if the view did not load.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loaded(_) => None,
            Self::NotFound { ticker } => Some(format!("No data found for ticker: {ticker}")),
            Self::Failed { error, .. } => Some(format!("Error: {error}")),
        }
    }
}

/// Statements of one company, with the statement type the user selected.
#[derive(Clone, Debug)]
pub struct StatementView {
    ticker: String,
    identifier: String,
    records: Vec<StatementRecord>,
    selection: StatementSelection,
}

impl StatementView {
    /// Create a view over fetched records, put into display order.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        identifier: impl Into<String>,
        mut records: Vec<StatementRecord>,
    ) -> Self {
        sort_statements(&mut records);
        Self {
            ticker: ticker.into(),
            identifier: identifier.into(),
            records,
            selection: StatementSelection::All,
        }
    }

    /// Ticker used in export filenames.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Identifier the records were fetched with.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Entity identifier carried by the first record.
    #[must_use]
    pub fn entity_id(&self) -> Option<&str> {
        self.records.first().map(|r| r.entity_id.as_str())
    }

    /// All records in display order.
    #[must_use]
    pub fn records(&self) -> &[StatementRecord] {
        &self.records
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> StatementSelection {
        self.selection
    }

    /// Changes the selection.
    pub fn select(&mut self, selection: StatementSelection) {
        self.selection = selection;
    }

    /// Normalized tables of the selected statements, in display order.
    #[must_use]
    pub fn panels(&self) -> Vec<StatementPanel<'_>> {
        filter_by_type(&self.records, self.selection)
            .into_iter()
            .map(StatementPanel::new)
            .collect()
    }

    /// Copies a panel's table to the clipboard.
    pub async fn copy(
        &self,
        panel: &StatementPanel<'_>,
        clipboard: &dyn ClipboardSink,
    ) -> Notification {
        match clipboard.write(&panel.clipboard_text()).await {
            Ok(()) => {
                debug!(ticker = %self.ticker, statement = panel.statement_type().code(), "Copied table");
                Notification::success("Table copied to clipboard!")
            }
            Err(e) => {
                warn!(ticker = %self.ticker, error = %e, "Failed to copy table");
                Notification::failure("Failed to copy to clipboard")
            }
        }
    }

    /// Saves a panel's table as a CSV file.
    pub async fn download(
        &self,
        panel: &StatementPanel<'_>,
        downloads: &dyn DownloadSink,
    ) -> Notification {
        let csv = panel.csv(&self.ticker);
        match downloads
            .save(&csv.filename, csv.as_bytes(), csv.mime_type())
            .await
        {
            Ok(()) => {
                info!(ticker = %self.ticker, filename = %csv.filename, "Downloaded statement");
                Notification::success(format!("Downloaded {}", csv.filename))
            }
            Err(e) => {
                warn!(ticker = %self.ticker, filename = %csv.filename, error = %e, "Failed to download CSV");
                Notification::failure("Failed to download CSV file")
            }
        }
    }
}

/// One statement with its display table.
#[derive(Clone, Debug)]
pub struct StatementPanel<'a> {
    /// Source record.
    pub record: &'a StatementRecord,
    /// Normalized table.
    pub table: DisplayTable,
}

impl<'a> StatementPanel<'a> {
    /// Normalizes a record into a panel.
    #[must_use]
    pub fn new(record: &'a StatementRecord) -> Self {
        Self {
            record,
            table: normalize(record),
        }
    }

    /// Statement type of the record.
    #[must_use]
    pub const fn statement_type(&self) -> &StatementType {
        &self.record.statement_type
    }

    /// Heading of the panel.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.record.statement_type.label()
    }

    /// Tab-delimited table text.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        to_clipboard_text(&self.table.periods, &self.table.rows)
    }

    /// CSV document named after `ticker`.
    #[must_use]
    pub fn csv(&self, ticker: &str) -> CsvDocument {
        to_csv(
            ticker,
            &self.record.statement_type,
            &self.table.periods,
            &self.table.rows,
        )
    }
}

/// Whether an action succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action completed.
    Success,
    /// The action failed; details went to the log.
    Failure,
}

/// One-shot message reporting the outcome of an export action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Outcome.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }

    /// Returns true for a successful action.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Resolves searches, fetches statements and discards stale results.
///
/// # Example
///
/// ```rust,ignore
/// let viewer = StatementViewer::new(source, directory);
/// let navigation = viewer.navigate("apple").expect("non-empty query");
/// match viewer.load(navigation).await {
///     Some(ViewState::Loaded(view)) => println!("{} statements", view.records().len()),
///     Some(state) => println!("{}", state.message().unwrap_or_default()),
///     None => {} // superseded
/// }
/// ```
pub struct StatementViewer {
    source: Arc<dyn StatementSource>,
    directory: Arc<CompanyDirectory>,
    navigator: Navigator,
}

impl fmt::Debug for StatementViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementViewer")
            .field("source", &self.source.name())
            .field("companies", &self.directory.len())
            .field("navigator", &self.navigator)
            .finish()
    }
}

impl StatementViewer {
    /// Create a viewer over a statement source and a company directory.
    #[must_use]
    pub fn new(source: Arc<dyn StatementSource>, directory: Arc<CompanyDirectory>) -> Self {
        Self {
            source,
            directory,
            navigator: Navigator::new(),
        }
    }

    /// Company directory used for search.
    #[must_use]
    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    /// Navigator issuing this viewer's navigations.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Search suggestions for a query.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&CompanyDirectoryEntry> {
        self.directory.suggest(query)
    }

    /// Starts a navigation for a search query.
    ///
    /// An exact ticker match wins, then the first suggestion. A query that
    /// matches no company is sent to the source as given. Returns `None` for a
    /// blank query.
    pub fn navigate(&self, query: &str) -> Option<Navigation> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let entry = self
            .directory
            .lookup_ticker(query)
            .or_else(|| self.suggest(query).into_iter().next());
        Some(match entry {
            Some(entry) => self.navigate_to(entry),
            None => {
                debug!(query, "No company matches, using query as identifier");
                self.navigator.navigate(query, query)
            }
        })
    }

    /// Starts a navigation to a directory entry.
    pub fn navigate_to(&self, entry: &CompanyDirectoryEntry) -> Navigation {
        self.navigator.navigate(resolve(entry), entry.ticker.clone())
    }

    /// Starts a navigation with an identifier sent to the source unresolved.
    pub fn navigate_raw(&self, identifier: &str) -> Navigation {
        let identifier = identifier.trim();
        self.navigator.navigate(identifier, identifier)
    }

    /// Leaves the view; pending loads will be discarded.
    pub fn leave(&self) {
        self.navigator.leave();
    }

    /// Fetches the statements of a navigation.
    ///
    /// Returns `None` if a newer navigation started, or the view was left,
    /// while the fetch was in flight.
    pub async fn load(&self, navigation: Navigation) -> Option<ViewState> {
        debug!(
            source = self.source.name(),
            identifier = %navigation.identifier,
            generation = navigation.generation,
            "Loading statements"
        );
        let result = self.source.fetch_statements(&navigation.identifier).await;

        if !self.navigator.is_current(&navigation) {
            debug!(
                identifier = %navigation.identifier,
                generation = navigation.generation,
                "Discarding stale statements"
            );
            return None;
        }

        let Navigation {
            identifier, ticker, ..
        } = navigation;
        Some(match result {
            Ok(records) if records.is_empty() => ViewState::NotFound { ticker },
            Ok(records) => ViewState::Loaded(StatementView::new(ticker, identifier, records)),
            Err(e) if e.is_not_found() => ViewState::NotFound { ticker },
            Err(error) => {
                warn!(identifier = %identifier, error = %error, "Failed to load statements");
                ViewState::Failed { ticker, error }
            }
        })
    }

    /// Navigates to a search query and loads it.
    ///
    /// Returns `None` for a blank query or a superseded navigation.
    pub async fn open(&self, query: &str) -> Option<ViewState> {
        let navigation = self.navigate(query)?;
        self.load(navigation).await
    }
}
