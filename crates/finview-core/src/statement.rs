//! Statement type and selection definitions.
//!
//! This module defines [`StatementType`] for the kind of a statement record and
//! [`StatementSelection`] for the filter a view applies to a set of records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// Kind of financial statement.
///
/// On the wire statement types are short codes (`IS`, `BS`, `CF`). Codes outside
/// that set are carried verbatim in [`StatementType::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum StatementType {
    /// Income statement (`IS`).
    IncomeStatement,
    /// Balance sheet (`BS`).
    BalanceSheet,
    /// Cash flow statement (`CF`).
    CashFlow,
    /// Any other code served by the backend.
    Other(String),
}

impl StatementType {
    /// Returns the wire code for this statement type.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::IncomeStatement => "IS",
            Self::BalanceSheet => "BS",
            Self::CashFlow => "CF",
            Self::Other(code) => code,
        }
    }

    /// Display ordering priority. Unknown codes sort before the three known kinds.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::IncomeStatement => 1,
            Self::BalanceSheet => 2,
            Self::CashFlow => 3,
            Self::Other(_) => 0,
        }
    }

    /// Human-readable heading for the statement.
    ///
    /// Anything that is not a balance sheet or income statement is labelled
    /// "Cash Flow Statement", unknown codes included.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            _ => "Cash Flow Statement",
        }
    }
}

impl From<String> for StatementType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "IS" => Self::IncomeStatement,
            "BS" => Self::BalanceSheet,
            "CF" => Self::CashFlow,
            _ => Self::Other(code),
        }
    }
}

impl Default for StatementType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<Option<String>> for StatementType {
    fn from(code: Option<String>) -> Self {
        code.map_or_else(Self::default, Self::from)
    }
}

impl From<&str> for StatementType {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<StatementType> for String {
    fn from(kind: StatementType) -> Self {
        match kind {
            StatementType::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which statements a view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementSelection {
    /// Every statement.
    #[default]
    All,
    /// Only income statements.
    IncomeStatement,
    /// Only balance sheets.
    BalanceSheet,
    /// Only cash flow statements.
    CashFlow,
}

impl StatementSelection {
    /// All selections in the order a view offers them.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
    ];

    /// Returns true if a statement of the given type passes this selection.
    #[must_use]
    pub fn matches(&self, kind: &StatementType) -> bool {
        match self {
            Self::All => true,
            Self::IncomeStatement => *kind == StatementType::IncomeStatement,
            Self::BalanceSheet => *kind == StatementType::BalanceSheet,
            Self::CashFlow => *kind == StatementType::CashFlow,
        }
    }

    /// Label shown for this selection.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow Statement",
        }
    }
}

impl fmt::Display for StatementSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatementSelection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "is" | "income" | "income statement" => Ok(Self::IncomeStatement),
            "bs" | "balance" | "balance sheet" => Ok(Self::BalanceSheet),
            "cf" | "cash flow" | "cash flow statement" => Ok(Self::CashFlow),
            other => Err(ViewError::InvalidParameter(format!(
                "unknown statement selection: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_serde() {
        let kinds: Vec<StatementType> = serde_json::from_str(r#"["IS","BS","CF","XX"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                StatementType::IncomeStatement,
                StatementType::BalanceSheet,
                StatementType::CashFlow,
                StatementType::Other("XX".into()),
            ]
        );
        assert_eq!(
            serde_json::to_string(&kinds).unwrap(),
            r#"["IS","BS","CF","XX"]"#
        );
    }

    #[test]
    fn test_missing_code_is_empty_other() {
        let kinds: Vec<StatementType> = serde_json::from_str(r#"[null, ""]"#).unwrap();
        assert_eq!(kinds, vec![StatementType::default(); 2]);
        assert_eq!(StatementType::default().priority(), 0);
        assert_eq!(StatementType::default().label(), "Cash Flow Statement");
        assert_eq!(StatementType::default().code(), "");
    }

    #[test]
    fn test_priority() {
        assert_eq!(StatementType::Other("EQ".into()).priority(), 0);
        assert!(StatementType::IncomeStatement.priority() < StatementType::BalanceSheet.priority());
        assert!(StatementType::BalanceSheet.priority() < StatementType::CashFlow.priority());
    }

    #[test]
    fn test_unknown_codes_are_labelled_cash_flow() {
        assert_eq!(StatementType::BalanceSheet.label(), "Balance Sheet");
        assert_eq!(StatementType::IncomeStatement.label(), "Income Statement");
        assert_eq!(StatementType::CashFlow.label(), "Cash Flow Statement");
        assert_eq!(
            StatementType::Other("EQ".into()).label(),
            "Cash Flow Statement"
        );
    }

    #[test]
    fn test_selection_matches() {
        assert!(StatementSelection::All.matches(&StatementType::Other("EQ".into())));
        assert!(StatementSelection::BalanceSheet.matches(&StatementType::BalanceSheet));
        assert!(!StatementSelection::BalanceSheet.matches(&StatementType::CashFlow));
        assert!(!StatementSelection::CashFlow.matches(&StatementType::Other("EQ".into())));
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("ALL".parse::<StatementSelection>().unwrap(), StatementSelection::All);
        assert_eq!("is".parse::<StatementSelection>().unwrap(), StatementSelection::IncomeStatement);
        assert_eq!(
            "Balance Sheet".parse::<StatementSelection>().unwrap(),
            StatementSelection::BalanceSheet
        );
        assert_eq!(" cf ".parse::<StatementSelection>().unwrap(), StatementSelection::CashFlow);
        assert!("equity".parse::<StatementSelection>().is_err());
    }
}
