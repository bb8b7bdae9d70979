//! Statement ordering and filtering.
//!
//! Statements of one company are shown income statement first, then balance
//! sheet, then cash flow. Unknown statement codes sort ahead of all three.

use finview_core::{StatementRecord, StatementSelection};

/// Sorts records into display order.
///
/// The sort is stable: records with the same statement type keep their
/// relative input order.
pub fn sort_statements(records: &mut [StatementRecord]) {
    records.sort_by_key(|record| record.statement_type.priority());
}

/// Keeps the records that pass the selection, preserving their order.
pub fn filter_by_type<'a, I>(records: I, selection: StatementSelection) -> Vec<&'a StatementRecord>
where
    I: IntoIterator<Item = &'a StatementRecord>,
{
    records
        .into_iter()
        .filter(|record| selection.matches(&record.statement_type))
        .collect()
}

/// Orders the records for display and applies the selection.
///
/// The input slice is left untouched.
#[must_use]
pub fn collate(
    records: &[StatementRecord],
    selection: StatementSelection,
) -> Vec<&StatementRecord> {
    let mut ordered: Vec<&StatementRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.statement_type.priority());
    filter_by_type(ordered, selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finview_core::StatementType;

    fn record(id: &str, kind: StatementType) -> StatementRecord {
        StatementRecord::new(id, "0000320193", kind, Vec::new())
    }

    fn ids(records: &[&StatementRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_sort_statements() {
        let mut records = vec![
            record("cf", StatementType::CashFlow),
            record("is", StatementType::IncomeStatement),
            record("bs", StatementType::BalanceSheet),
        ];
        sort_statements(&mut records);
        let kinds: Vec<_> = records.iter().map(|r| r.statement_type.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                StatementType::IncomeStatement,
                StatementType::BalanceSheet,
                StatementType::CashFlow,
            ]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut records = vec![
            record("is-1", StatementType::IncomeStatement),
            record("bs", StatementType::BalanceSheet),
            record("is-2", StatementType::IncomeStatement),
        ];
        sort_statements(&mut records);
        let order: Vec<_> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(order, ["is-1", "is-2", "bs"]);
    }

    #[test]
    fn test_unknown_types_sort_first() {
        let records = vec![
            record("is", StatementType::IncomeStatement),
            record("eq", StatementType::Other("EQ".into())),
        ];
        assert_eq!(ids(&collate(&records, StatementSelection::All)), ["eq", "is"]);
    }

    #[test]
    fn test_filter_after_sort() {
        let records = vec![
            record("cf", StatementType::CashFlow),
            record("bs-1", StatementType::BalanceSheet),
            record("is", StatementType::IncomeStatement),
            record("bs-2", StatementType::BalanceSheet),
        ];
        assert_eq!(
            ids(&collate(&records, StatementSelection::BalanceSheet)),
            ["bs-1", "bs-2"]
        );
        assert_eq!(
            ids(&collate(&records, StatementSelection::All)),
            ["is", "bs-1", "bs-2", "cf"]
        );
        assert!(collate(&[], StatementSelection::CashFlow).is_empty());
    }

    #[test]
    fn test_filter_by_type_keeps_input_order() {
        let records = vec![
            record("cf-1", StatementType::CashFlow),
            record("is", StatementType::IncomeStatement),
            record("cf-2", StatementType::CashFlow),
        ];
        assert_eq!(
            ids(&filter_by_type(&records, StatementSelection::CashFlow)),
            ["cf-1", "cf-2"]
        );
    }
}
