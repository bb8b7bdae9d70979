//! Clipboard and CSV serialization of display tables.
//!
//! Both formats put a `Metric` header cell ahead of the period labels and write
//! every row cell by cell, key first. Neither format escapes tabs, newlines or
//! double quotes inside cells; CSV only wraps cells containing a comma in
//! double quotes.

use finview_core::{Row, StatementType};

/// Header cell above the metric column.
pub const METRIC_HEADER: &str = "Metric";

/// MIME type of exported CSV documents.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// A CSV export ready to hand to a download sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvDocument {
    /// Suggested file name (`{ticker}_{type}_statement.csv`).
    pub filename: String,
    /// Document text.
    pub content: String,
}

impl CsvDocument {
    /// MIME type of the document.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        CSV_MIME_TYPE
    }

    /// UTF-8 bytes of the document.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

fn header(dates: &[String]) -> impl Iterator<Item = &str> {
    std::iter::once(METRIC_HEADER).chain(dates.iter().map(String::as_str))
}

fn join_lines(dates: &[String], rows: &[Row], delimiter: &str, cell: fn(&str) -> String) -> String {
    let header_line = header(dates).map(cell).collect::<Vec<_>>().join(delimiter);
    std::iter::once(header_line)
        .chain(rows.iter().map(|row| {
            row.cells()
                .iter()
                .map(|c| cell(c))
                .collect::<Vec<_>>()
                .join(delimiter)
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a table as tab-delimited text for the clipboard.
///
/// Cells are written verbatim; a tab or newline inside a cell breaks the
/// layout.
#[must_use]
pub fn to_clipboard_text(dates: &[String], rows: &[Row]) -> String {
    join_lines(dates, rows, "\t", str::to_string)
}

/// Quotes a CSV cell if it contains a comma.
fn csv_cell(cell: &str) -> String {
    if cell.contains(',') {
        format!("\"{cell}\"")
    } else {
        cell.to_string()
    }
}

/// Renders a table as CSV text.
#[must_use]
pub fn csv_content(dates: &[String], rows: &[Row]) -> String {
    join_lines(dates, rows, ",", csv_cell)
}

/// File name of a CSV export.
#[must_use]
pub fn csv_filename(ticker: &str, statement_type: &StatementType) -> String {
    format!("{ticker}_{}_statement.csv", statement_type.code())
}

/// Builds the CSV export of a table.
#[must_use]
pub fn to_csv(
    ticker: &str,
    statement_type: &StatementType,
    dates: &[String],
    rows: &[Row],
) -> CsvDocument {
    CsvDocument {
        filename: csv_filename(ticker, statement_type),
        content: csv_content(dates, rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(d: &[&str]) -> Vec<String> {
        d.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_clipboard_text() {
        let text = to_clipboard_text(
            &dates(&["2023-01-01", "2023-04-01"]),
            &[
                Row::from(["Revenue", "100", "200"]),
                Row::from(["Net income", "", "7"]),
            ],
        );
        assert_eq!(
            text,
            "Metric\t2023-01-01\t2023-04-01\nRevenue\t100\t200\nNet income\t\t7"
        );
    }

    #[test]
    fn test_clipboard_text_header_only() {
        assert_eq!(to_clipboard_text(&[], &[]), "Metric");
    }

    #[test]
    fn test_clipboard_text_does_not_escape() {
        let text = to_clipboard_text(&dates(&["2023-01-01"]), &[Row::from(["a\tb", "1"])]);
        assert_eq!(text, "Metric\t2023-01-01\na\tb\t1");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let doc = to_csv(
            "AAPL",
            &StatementType::IncomeStatement,
            &dates(&["2023-01-01"]),
            &[Row::from(["Revenue, Net", "100"])],
        );
        let lines: Vec<_> = doc.content.lines().collect();
        assert_eq!(lines, ["Metric,2023-01-01", "\"Revenue, Net\",100"]);
        assert_eq!(doc.filename, "AAPL_IS_statement.csv");
        assert_eq!(doc.mime_type(), "text/csv;charset=utf-8");
    }

    #[test]
    fn test_csv_leaves_quotes_and_values_alone() {
        let content = csv_content(
            &dates(&["2023-01-01", "2023-04-01"]),
            &[Row::from(["Shares \"A\"", "1,000", "-5"])],
        );
        assert_eq!(
            content,
            "Metric,2023-01-01,2023-04-01\nShares \"A\",\"1,000\",-5"
        );
    }

    #[test]
    fn test_csv_filename_uses_wire_code() {
        assert_eq!(
            csv_filename("MSFT", &StatementType::BalanceSheet),
            "MSFT_BS_statement.csv"
        );
        assert_eq!(
            csv_filename("MSFT", &StatementType::Other("EQ".into())),
            "MSFT_EQ_statement.csv"
        );
    }

    #[test]
    fn test_clipboard_round_trip() {
        let periods = dates(&["2023-01-01", "2023-04-01"]);
        let rows = vec![
            Row::from(["Revenue, Net", "100", "200"]),
            Row::from(["EPS", "", "1.52"]),
        ];
        let text = to_clipboard_text(&periods, &rows);

        let mut lines = text.split('\n');
        let header: Vec<_> = lines.next().unwrap().split('\t').collect();
        assert_eq!(header, ["Metric", "2023-01-01", "2023-04-01"]);
        let parsed: Vec<Row> = lines
            .map(|line| Row::new(line.split('\t').map(str::to_string).collect()))
            .collect();
        assert_eq!(parsed, rows);
    }
}
