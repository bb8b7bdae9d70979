//! Terminal rendering of statement tables.

use finview::{CompanyDirectoryEntry, StatementPanel, StatementView, export::METRIC_HEADER};
use serde::Serialize;

/// Renders a table with the metric column left-aligned and values
/// right-aligned, one line per row.
pub(crate) fn render_table(panel: &StatementPanel<'_>) -> String {
    let table = &panel.table;
    let header: Vec<&str> = std::iter::once(METRIC_HEADER)
        .chain(table.periods.iter().map(String::as_str))
        .collect();
    let lines: Vec<Vec<&str>> = std::iter::once(header)
        .chain(
            table
                .rows
                .iter()
                .map(|row| row.cells().iter().map(String::as_str).collect()),
        )
        .collect();

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            lines
                .iter()
                .filter_map(|line| line.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    lines
        .iter()
        .map(|line| {
            line.iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == 0 {
                        format!("{cell:<width$}", width = widths[i])
                    } else {
                        format!("{cell:>width$}", width = widths[i])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints every selected statement of a view.
pub(crate) fn print_view(view: &StatementView) {
    println!("{} ({})", view.ticker(), view.selection());
    if let Some(entity_id) = view.entity_id() {
        println!("CIK: {entity_id}");
    }
    for panel in view.panels() {
        println!("\n{}", panel.label());
        if panel.table.is_empty() {
            println!("(no rows)");
        } else {
            println!("{}", render_table(&panel));
        }
    }
}

#[derive(Serialize)]
struct JsonPanel<'a> {
    statement_type: &'a str,
    label: &'a str,
    periods: &'a [String],
    rows: &'a [finview::Row],
}

#[derive(Serialize)]
struct JsonView<'a> {
    ticker: &'a str,
    entity_id: Option<&'a str>,
    statements: Vec<JsonPanel<'a>>,
}

/// Serializes the selected statements of a view as JSON.
pub(crate) fn view_json(view: &StatementView) -> serde_json::Result<String> {
    let panels = view.panels();
    let json = JsonView {
        ticker: view.ticker(),
        entity_id: view.entity_id(),
        statements: panels
            .iter()
            .map(|panel| JsonPanel {
                statement_type: panel.statement_type().code(),
                label: panel.label(),
                periods: &panel.table.periods,
                rows: &panel.table.rows,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}

/// Renders the selected statements of a view as long-format DataFrames.
pub(crate) fn render_frames(view: &StatementView) -> finview::Result<String> {
    let mut blocks = Vec::new();
    for panel in view.panels() {
        let df = panel.table.to_dataframe()?;
        blocks.push(format!("{}\n{df}", panel.label()));
    }
    Ok(blocks.join("\n\n"))
}

/// One search result line.
pub(crate) fn render_entry(entry: &CompanyDirectoryEntry) -> String {
    format!("{:<8} {}  {}", entry.ticker, entry.cik, entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finview::{Row, StatementRecord, StatementType};

    fn view() -> StatementView {
        StatementView::new(
            "AAPL",
            "0000320193",
            vec![StatementRecord::new(
                "1",
                "0000320193",
                StatementType::IncomeStatement,
                vec![
                    Row::from(["reportPeriod", "20230930", "20220930"]),
                    Row::from(["Revenue", "383285", "394328"]),
                    Row::from(["EPS", "6.16", "6.15"]),
                ],
            )],
        )
    }

    #[test]
    fn test_render_table() {
        let view = view();
        let panels = view.panels();
        assert_eq!(
            render_table(&panels[0]),
            "Metric   2023-09-30  2022-09-30\n\
             Revenue      383285      394328\n\
             EPS            6.16        6.15"
        );
    }

    #[test]
    fn test_view_json() {
        let json: serde_json::Value = serde_json::from_str(&view_json(&view()).unwrap()).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["statements"][0]["statement_type"], "IS");
        assert_eq!(json["statements"][0]["label"], "Income Statement");
        assert_eq!(json["statements"][0]["periods"][1], "2022-09-30");
        assert_eq!(json["statements"][0]["rows"][0][1], "383285");
    }

    #[test]
    fn test_render_frames() {
        let text = render_frames(&view()).unwrap();
        assert!(text.starts_with("Income Statement\n"));
        for cell in ["metric", "period", "value", "Revenue", "2022-09-30", "394328"] {
            assert!(text.contains(cell), "{cell} missing from {text}");
        }
    }

    #[test]
    fn test_render_entry() {
        let entry = CompanyDirectoryEntry::new(320193, "AAPL", "Apple Inc.");
        assert_eq!(render_entry(&entry), "AAPL     0000320193  Apple Inc.");
    }
}
