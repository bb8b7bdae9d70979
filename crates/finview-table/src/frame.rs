//! Polars conversion of display tables.

use finview_core::{Result, ViewError};
use polars::prelude::*;

use crate::normalize::DisplayTable;

impl DisplayTable {
    /// Converts the table into a long-format DataFrame.
    ///
    /// Returns a DataFrame with columns: metric, period, value. Each row value is
    /// paired with the period at the same position; values past the last period
    /// are dropped. Empty cells become nulls.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut metrics: Vec<&str> = Vec::new();
        let mut periods: Vec<&str> = Vec::new();
        let mut values: Vec<Option<&str>> = Vec::new();

        for row in &self.rows {
            for (period, value) in self.periods.iter().zip(row.values()) {
                metrics.push(row.key());
                periods.push(period);
                values.push((!value.is_empty()).then_some(value.as_str()));
            }
        }

        DataFrame::new(vec![
            Column::new(PlSmallStr::from("metric"), metrics),
            Column::new(PlSmallStr::from("period"), periods),
            Column::new(PlSmallStr::from("value"), values),
        ])
        .map_err(|e| ViewError::Other(e.to_string()))
    }
}
