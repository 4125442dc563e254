//! Display-ready summaries of a profiled table.

use serde::Serialize;
use tdl_model::{CellValue, Column, Table};

/// Placeholder for statistics a column type does not define.
pub const NOT_APPLICABLE: &str = "-";

/// One summary row per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub value_type: String,
    pub rows: usize,
    pub mode: String,
    pub mean: String,
    pub median: String,
}

impl ColumnSummary {
    pub fn from_column(column: &Column) -> Self {
        Self {
            name: column.name().to_string(),
            value_type: column.value_type().to_string(),
            rows: column.len(),
            mode: format_cell(column.mode()),
            mean: format_statistic(column.mean()),
            median: format_statistic(column.median()),
        }
    }
}

/// Summaries for every column, in table order.
pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
    table.columns().iter().map(ColumnSummary::from_column).collect()
}

pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Null => NOT_APPLICABLE.to_string(),
        CellValue::Float(v) => format_numeric(*v),
        other => other.to_string(),
    }
}

pub fn format_statistic(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), format_numeric)
}

/// Formats a float without trailing zeros after the decimal point.
///
/// ```
/// use tdl_cli::report::format_numeric;
///
/// assert_eq!(format_numeric(40.0), "40");
/// assert_eq!(format_numeric(2.50), "2.5");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.25), "1.25");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CellValue::Null), "-");
        assert_eq!(format_cell(&CellValue::Float(3.0)), "3");
        assert_eq!(format_cell(&CellValue::Int(7)), "7");
        assert_eq!(format_cell(&CellValue::String("x".into())), "x");
    }

    #[test]
    fn test_format_statistic_missing() {
        assert_eq!(format_statistic(None), "-");
        assert_eq!(format_statistic(Some(2.5)), "2.5");
    }
}
