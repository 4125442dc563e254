//! Building tables from Polars DataFrames.
//!
//! Only cells that are already text survive: every other cell (numbers,
//! booleans, nulls) is replaced by an empty string before inference. A
//! numeric DataFrame column therefore classifies as `Empty`, not `Int` or
//! `Float`. Canonical lines are the path to use when numeric inference
//! matters.

use polars::prelude::{Column as FrameColumn, DataFrame, DataType};
use tracing::debug;

use crate::column::ColumnBuilder;
use crate::error::Result;
use crate::options::InferenceOptions;
use crate::table::Table;

impl Table {
    /// Build a table from a DataFrame, keeping only text cells.
    pub fn from_dataframe(df: &DataFrame, options: &InferenceOptions) -> Result<Self> {
        let builder = ColumnBuilder::new(options.clone());
        let mut columns = Vec::with_capacity(df.width());
        for frame_column in df.get_columns() {
            let cells = text_cells(frame_column)?;
            columns.push(builder.build(frame_column.name().as_str(), &cells)?);
        }
        debug!(
            columns = columns.len(),
            rows = df.height(),
            "built table from DataFrame"
        );
        Self::new(columns)
    }
}

fn text_cells(column: &FrameColumn) -> Result<Vec<String>> {
    let series = column.as_materialized_series();
    if series.dtype() != &DataType::String {
        return Ok(vec![String::new(); series.len()]);
    }
    Ok(series
        .str()?
        .into_iter()
        .map(|cell| cell.unwrap_or_default().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;
    use crate::column::{ColumnType, ColumnValues};

    #[test]
    fn test_string_cells_are_inferred() {
        let df = df! {
            "id" => &["1", "2", "3"],
            "name" => &["Alice", "Bob", "Bob"],
        }
        .unwrap();

        let table = Table::from_dataframe(&df, &InferenceOptions::default()).unwrap();
        let id = table.column_by_name("id").unwrap();
        assert_eq!(id.value_type(), ColumnType::Int);
        assert_eq!(table.numeric_columns(), &["id".to_string()]);
        let name = table.column_by_name("name").unwrap();
        assert_eq!(name.mode().to_string(), "Bob");
    }

    #[test]
    fn test_non_text_cells_are_blanked() {
        let df = df! {
            "age" => &[25i64, 30, 35],
            "label" => &["a", "b", "c"],
        }
        .unwrap();

        let table = Table::from_dataframe(&df, &InferenceOptions::default()).unwrap();
        let age = table.column_by_name("age").unwrap();
        assert_eq!(age.value_type(), ColumnType::Empty);
        assert_eq!(age.values(), &ColumnValues::Empty(3));
        assert!(table.numeric_columns().is_empty());
    }

    #[test]
    fn test_multi_chunk_columns_keep_row_order() {
        let mut df = df! { "word" => &["a", "b"] }.unwrap();
        df.vstack_mut(&df! { "word" => &["c", "c"] }.unwrap()).unwrap();

        let table = Table::from_dataframe(&df, &InferenceOptions::default()).unwrap();
        let word = table.column_by_name("word").unwrap();
        assert_eq!(
            word.values(),
            &ColumnValues::String(vec!["a".into(), "b".into(), "c".into(), "c".into()])
        );
        assert_eq!(word.mode().to_string(), "c");
    }

    #[test]
    fn test_null_text_cells_are_blanked() {
        let df = df! {
            "col" => &[Some("x"), None, Some("y")],
        }
        .unwrap();

        let table = Table::from_dataframe(&df, &InferenceOptions::default()).unwrap();
        let col = table.column_by_name("col").unwrap();
        assert_eq!(
            col.values(),
            &ColumnValues::String(vec!["x".to_string(), String::new(), "y".to_string()])
        );
    }
}
