use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::column::{Column, ColumnBuilder};
use crate::error::{ModelError, Result};
use crate::options::InferenceOptions;

/// Delimiter of canonical lines.
pub const CANONICAL_DELIMITER: char = ',';

/// An immutable set of named, equally long columns.
///
/// Derived lookups are built once in [`Table::new`].
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip)]
    numeric_columns: Vec<String>,
}

impl Table {
    /// Assemble a table from built columns.
    ///
    /// Name uniqueness is checked before row counts, so duplicate names are
    /// reported regardless of column contents.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if index.insert(column.name().to_string(), position).is_some() {
                return Err(ModelError::DuplicateColumnName {
                    name: column.name().to_string(),
                });
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(column) = columns.iter().find(|column| column.len() != expected) {
                return Err(ModelError::ColumnLengthMismatch {
                    column: column.name().to_string(),
                    expected,
                    found: column.len(),
                });
            }
        }

        let numeric_columns = columns
            .iter()
            .filter(|column| column.value_type().is_numeric())
            .map(|column| column.name().to_string())
            .collect();

        Ok(Self {
            columns,
            index,
            numeric_columns,
        })
    }

    /// Build a table from canonical comma-delimited lines.
    ///
    /// The first line holds the column names (trimmed); every later line is
    /// one data row with exactly one cell per name. Duplicate names are
    /// rejected before any cell is inspected.
    pub fn from_canonical_lines<S: AsRef<str>>(
        lines: &[S],
        options: &InferenceOptions,
    ) -> Result<Self> {
        let span = debug_span!("table_from_lines", lines = lines.len());
        let _guard = span.enter();

        let (header, rows) = lines.split_first().ok_or(ModelError::EmptyDocument)?;
        let names: Vec<String> = split_canonical_line(header.as_ref())
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(name) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ModelError::DuplicateColumnName { name: name.clone() });
        }

        let mut cells: Vec<Vec<&str>> = vec![Vec::with_capacity(rows.len()); names.len()];
        for (offset, line) in rows.iter().enumerate() {
            let row = split_canonical_line(line.as_ref());
            if row.len() != names.len() {
                return Err(ModelError::RaggedRow {
                    // 1-based, counting the header
                    line: offset + 2,
                    expected: names.len(),
                    found: row.len(),
                });
            }
            for (column, cell) in cells.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        let builder = ColumnBuilder::new(options.clone());
        let columns = names
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| builder.build(name, &raw))
            .collect::<Result<Vec<_>>>()?;
        debug!(columns = columns.len(), rows = rows.len(), "built table");
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&position| &self.columns[position])
    }

    /// Names of `Int` and `Float` columns, in column order.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_columns
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Build a table from already-built columns.
pub fn build_table(columns: Vec<Column>) -> Result<Table> {
    Table::new(columns)
}

/// Split one canonical line into cells. No quote handling.
pub fn split_canonical_line(line: &str) -> Vec<&str> {
    line.split(CANONICAL_DELIMITER).collect()
}
