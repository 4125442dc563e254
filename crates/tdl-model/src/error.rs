//! Error types for column and table construction.

use thiserror::Error;

use crate::column::ColumnType;

/// Errors raised while building columns and tables.
///
/// Every variant is terminal: construction never yields a partial value.
#[derive(Debug, Error)]
pub enum ModelError {
    // === Column Errors ===
    /// A column was given no values.
    #[error("column '{column}' has no values")]
    EmptyColumn { column: String },

    /// A value passed classification but could not be parsed into its kind.
    #[error("column '{column}': cannot coerce '{value}' to {target}")]
    TypeCoercionFailure {
        column: String,
        value: String,
        target: ColumnType,
    },

    // === Table Errors ===
    /// Two columns share a name.
    #[error("duplicate column name '{name}'")]
    DuplicateColumnName { name: String },

    /// Columns disagree on row count.
    #[error("column '{column}' has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    // === Canonical Line Errors ===
    /// No header line was supplied.
    #[error("document has no header line")]
    EmptyDocument,

    /// A data row does not have one cell per header column.
    #[error("line {line} has {found} cells, header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    // === DataFrame Errors ===
    /// Reading from a foreign DataFrame failed.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ModelError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
