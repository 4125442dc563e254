//! Typed tabular data model.
//!
//! Raw cell text is classified into a single [`ColumnType`] per column,
//! coerced into homogeneous storage, and summarised with mode, mean and
//! median. Columns are assembled into an immutable [`Table`].
//!
//! # Example
//!
//! ```
//! use tdl_model::{ColumnType, InferenceOptions, Table};
//!
//! let lines = ["id,name", "1,ada", "2,grace"];
//! let table = Table::from_canonical_lines(&lines, &InferenceOptions::default()).unwrap();
//!
//! assert_eq!(table.numeric_columns(), &["id".to_string()]);
//! assert_eq!(table.column_by_name("name").unwrap().value_type(), ColumnType::String);
//! ```

mod column;
mod error;
mod frame;
mod inference;
mod options;
mod stats;
mod table;

// === Error Types ===
pub use error::{ModelError, Result};

// === Columns ===
pub use column::{CellValue, Column, ColumnBuilder, ColumnType, ColumnValues, build_column};
pub use inference::{classify, coerce};
pub use options::{DEFAULT_NULL_SENTINELS, InferenceOptions};

// === Statistics ===
pub use stats::ColumnStatistics;

// === Tables ===
pub use table::{CANONICAL_DELIMITER, Table, build_table, split_canonical_line};

/// Statistic functions over column storage.
pub mod statistics {
    pub use crate::stats::{compute, mean, median, mode};
}
