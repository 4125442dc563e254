//! Typed columns and the builder that infers their type.

use std::fmt;

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::inference::coerce;
use crate::options::InferenceOptions;
use crate::stats::{self, ColumnStatistics};

/// Inferred type of an entire column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    String,
    /// Every value is a null sentinel.
    Empty,
}

impl ColumnType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Empty => "empty",
        }
    }

    /// Returns true for `Int` and `Float`.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell, as returned by lookups and the mode statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    String(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Null => Ok(()),
        }
    }
}

/// Homogeneous backing storage for a column.
///
/// The variant is chosen once during inference; it is never re-derived from
/// individual values.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
    String(Vec<String>),
    /// Number of null cells.
    Empty(usize),
}

impl ColumnValues {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Int(_) => ColumnType::Int,
            Self::Float(_) => ColumnType::Float,
            Self::String(_) => ColumnType::String,
            Self::Empty(_) => ColumnType::Empty,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Int(values) => values.len(),
            Self::Float(values) => values.len(),
            Self::String(values) => values.len(),
            Self::Empty(len) => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cell at `row`, or `None` when out of range.
    pub fn get(&self, row: usize) -> Option<CellValue> {
        match self {
            Self::Int(values) => values.get(row).copied().map(CellValue::Int),
            Self::Float(values) => values.get(row).copied().map(CellValue::Float),
            Self::String(values) => values.get(row).cloned().map(CellValue::String),
            Self::Empty(len) => (row < *len).then_some(CellValue::Null),
        }
    }
}

impl Serialize for ColumnValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        match self {
            Self::Int(values) => {
                for value in values {
                    seq.serialize_element(value)?;
                }
            }
            Self::Float(values) => {
                for value in values {
                    seq.serialize_element(value)?;
                }
            }
            Self::String(values) => {
                for value in values {
                    seq.serialize_element(value)?;
                }
            }
            Self::Empty(len) => {
                for _ in 0..*len {
                    seq.serialize_element(&())?;
                }
            }
        }
        seq.end()
    }
}

/// A named, typed, non-empty column with its statistics.
///
/// Immutable once built; statistics are computed during construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
    statistics: ColumnStatistics,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub fn value_type(&self) -> ColumnType {
        self.values.column_type()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a column cannot be built without values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<CellValue> {
        self.values.get(row)
    }

    pub fn statistics(&self) -> &ColumnStatistics {
        &self.statistics
    }

    pub fn mode(&self) -> &CellValue {
        &self.statistics.mode
    }

    pub fn mean(&self) -> Option<f64> {
        self.statistics.mean
    }

    pub fn median(&self) -> Option<f64> {
        self.statistics.median
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Column", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("values", &self.values)?;
        state.serialize_field("value_type", &self.value_type())?;
        state.serialize_field("mode", &self.statistics.mode)?;
        state.serialize_field("mean", &self.statistics.mean)?;
        state.serialize_field("median", &self.statistics.median)?;
        state.end()
    }
}

/// Classifies and coerces raw text into a [`Column`].
#[derive(Debug, Clone, Default)]
pub struct ColumnBuilder {
    options: InferenceOptions,
}

impl ColumnBuilder {
    pub fn new(options: InferenceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Build a column from raw cell text.
    ///
    /// # Errors
    ///
    /// `EmptyColumn` when `raw_values` is empty, `TypeCoercionFailure` when a
    /// value that looked numeric does not parse (e.g. integer overflow).
    pub fn build<S: AsRef<str>>(
        &self,
        name: impl Into<String>,
        raw_values: &[S],
    ) -> Result<Column> {
        let name = name.into();
        if raw_values.is_empty() {
            return Err(ModelError::EmptyColumn { column: name });
        }
        let values = coerce(&name, raw_values, &self.options)?;
        let statistics = stats::compute(&values);
        debug!(
            column = %name,
            value_type = %values.column_type(),
            rows = values.len(),
            "inferred column type"
        );
        Ok(Column {
            name,
            values,
            statistics,
        })
    }
}

/// Build a column with default inference options.
pub fn build_column<S: AsRef<str>>(name: impl Into<String>, raw_values: &[S]) -> Result<Column> {
    ColumnBuilder::default().build(name, raw_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_int_column_with_statistics() {
        let column = build_column("n", &["3", "1", "2"]).unwrap();
        assert_eq!(column.value_type(), ColumnType::Int);
        assert_eq!(column.values(), &ColumnValues::Int(vec![3, 1, 2]));
        assert_eq!(column.mean(), Some(2.0));
        assert_eq!(column.median(), Some(2.0));
        assert_eq!(column.mode(), &CellValue::Int(3));
    }

    #[test]
    fn rejects_empty_input() {
        let raw: [&str; 0] = [];
        let err = build_column("n", &raw).unwrap_err();
        assert!(matches!(err, ModelError::EmptyColumn { column } if column == "n"));
    }

    #[test]
    fn string_column_has_no_numeric_statistics() {
        let column = build_column("s", &["a", "b", "b"]).unwrap();
        assert_eq!(column.value_type(), ColumnType::String);
        assert_eq!(column.mean(), None);
        assert_eq!(column.median(), None);
        assert_eq!(column.mode(), &CellValue::String("b".to_string()));
    }

    #[test]
    fn empty_column_reports_null_cells() {
        let column = build_column("e", &["NaN", "", "nan"]).unwrap();
        assert_eq!(column.value_type(), ColumnType::Empty);
        assert_eq!(column.len(), 3);
        assert_eq!(column.get(2), Some(CellValue::Null));
        assert_eq!(column.get(3), None);
        assert_eq!(column.mode(), &CellValue::Null);
    }

    #[test]
    fn builder_honours_custom_sentinels() {
        let builder = ColumnBuilder::new(InferenceOptions::new().with_null_sentinels(["?"]));
        let column = builder.build("q", &["?", "?"]).unwrap();
        assert_eq!(column.value_type(), ColumnType::Empty);

        let column = builder.build("q", &["NaN", "NaN"]).unwrap();
        assert_eq!(column.value_type(), ColumnType::String);
    }

    #[test]
    fn cell_value_display() {
        assert_eq!(CellValue::Int(4).to_string(), "4");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::String("x".into()).to_string(), "x");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
