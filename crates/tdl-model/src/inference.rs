//! Column type classification and coercion.
//!
//! Every value is checked, not just the first. Priority order:
//! 1. All values are digit-only literals -> `Int`
//! 2. All values are digits with at most one decimal point -> `Float`
//! 3. All values are null sentinels -> `Empty`
//! 4. Otherwise -> `String`
//!
//! Signs, exponents and thousands separators are not recognised, so `-1`,
//! `1e3` and `1,000` classify as text.

use crate::column::{ColumnType, ColumnValues};
use crate::error::{ModelError, Result};
use crate::options::InferenceOptions;

/// Classify raw values into a single column type.
///
/// An empty slice classifies as `Empty`.
pub fn classify<S: AsRef<str>>(raw_values: &[S], options: &InferenceOptions) -> ColumnType {
    if raw_values.is_empty() {
        return ColumnType::Empty;
    }
    if raw_values
        .iter()
        .all(|value| is_integer_literal(value.as_ref().trim()))
    {
        return ColumnType::Int;
    }
    if raw_values
        .iter()
        .all(|value| is_decimal_literal(value.as_ref().trim()))
    {
        return ColumnType::Float;
    }
    if raw_values
        .iter()
        .all(|value| options.is_null_sentinel(value.as_ref()))
    {
        return ColumnType::Empty;
    }
    ColumnType::String
}

/// Classify and convert raw values into typed storage.
pub fn coerce<S: AsRef<str>>(
    column: &str,
    raw_values: &[S],
    options: &InferenceOptions,
) -> Result<ColumnValues> {
    match classify(raw_values, options) {
        ColumnType::Int => raw_values
            .iter()
            .map(|value| parse_cell(column, value.as_ref(), ColumnType::Int))
            .collect::<Result<Vec<i64>>>()
            .map(ColumnValues::Int),
        ColumnType::Float => raw_values
            .iter()
            .map(|value| parse_cell(column, value.as_ref(), ColumnType::Float))
            .collect::<Result<Vec<f64>>>()
            .map(ColumnValues::Float),
        ColumnType::Empty => Ok(ColumnValues::Empty(raw_values.len())),
        ColumnType::String => Ok(ColumnValues::String(
            raw_values
                .iter()
                .map(|value| value.as_ref().to_string())
                .collect(),
        )),
    }
}

fn parse_cell<T: std::str::FromStr>(column: &str, value: &str, target: ColumnType) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ModelError::TypeCoercionFailure {
            column: column.to_string(),
            value: value.to_string(),
            target,
        })
}

/// Non-empty and ASCII digits only.
fn is_integer_literal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// ASCII digits with at most one `.`, and at least one digit.
fn is_decimal_literal(value: &str) -> bool {
    let mut dots = 0usize;
    let mut digits = 0usize;
    for b in value.bytes() {
        match b {
            b'.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    digits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(values: &[&str]) -> ColumnType {
        classify(values, &InferenceOptions::default())
    }

    #[test]
    fn test_classify_int() {
        assert_eq!(classify_default(&["1", "2", "3"]), ColumnType::Int);
        assert_eq!(classify_default(&[" 007 ", "10"]), ColumnType::Int);
    }

    #[test]
    fn test_classify_float() {
        assert_eq!(classify_default(&["1.5", "2.0"]), ColumnType::Float);
        assert_eq!(classify_default(&["1", "2.5"]), ColumnType::Float);
        assert_eq!(classify_default(&[".5", "5."]), ColumnType::Float);
    }

    #[test]
    fn test_classify_string() {
        assert_eq!(classify_default(&["a", "b"]), ColumnType::String);
        assert_eq!(classify_default(&["1", "x"]), ColumnType::String);
        assert_eq!(classify_default(&["1.2.3"]), ColumnType::String);
        assert_eq!(classify_default(&["."]), ColumnType::String);
    }

    #[test]
    fn test_classify_unsupported_numeric_forms_are_text() {
        assert_eq!(classify_default(&["-1", "2"]), ColumnType::String);
        assert_eq!(classify_default(&["1e3"]), ColumnType::String);
        assert_eq!(classify_default(&["1,000"]), ColumnType::String);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify_default(&["NaN", "NaN"]), ColumnType::Empty);
        assert_eq!(classify_default(&["", "  "]), ColumnType::Empty);
        assert_eq!(classify_default(&[]), ColumnType::Empty);
    }

    #[test]
    fn test_partially_blank_numeric_is_string() {
        assert_eq!(classify_default(&["1", "", "3"]), ColumnType::String);
    }

    #[test]
    fn test_coerce_trims_numeric_cells() {
        let values = coerce("n", &[" 1", "2 "], &InferenceOptions::default()).unwrap();
        assert_eq!(values, ColumnValues::Int(vec![1, 2]));
    }

    #[test]
    fn test_coerce_keeps_text_verbatim() {
        let values = coerce("s", &[" a ", "b"], &InferenceOptions::default()).unwrap();
        assert_eq!(
            values,
            ColumnValues::String(vec![" a ".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_coerce_integer_overflow_fails() {
        let err = coerce("n", &["1", "99999999999999999999"], &InferenceOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::TypeCoercionFailure {
                target: ColumnType::Int,
                ..
            }
        ));
    }
}
