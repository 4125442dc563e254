//! Configuration options for column type inference.

use serde::{Deserialize, Serialize};

/// Tokens treated as "no data" when every value in a column matches one.
///
/// The empty string is included so that blank columns classify as `Empty`.
pub const DEFAULT_NULL_SENTINELS: &[&str] = &[
    "", "NaN", "nan", "NA", "N/A", "null", "NULL", "None",
];

/// Options controlling how raw text is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Values (compared after trimming) that count as missing.
    pub null_sentinels: Vec<String>,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            null_sentinels: DEFAULT_NULL_SENTINELS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl InferenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sentinel list.
    #[must_use]
    pub fn with_null_sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_sentinels = sentinels.into_iter().map(Into::into).collect();
        self
    }

    /// Add one sentinel to the existing list.
    #[must_use]
    pub fn with_null_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        let sentinel = sentinel.into();
        if !self.null_sentinels.contains(&sentinel) {
            self.null_sentinels.push(sentinel);
        }
        self
    }

    /// Returns true if `value` (trimmed) is a null sentinel.
    pub fn is_null_sentinel(&self, value: &str) -> bool {
        let trimmed = value.trim();
        self.null_sentinels.iter().any(|token| token == trimmed)
    }
}
