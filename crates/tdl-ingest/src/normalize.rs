//! Delimiter normalization cascade.
//!
//! Candidates are tried in a fixed order and the first success wins:
//! 1. Commas consistent on the raw lines -> lines returned unchanged
//! 2. Escape swap: backslashes doubled, `;` -> `\;`, `,` -> `;`
//! 3. Tabs consistent on the swapped lines -> tabs become commas
//! 4. Triple spaces consistent on the swapped lines -> runs become commas
//!
//! The order decides ambiguous documents (tab wins over triple space), so it
//! must not change.

use tracing::{debug, warn};

use crate::delimiter::{Delimiter, is_consistent};
use crate::error::{IngestError, Result};
use tdl_model::CANONICAL_DELIMITER;

/// Canonical lines plus the delimiter that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub delimiter: Delimiter,
    pub lines: Vec<String>,
}

impl NormalizedDocument {
    /// Canonical lines joined with `\n`.
    pub fn to_csv_string(&self) -> String {
        self.lines.join("\n")
    }
}

/// Normalize lines into canonical comma-delimited form.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    normalize_document(lines).map(|document| document.lines)
}

/// Normalize lines, reporting which delimiter matched.
///
/// # Errors
///
/// `NoConsistentDelimiter` when no candidate is consistent.
pub fn normalize_document<S: AsRef<str>>(lines: &[S]) -> Result<NormalizedDocument> {
    if is_consistent(lines, Delimiter::Comma.as_str()) {
        debug!(lines = lines.len(), "commas consistent, lines already canonical");
        return Ok(NormalizedDocument {
            delimiter: Delimiter::Comma,
            lines: lines.iter().map(|line| line.as_ref().to_string()).collect(),
        });
    }

    let swapped: Vec<String> = lines
        .iter()
        .map(|line| swap_commas_and_semicolons(line.as_ref()))
        .collect();

    for delimiter in [Delimiter::Tab, Delimiter::TripleSpace] {
        if is_consistent(&swapped, delimiter.as_str()) {
            debug!(lines = lines.len(), %delimiter, "delimiter consistent after escape swap");
            return Ok(NormalizedDocument {
                delimiter,
                lines: replace_delimiter(swapped, delimiter),
            });
        }
    }

    warn!(lines = lines.len(), "no consistent delimiter found");
    Err(IngestError::NoConsistentDelimiter { lines: lines.len() })
}

/// Escape a line so commas and semicolons can no longer be confused.
///
/// Backslashes are doubled, semicolons become `\;` and commas become `;`.
/// This is the same output as doubling backslashes, parking semicolons on a
/// sentinel, turning commas into semicolons and then expanding the sentinel to
/// `\;`, without any sentinel text that could collide with the input.
pub fn swap_commas_and_semicolons(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / 8);
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push(';'),
            other => out.push(other),
        }
    }
    out
}

fn replace_delimiter(lines: Vec<String>, delimiter: Delimiter) -> Vec<String> {
    let canonical = CANONICAL_DELIMITER.to_string();
    lines
        .into_iter()
        .map(|line| line.replace(delimiter.as_str(), &canonical))
        .collect()
}
