//! Delimiter consistency detection.

use std::fmt;

/// Delimiters accepted by the normalization cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    Tab,
    /// Three consecutive spaces.
    TripleSpace,
}

impl Delimiter {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Tab => "\t",
            Self::TripleSpace => "   ",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Tab => "tab",
            Self::TripleSpace => "triple space",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-overlapping occurrences of `delimiter` in each line.
pub fn delimiter_counts<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Vec<usize> {
    lines
        .iter()
        .map(|line| count_occurrences(line.as_ref(), delimiter))
        .collect()
}

/// Returns true iff every line contains `delimiter` the same number of
/// times and that number is greater than zero.
///
/// An empty line set or an empty delimiter is never consistent.
pub fn is_consistent<S: AsRef<str>>(lines: &[S], delimiter: &str) -> bool {
    if delimiter.is_empty() {
        return false;
    }
    let mut counts = lines
        .iter()
        .map(|line| count_occurrences(line.as_ref(), delimiter));
    match counts.next() {
        Some(first) if first > 0 => counts.all(|count| count == first),
        _ => false,
    }
}

fn count_occurrences(line: &str, delimiter: &str) -> usize {
    line.matches(delimiter).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_commas() {
        assert!(is_consistent(&["a,b,c", "1,2,3"], ","));
    }

    #[test]
    fn test_mixed_counts_are_inconsistent() {
        assert!(!is_consistent(&["a,b,c", "1,2"], ","));
    }

    #[test]
    fn test_zero_count_is_inconsistent() {
        assert!(!is_consistent(&["abc", "def"], ","));
    }

    #[test]
    fn test_empty_input_is_inconsistent() {
        let lines: [&str; 0] = [];
        assert!(!is_consistent(&lines, ","));
        assert!(!is_consistent(&["a,b"], ""));
    }

    #[test]
    fn test_single_line_needs_positive_count() {
        assert!(is_consistent(&["a\tb"], "\t"));
        assert!(!is_consistent(&["ab"], "\t"));
    }

    #[test]
    fn test_triple_space_counts_do_not_overlap() {
        // Six spaces hold two runs; five spaces hold one.
        assert_eq!(delimiter_counts(&["a      b", "a     b"], "   "), vec![2, 1]);
        assert!(!is_consistent(&["a      b", "a     b"], "   "));
    }

    #[test]
    fn test_delimiter_strings() {
        assert_eq!(Delimiter::Comma.as_str(), ",");
        assert_eq!(Delimiter::Tab.as_str(), "\t");
        assert_eq!(Delimiter::TripleSpace.as_str(), "   ");
        assert_eq!(Delimiter::TripleSpace.to_string(), "triple space");
    }
}
