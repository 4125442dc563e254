//! Value-to-id dictionaries over canonical lines.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tdl_model::{ModelError, split_canonical_line};

use crate::error::Result;

/// Ids for the distinct values of each column.
///
/// Ids start at 1 and run across columns in column order, so a value that
/// appears in two columns receives two ids. The dictionary is built by a
/// single call and shares no state with other dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueDictionary {
    // id = index + 1
    values: Vec<String>,
}

impl ValueDictionary {
    /// Assign ids to the data rows of canonical lines (header skipped).
    pub fn from_canonical_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let (header, rows) = lines.split_first().ok_or(ModelError::EmptyDocument)?;
        let width = split_canonical_line(header.as_ref()).len();

        let mut grid: Vec<Vec<&str>> = Vec::with_capacity(rows.len());
        for (offset, line) in rows.iter().enumerate() {
            let cells = split_canonical_line(line.as_ref());
            if cells.len() != width {
                return Err(ModelError::RaggedRow {
                    line: offset + 2,
                    expected: width,
                    found: cells.len(),
                }
                .into());
            }
            grid.push(cells);
        }

        let mut values = Vec::new();
        for column in 0..width {
            let mut seen: HashSet<&str> = HashSet::new();
            for row in &grid {
                let cell = row[column];
                if seen.insert(cell) {
                    values.push(cell.to_string());
                }
            }
        }
        tracing::debug!(ids = values.len(), columns = width, "assigned value ids");
        Ok(Self { values })
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(id, value)` pairs in id order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| (idx + 1, value.as_str()))
    }
}

impl Serialize for ValueDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (id, value) in self.entries() {
            map.serialize_entry(&id, value)?;
        }
        map.end()
    }
}
