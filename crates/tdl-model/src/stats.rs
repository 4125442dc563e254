//! Per-column derived statistics.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::column::{CellValue, ColumnValues};

/// Statistics computed once when a column is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    pub mode: CellValue,
    /// Only for `Int` and `Float` columns.
    pub mean: Option<f64>,
    /// Only for `Int` and `Float` columns.
    pub median: Option<f64>,
}

pub fn compute(values: &ColumnValues) -> ColumnStatistics {
    ColumnStatistics {
        mode: mode(values),
        mean: mean(values),
        median: median(values),
    }
}

/// Most frequent value. On a tie, the value whose first occurrence comes
/// earliest wins.
pub fn mode(values: &ColumnValues) -> CellValue {
    let winner = match values {
        ColumnValues::Int(items) => mode_index(items.iter().copied()),
        ColumnValues::Float(items) => mode_index(items.iter().map(|v| float_key(*v))),
        ColumnValues::String(items) => mode_index(items.iter().map(String::as_str)),
        ColumnValues::Empty(_) => None,
    };
    winner
        .and_then(|idx| values.get(idx))
        .unwrap_or(CellValue::Null)
}

/// Arithmetic mean of a numeric column.
pub fn mean(values: &ColumnValues) -> Option<f64> {
    let numbers = numeric(values)?;
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Middle value of the sorted column; even lengths average the two middles.
pub fn median(values: &ColumnValues) -> Option<f64> {
    let mut numbers = numeric(values)?;
    if numbers.is_empty() {
        return None;
    }
    numbers.sort_by(f64::total_cmp);
    let mid = numbers.len() / 2;
    if numbers.len() % 2 == 0 {
        Some((numbers[mid - 1] + numbers[mid]) / 2.0)
    } else {
        Some(numbers[mid])
    }
}

fn numeric(values: &ColumnValues) -> Option<Vec<f64>> {
    match values {
        ColumnValues::Int(items) => Some(items.iter().map(|v| *v as f64).collect()),
        ColumnValues::Float(items) => Some(items.clone()),
        ColumnValues::String(_) | ColumnValues::Empty(_) => None,
    }
}

// 0.0 and -0.0 compare equal, so they share a key.
fn float_key(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Index of the first occurrence of the most frequent key.
fn mode_index<K, I>(keys: I) -> Option<usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    // (first index, count), in first-occurrence order
    let mut tallies: Vec<(usize, usize)> = Vec::new();
    for (idx, key) in keys.into_iter().enumerate() {
        let slot = *slots.entry(key).or_insert_with(|| {
            tallies.push((idx, 0));
            tallies.len() - 1
        });
        tallies[slot].1 += 1;
    }

    let mut best: Option<(usize, usize)> = None;
    for &(first, count) in &tallies {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((first, count));
        }
    }
    best.map(|(first, _)| first)
}
