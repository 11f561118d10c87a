//! Unique-value listings and value frequencies.

use crate::distinct::Distinct;
use fakecsv_core::{SynthError, Table, Value};

/// Sample size of the per-column unique listing.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// Distinct count and first-seen sample for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueValues {
    pub column: String,
    pub distinct: usize,
    pub sample: Vec<String>,
}

/// One bar of a frequency chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCount {
    pub value: Value,
    pub count: usize,
}

/// At most `limit` distinct non-null values of `column`, as strings, in the
/// order they first appear.
pub fn unique_sample(table: &Table, column: &str, limit: usize) -> Result<Vec<String>, SynthError> {
    let index = table.require_column(column)?;
    Ok(sample_column(table, index, limit))
}

/// Distinct count plus the first [`DEFAULT_SAMPLE_LIMIT`] distinct values of
/// every column.
pub fn unique_values(table: &Table) -> Vec<UniqueValues> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| UniqueValues {
            column: name.clone(),
            distinct: Distinct::from_values(table.column_values(index)).len(),
            sample: sample_column(table, index, DEFAULT_SAMPLE_LIMIT),
        })
        .collect()
}

/// Frequency of each distinct non-null value of `column`.
///
/// Numeric columns are ordered by value. Other columns are ordered by
/// descending count, ties in first-seen order.
pub fn value_counts(table: &Table, column: &str) -> Result<Vec<ValueCount>, SynthError> {
    let index = table.require_column(column)?;
    let numeric = table.column_kind(index).is_numeric();

    let mut counts: Vec<ValueCount> = Distinct::from_values(table.column_values(index))
        .into_entries()
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.clone(),
            count,
        })
        .collect();

    if numeric {
        counts.sort_by(|a, b| {
            let a = a.value.as_f64().unwrap_or(f64::NAN);
            let b = b.value.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        });
    } else {
        // Stable sort keeps first-seen order among equal counts.
        counts.sort_by(|a, b| b.count.cmp(&a.count));
    }
    Ok(counts)
}

fn sample_column(table: &Table, index: usize, limit: usize) -> Vec<String> {
    Distinct::from_values(table.column_values(index))
        .entries()
        .iter()
        .take(limit)
        .map(|(value, _)| value.to_string())
        .collect()
}
