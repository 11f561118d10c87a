//! Substring search across every cell of a table.

use fakecsv_core::{Table, Value};
use tracing::debug;

/// Indices of rows where any non-null cell's rendering contains `query`.
///
/// An empty query matches every row.
pub fn matching_rows(table: &Table, query: &str, case_insensitive: bool) -> Vec<usize> {
    if query.is_empty() {
        return (0..table.row_count()).collect();
    }

    let needle = if case_insensitive {
        query.to_lowercase()
    } else {
        query.to_string()
    };
    let matches = |value: &Value| match value.render() {
        None => false,
        Some(text) if case_insensitive => text.to_lowercase().contains(&needle),
        Some(text) => text.contains(&needle),
    };

    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|value| matches(value)))
        .map(|(index, _)| index)
        .collect()
}

/// Rows matching `query`, in original order, as a new table with the same
/// columns.
pub fn search(table: &Table, query: &str, case_insensitive: bool) -> Table {
    let rows = matching_rows(table, query, case_insensitive);
    debug!(
        "Search '{}' matched {} of {} rows",
        query,
        rows.len(),
        table.row_count()
    );
    table.select_rows(&rows)
}
