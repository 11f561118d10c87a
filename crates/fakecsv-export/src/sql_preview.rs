//! SQL `INSERT` preview of the first rows of a table.

use crate::error::ExportError;
use fakecsv_core::{format_float, Table, Value};

/// Rows rendered when no limit is given.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Render a value as a SQL literal.
///
/// Text is single-quoted with embedded quotes doubled; nulls and non-finite
/// floats become `NULL`.
pub fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) if f.is_finite() => format_float(*f),
        Value::Float(_) => "NULL".to_string(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

/// One `INSERT` statement per row for the first `limit` rows, joined by
/// newlines. Column names are emitted as-is.
pub fn sql_preview(table: &Table, table_name: &str, limit: usize) -> Result<String, ExportError> {
    let table_name = table_name.trim();
    if table_name.is_empty() {
        return Err(ExportError::InvalidTableName(table_name.to_string()));
    }

    let columns = table.columns().join(", ");
    let statements: Vec<String> = table
        .rows()
        .iter()
        .take(limit)
        .map(|row| {
            let values: Vec<String> = row.iter().map(sql_literal).collect();
            format!(
                "INSERT INTO {table_name} ({columns}) VALUES ({});",
                values.join(", ")
            )
        })
        .collect();

    Ok(statements.join("\n"))
}
