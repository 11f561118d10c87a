//! JSON export: an array of records keyed by column name.

use crate::error::ExportError;
use fakecsv_core::{Table, Value};
use serde_json::{json, Map};

/// Convert one cell to JSON. Returns `None` for non-finite floats, which JSON
/// cannot represent.
pub fn cell_to_json(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::Null => Some(serde_json::Value::Null),
        Value::Int(i) => Some(json!(*i)),
        Value::Float(f) => serde_json::Number::from_f64(*f).map(serde_json::Value::Number),
        Value::Text(s) => Some(json!(s)),
    }
}

/// Build the record list, keys in column order.
pub fn to_records(table: &Table) -> Result<Vec<Map<String, serde_json::Value>>, ExportError> {
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let mut record = Map::with_capacity(table.column_count());
            for (name, value) in table.columns().iter().zip(row) {
                let json = cell_to_json(value).ok_or_else(|| ExportError::NonFiniteValue {
                    column: name.clone(),
                    row: row_idx,
                })?;
                record.insert(name.clone(), json);
            }
            Ok(record)
        })
        .collect()
}

/// Serialize a table as a pretty-printed JSON array of records.
pub fn to_json(table: &Table) -> Result<String, ExportError> {
    let records = to_records(table)?;
    Ok(serde_json::to_string_pretty(&records)?)
}
