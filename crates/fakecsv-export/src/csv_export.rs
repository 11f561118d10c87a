//! CSV export and re-import.

use crate::error::ExportError;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use fakecsv_core::{format_float, Table, Value};

/// Serialize a table as CSV: header row, no index column, nulls as empty
/// fields.
pub fn to_csv(table: &Table) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|value| value.render().unwrap_or_default()))?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse CSV text (with a header row) back into a table.
///
/// Empty fields become null. A field becomes a number only when the number
/// renders back to exactly the same text, so values such as `01234` stay
/// text.
pub fn from_csv(text: &str) -> Result<Table, ExportError> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        let row: Vec<Value> = record.iter().map(parse_field).collect();
        table.push_row(row)?;
    }
    Ok(table)
}

/// Infer a value from a CSV field.
pub fn parse_field(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = field.parse::<i64>() {
        if i.to_string() == field {
            return Value::Int(i);
        }
    }
    if let Ok(f) = field.parse::<f64>() {
        if f.is_finite() && format_float(f) == field {
            return Value::Float(f);
        }
    }
    Value::text(field)
}
