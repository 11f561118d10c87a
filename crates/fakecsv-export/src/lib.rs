//! Export of synthesized tables.
//!
//! Every serializer takes the table by shared reference and returns an
//! owned payload; none of them mutate their input.
//!
//! | Format | Function | Nulls |
//! |--------|----------|-------|
//! | CSV    | [`to_csv`] | empty field |
//! | xlsx   | [`to_xlsx`] | empty cell |
//! | JSON   | [`to_json`] | `null` |
//! | SQL    | [`sql_preview`] | `NULL` |
//!
//! # Example
//!
//! ```rust
//! use fakecsv_core::{Table, Value};
//! use fakecsv_export::{sql_preview, to_csv};
//!
//! let table = Table::from_columns(
//!     vec!["Name".to_string(), "Score".to_string()],
//!     vec![vec![Value::text("O'Hara")], vec![Value::Null]],
//! )
//! .unwrap();
//!
//! assert_eq!(to_csv(&table).unwrap(), "Name,Score\nO'Hara,\n");
//! assert_eq!(
//!     sql_preview(&table, "people", 10).unwrap(),
//!     "INSERT INTO people (Name, Score) VALUES ('O''Hara', NULL);"
//! );
//! ```

pub mod csv_export;
pub mod error;
pub mod files;
pub mod json_export;
pub mod sql_preview;
pub mod xlsx_export;

pub use csv_export::{from_csv, to_csv};
pub use error::ExportError;
pub use files::{write_exports, ExportFormat, WrittenFile, FILE_STEM};
pub use json_export::to_json;
pub use sql_preview::{sql_literal, sql_preview, DEFAULT_PREVIEW_ROWS};
pub use xlsx_export::{to_xlsx, SHEET_NAME};
