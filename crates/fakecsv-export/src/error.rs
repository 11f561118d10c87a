//! Error types for table export.

use thiserror::Error;

/// Errors that can occur while serializing or writing a table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Table could not be built from parsed input.
    #[error(transparent)]
    Table(#[from] fakecsv_core::SynthError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Spreadsheet writer error.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Serialized text was not valid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A float cannot be represented in the target format.
    #[error("Non-finite value in column '{column}' at row {row}")]
    NonFiniteValue { column: String, row: usize },

    /// SQL preview table name is empty.
    #[error("Invalid table name: '{0}'")]
    InvalidTableName(String),

    /// Table does not fit in a single worksheet.
    #[error("Table of {rows} rows x {columns} columns exceeds worksheet limits")]
    SheetLimit { rows: usize, columns: usize },

    /// Export format name is not known.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
