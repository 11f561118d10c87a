//! Writing export payloads to disk.

use crate::csv_export::to_csv;
use crate::error::ExportError;
use crate::json_export::to_json;
use crate::xlsx_export::to_xlsx;
use fakecsv_core::Table;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Base name of exported files.
pub const FILE_STEM: &str = "fake_data";

/// Downloadable export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    /// All formats, in the order they are offered.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Json];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    /// Default file name, e.g. `fake_data.csv`.
    pub fn file_name(self) -> String {
        format!("{FILE_STEM}.{}", self.extension())
    }

    /// Serialize a table in this format.
    pub fn render(self, table: &Table) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Csv => to_csv(table).map(String::into_bytes),
            ExportFormat::Xlsx => to_xlsx(table),
            ExportFormat::Json => to_json(table).map(String::into_bytes),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// A file produced by [`write_exports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Write the table to `dir` once per requested format.
///
/// Every payload is rendered before anything is written, so a serialization
/// failure leaves the directory untouched.
pub fn write_exports(
    table: &Table,
    dir: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<WrittenFile>, ExportError> {
    let payloads = formats
        .iter()
        .map(|&format| format.render(table).map(|bytes| (format, bytes)))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(payloads.len());
    for (format, bytes) in payloads {
        let path = dir.join(format.file_name());
        fs::write(&path, &bytes)?;
        info!("Wrote {} ({} bytes)", path.display(), bytes.len());
        written.push(WrittenFile {
            format,
            path,
            bytes: bytes.len() as u64,
        });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakecsv_core::Value;
    use tempfile::TempDir;

    fn sample() -> Table {
        Table::from_columns(
            vec!["Name".to_string(), "Score".to_string()],
            vec![
                vec![Value::text("Ada"), Value::text("Grace")],
                vec![Value::Int(1), Value::Null],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("parquet".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.file_name(), "fake_data.json");
    }

    #[test]
    fn test_write_all_formats() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let written = write_exports(&sample(), &out, &ExportFormat::ALL).unwrap();

        assert_eq!(written.len(), 3);
        for file in &written {
            assert!(file.path.exists());
            assert_eq!(fs::metadata(&file.path).unwrap().len(), file.bytes);
        }

        let csv = fs::read_to_string(out.join("fake_data.csv")).unwrap();
        assert_eq!(csv, "Name,Score\nAda,1\nGrace,\n");
    }

    #[test]
    fn test_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let table = Table::from_columns(
            vec!["n".to_string()],
            vec![vec![Value::Float(f64::INFINITY)]],
        )
        .unwrap();

        let result = write_exports(&table, &out, &[ExportFormat::Csv, ExportFormat::Json]);
        assert!(result.is_err());
        assert!(!out.exists());
    }
}
