//! Spreadsheet (xlsx) export.

use crate::error::ExportError;
use fakecsv_core::{Table, Value};
use rust_xlsxwriter::{Format, Workbook};

/// Worksheet name used for the single exported sheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Rows per worksheet, header included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Columns per worksheet.
pub const MAX_SHEET_COLUMNS: usize = 16_384;

/// Largest integer magnitude a spreadsheet number holds exactly.
const MAX_EXACT_INT: u64 = 1 << 53;

/// Serialize a table as an xlsx workbook with one sheet.
///
/// The first row holds the column names. Integers and floats are written as
/// numbers, text as strings, nulls as empty cells.
pub fn to_xlsx(table: &Table) -> Result<Vec<u8>, ExportError> {
    if table.row_count() + 1 > MAX_SHEET_ROWS || table.column_count() > MAX_SHEET_COLUMNS {
        return Err(ExportError::SheetLimit {
            rows: table.row_count(),
            columns: table.column_count(),
        });
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header)?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let sheet_row = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let sheet_col = col as u16;
            match value {
                Value::Null => {}
                Value::Int(i) if i.unsigned_abs() > MAX_EXACT_INT => {
                    worksheet.write_string(sheet_row, sheet_col, i.to_string())?;
                }
                Value::Int(i) => {
                    worksheet.write_number(sheet_row, sheet_col, *i as f64)?;
                }
                Value::Float(f) if !f.is_finite() => {
                    return Err(ExportError::NonFiniteValue {
                        column: table.columns()[col].clone(),
                        row: row_idx,
                    });
                }
                Value::Float(f) => {
                    worksheet.write_number(sheet_row, sheet_col, *f)?;
                }
                Value::Text(s) => {
                    worksheet.write_string(sheet_row, sheet_col, s)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, DataType, Reader, Xlsx};
    use std::io::Cursor;

    fn sample() -> Table {
        Table::from_columns(
            vec!["Name".to_string(), "Score".to_string()],
            vec![
                vec![Value::text("Ada"), Value::Null],
                vec![Value::Int(7), Value::Float(2.5)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_xlsx_is_zip() {
        let bytes = to_xlsx(&sample()).unwrap();
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[..2], b"PK");
    }

    fn read_back(bytes: Vec<u8>) -> (Vec<String>, calamine::Range<Data>) {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let names = workbook.sheet_names();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        (names, range)
    }

    fn cell(range: &calamine::Range<Data>, row: u32, col: u32) -> Data {
        range.get_value((row, col)).cloned().unwrap_or(Data::Empty)
    }

    #[test]
    fn test_cells_read_back() {
        let table = Table::from_columns(
            vec!["Name".to_string(), "Score".to_string(), "Ratio".to_string()],
            vec![
                vec![Value::text("Ada"), Value::Null],
                vec![Value::Int(7), Value::Int(-3)],
                vec![Value::Float(2.5), Value::Null],
            ],
        )
        .unwrap();
        let (names, range) = read_back(to_xlsx(&table).unwrap());

        assert_eq!(names, vec![SHEET_NAME.to_string()]);
        assert_eq!(range.get_size(), (3, 3));

        // Header row, no index column.
        assert_eq!(cell(&range, 0, 0), Data::String("Name".to_string()));
        assert_eq!(cell(&range, 0, 1), Data::String("Score".to_string()));
        assert_eq!(cell(&range, 0, 2), Data::String("Ratio".to_string()));

        assert_eq!(cell(&range, 1, 0), Data::String("Ada".to_string()));
        assert_eq!(cell(&range, 1, 1).as_f64(), Some(7.0));
        assert_eq!(cell(&range, 1, 2).as_f64(), Some(2.5));
        assert_eq!(cell(&range, 2, 0), Data::Empty);
        assert_eq!(cell(&range, 2, 1).as_f64(), Some(-3.0));
        assert_eq!(cell(&range, 2, 2), Data::Empty);
    }

    #[test]
    fn test_large_int_kept_as_text() {
        let table = Table::from_columns(
            vec!["Card".to_string()],
            vec![vec![Value::Int(4_111_111_111_111_111_111)]],
        )
        .unwrap();
        let (_, range) = read_back(to_xlsx(&table).unwrap());
        assert_eq!(
            cell(&range, 1, 0),
            Data::String("4111111111111111111".to_string())
        );
    }

    #[test]
    fn test_empty_rows_still_writes_header() {
        let table = Table::new(vec!["Only".to_string()]);
        let bytes = to_xlsx(&table).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_non_finite_rejected() {
        let table = Table::from_columns(
            vec!["n".to_string()],
            vec![vec![Value::Float(f64::NAN)]],
        )
        .unwrap();
        assert!(matches!(
            to_xlsx(&table),
            Err(ExportError::NonFiniteValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_column_limit() {
        let names = (0..=MAX_SHEET_COLUMNS).map(|c| format!("c{c}")).collect();
        let table = Table::new(names);
        assert!(matches!(to_xlsx(&table), Err(ExportError::SheetLimit { .. })));
    }
}
