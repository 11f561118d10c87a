//! In-memory table produced by synthesis and consumed by export and summary.

use crate::error::SynthError;
use crate::values::Value;

/// Column kind inferred from the values a column actually holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-null value is an integer
    Integer,
    /// Every non-null value is numeric and at least one is a float
    Float,
    /// At least one non-null value is text
    Text,
    /// The column holds no non-null value
    Empty,
}

impl ColumnKind {
    /// Whether descriptive statistics treat the column as numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

/// Ordered column names plus a rectangular row matrix.
///
/// Every row holds exactly one value per column. The column set is fixed at
/// construction; rows can only be added through [`Table::push_row`] or
/// [`Table::append_copies`], both of which keep the matrix rectangular.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from column-major data.
    ///
    /// `values[i]` holds every value of `columns[i]`; all columns must have the
    /// same length.
    pub fn from_columns(columns: Vec<String>, values: Vec<Vec<Value>>) -> Result<Self, SynthError> {
        if columns.len() != values.len() {
            return Err(SynthError::ShapeMismatch {
                expected: columns.len(),
                actual: values.len(),
            });
        }

        let row_count = values.first().map_or(0, Vec::len);
        if let Some(bad) = values.iter().find(|column| column.len() != row_count) {
            return Err(SynthError::ShapeMismatch {
                expected: row_count,
                actual: bad.len(),
            });
        }

        let mut iters: Vec<_> = values.into_iter().map(Vec::into_iter).collect();
        let rows = (0..row_count)
            .map(|_| iters.iter_mut().filter_map(Iterator::next).collect())
            .collect();

        Ok(Self { columns, rows })
    }

    /// Append a row, rejecting rows whose width does not match the header.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), SynthError> {
        if row.len() != self.columns.len() {
            return Err(SynthError::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append copies of existing rows, in the order given.
    ///
    /// Indices refer to the table as it was before this call, so rows appended
    /// here are never themselves copied. Out-of-range indices are skipped.
    /// Returns the number of rows appended.
    pub fn append_copies(&mut self, indices: &[usize]) -> usize {
        let copies: Vec<Vec<Value>> = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        let appended = copies.len();
        self.rows.extend(copies);
        appended
    }

    /// Overwrite a cell with null. Returns false when the cell does not exist.
    pub fn set_null(&mut self, row: usize, column: usize) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = Value::Null;
                true
            }
            None => false,
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column by name, or [`SynthError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<usize, SynthError> {
        self.column_index(name)
            .ok_or_else(|| SynthError::ColumnNotFound(name.to_string()))
    }

    /// Iterate over every value of one column.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column))
    }

    /// Get a single cell.
    pub fn get(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Number of null cells in a column.
    pub fn null_count(&self, column: usize) -> usize {
        self.column_values(column).filter(|v| v.is_null()).count()
    }

    /// Infer the kind of a column from its non-null values.
    pub fn column_kind(&self, column: usize) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for value in self.column_values(column) {
            kind = match (kind, value) {
                (_, Value::Null) => kind,
                (_, Value::Text(_)) => return ColumnKind::Text,
                (ColumnKind::Empty | ColumnKind::Integer, Value::Int(_)) => ColumnKind::Integer,
                (_, Value::Int(_) | Value::Float(_)) => ColumnKind::Float,
            };
        }
        kind
    }

    /// Build a new table holding only the given rows, in the order given.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// Build a new table holding the first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(
            vec!["name".to_string(), "score".to_string()],
            vec![
                vec![Value::text("a"), Value::text("b"), Value::text("c")],
                vec![Value::Int(1), Value::Null, Value::Float(2.5)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_columns_transposes() {
        let table = sample();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows()[0], vec![Value::text("a"), Value::Int(1)]);
        assert_eq!(table.rows()[2], vec![Value::text("c"), Value::Float(2.5)]);
    }

    #[test]
    fn test_from_columns_rejects_ragged() {
        let result = Table::from_columns(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Value::Int(1)], vec![]],
        );
        assert!(matches!(
            result,
            Err(SynthError::ShapeMismatch {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_from_columns_rejects_missing_column() {
        let result = Table::from_columns(vec!["a".to_string()], vec![]);
        assert!(matches!(result, Err(SynthError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = Table::new(vec!["a".to_string()]);
        assert!(table.push_row(vec![Value::Int(1)]).is_ok());
        assert!(table.push_row(vec![Value::Int(1), Value::Int(2)]).is_err());
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_append_copies_uses_existing_rows() {
        let mut table = sample();
        let appended = table.append_copies(&[2, 0, 2, 99]);
        assert_eq!(appended, 3);
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.rows()[3], table.rows()[2]);
        assert_eq!(table.rows()[4], table.rows()[0]);
    }

    #[test]
    fn test_set_null() {
        let mut table = sample();
        assert!(table.set_null(0, 0));
        assert!(!table.set_null(10, 0));
        assert_eq!(table.null_count(0), 1);
        assert_eq!(table.null_count(1), 1);
    }

    #[test]
    fn test_column_kind_inference() {
        let table = sample();
        assert_eq!(table.column_kind(0), ColumnKind::Text);
        assert_eq!(table.column_kind(1), ColumnKind::Float);

        let ints = Table::from_columns(
            vec!["n".to_string(), "empty".to_string()],
            vec![
                vec![Value::Int(1), Value::Null, Value::Int(3)],
                vec![Value::Null, Value::Null, Value::Null],
            ],
        )
        .unwrap();
        assert_eq!(ints.column_kind(0), ColumnKind::Integer);
        assert_eq!(ints.column_kind(1), ColumnKind::Empty);
    }

    #[test]
    fn test_require_column() {
        let table = sample();
        assert_eq!(table.require_column("score").unwrap(), 1);
        assert!(matches!(
            table.require_column("missing"),
            Err(SynthError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_select_rows_and_head() {
        let table = sample();
        let picked = table.select_rows(&[2, 0]);
        assert_eq!(picked.row_count(), 2);
        assert_eq!(picked.rows()[0][0], Value::text("c"));
        assert_eq!(table.head(10).row_count(), 3);
        assert_eq!(table.head(1).row_count(), 1);
    }
}
