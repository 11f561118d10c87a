//! Per-column descriptive statistics.

use crate::distinct::Distinct;
use fakecsv_core::{ColumnKind, Table};
use std::fmt;

/// Statistics for a numeric column, nulls excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub count: usize,
    pub unique: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Statistics for a text (or all-null) column, nulls excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalStats {
    pub count: usize,
    pub unique: usize,
    /// Most frequent value; ties go to the value seen first.
    pub top: Option<String>,
    pub freq: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

impl ColumnStats {
    /// Non-null values in the column.
    pub fn count(&self) -> usize {
        match self {
            ColumnStats::Numeric(s) => s.count,
            ColumnStats::Categorical(s) => s.count,
        }
    }

    /// Distinct non-null values in the column.
    pub fn unique(&self) -> usize {
        match self {
            ColumnStats::Numeric(s) => s.unique,
            ColumnStats::Categorical(s) => s.unique,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub stats: ColumnStats,
}

/// Summary of every column of a table, in column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Description {
    pub columns: Vec<ColumnSummary>,
}

impl Description {
    /// Summary of one column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Describe every column of `table`.
pub fn describe(table: &Table) -> Description {
    let columns = (0..table.column_count())
        .map(|column| {
            let kind = table.column_kind(column);
            let stats = if kind.is_numeric() {
                ColumnStats::Numeric(numeric_stats(table, column))
            } else {
                ColumnStats::Categorical(categorical_stats(table, column))
            };
            ColumnSummary {
                name: table.columns()[column].clone(),
                kind,
                stats,
            }
        })
        .collect();
    Description { columns }
}

fn numeric_stats(table: &Table, column: usize) -> NumericStats {
    let mut values: Vec<f64> = table.column_values(column).filter_map(|v| v.as_f64()).collect();
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let unique = Distinct::from_values(table.column_values(column)).len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count >= 2).then(|| {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    });

    NumericStats {
        count,
        unique,
        mean,
        std,
        min: quantile(&values, 0.0),
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: quantile(&values, 1.0),
    }
}

fn categorical_stats(table: &Table, column: usize) -> CategoricalStats {
    let distinct = Distinct::from_values(table.column_values(column));
    let top = distinct.most_frequent();

    CategoricalStats {
        count: distinct.total(),
        unique: distinct.len(),
        top: top.map(|(value, _)| value.to_string()),
        freq: top.map_or(0, |(_, freq)| freq),
    }
}

/// Linear-interpolation quantile of sorted values. `NaN` when empty.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

const STAT_ROWS: [&str; 11] = [
    "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max",
];

fn stat_cell(stats: &ColumnStats, row: &str) -> String {
    let number = |v: f64| format!("{v:.6}");
    match (stats, row) {
        (s, "count") => s.count().to_string(),
        (s, "unique") => s.unique().to_string(),
        (ColumnStats::Categorical(s), "top") => s.top.clone().unwrap_or_default(),
        (ColumnStats::Categorical(s), "freq") if s.count > 0 => s.freq.to_string(),
        (ColumnStats::Numeric(s), "mean") => number(s.mean),
        (ColumnStats::Numeric(s), "std") => s.std.map(number).unwrap_or_default(),
        (ColumnStats::Numeric(s), "min") => number(s.min),
        (ColumnStats::Numeric(s), "25%") => number(s.q25),
        (ColumnStats::Numeric(s), "50%") => number(s.median),
        (ColumnStats::Numeric(s), "75%") => number(s.q75),
        (ColumnStats::Numeric(s), "max") => number(s.max),
        _ => String::new(),
    }
}

impl fmt::Display for Description {
    /// Aligned text table: one line per statistic, one column per table
    /// column. Cells that do not apply to a column are left blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| STAT_ROWS.iter().map(|row| stat_cell(&c.stats, row)).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, column)| {
                column
                    .iter()
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(c.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let label_width = STAT_ROWS.iter().map(|r| r.len()).max().unwrap_or(0);

        write!(f, "{:label_width$}", "")?;
        for (c, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", c.name)?;
        }
        writeln!(f)?;

        for (row_idx, row) in STAT_ROWS.iter().enumerate() {
            write!(f, "{row:<label_width$}")?;
            for (column, width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", column[row_idx])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakecsv_core::Value;

    fn sample() -> Table {
        Table::from_columns(
            vec!["Score".to_string(), "City".to_string(), "Empty".to_string()],
            vec![
                vec![
                    Value::Int(1),
                    Value::Int(2),
                    Value::Int(3),
                    Value::Int(4),
                    Value::Null,
                ],
                vec![
                    Value::text("Paris"),
                    Value::text("Lyon"),
                    Value::text("Lyon"),
                    Value::Null,
                    Value::text("Paris"),
                ],
                vec![Value::Null; 5],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_numeric_column() {
        let description = describe(&sample());
        let score = description.column("Score").unwrap();
        assert_eq!(score.kind, ColumnKind::Integer);

        let ColumnStats::Numeric(stats) = &score.stats else {
            panic!("expected numeric stats");
        };
        assert_eq!(stats.count, 4);
        assert_eq!(stats.unique, 4);
        assert_eq!(stats.mean, 2.5);
        assert!((stats.std.unwrap() - 1.290_994_448_735_805_6).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q25, 1.75);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q75, 3.25);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_categorical_column_top_tie_first_seen() {
        let description = describe(&sample());
        let city = description.column("City").unwrap();

        let ColumnStats::Categorical(stats) = &city.stats else {
            panic!("expected categorical stats");
        };
        assert_eq!(stats.count, 4);
        assert_eq!(stats.unique, 2);
        assert_eq!(stats.top.as_deref(), Some("Paris"));
        assert_eq!(stats.freq, 2);
    }

    #[test]
    fn test_all_null_column() {
        let description = describe(&sample());
        let empty = description.column("Empty").unwrap();
        assert_eq!(empty.kind, ColumnKind::Empty);
        assert_eq!(
            empty.stats,
            ColumnStats::Categorical(CategoricalStats {
                count: 0,
                unique: 0,
                top: None,
                freq: 0,
            })
        );
    }

    #[test]
    fn test_single_value_has_no_std() {
        let table = Table::from_columns(vec!["x".to_string()], vec![vec![Value::Float(2.0)]]).unwrap();
        let description = describe(&table);
        let ColumnStats::Numeric(stats) = &description.columns[0].stats else {
            panic!("expected numeric stats");
        };
        assert_eq!(stats.std, None);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_quantile() {
        assert!(quantile(&[], 0.5).is_nan());
        assert_eq!(quantile(&[5.0], 0.75), 5.0);
        assert_eq!(quantile(&[0.0, 10.0], 0.25), 2.5);
    }

    #[test]
    fn test_display() {
        let text = describe(&sample()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].contains("Score") && lines[0].contains("City"));
        assert!(lines[1].starts_with("count"));
        assert!(lines[3].starts_with("top") && lines[3].contains("Paris"));
        assert!(lines[5].contains("2.500000"));
        // Every line has the same width.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
