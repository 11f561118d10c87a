//! Controlled noise for synthesized tables.
//!
//! Two transforms are applied in place, nulls first:
//!
//! - **Null injection**: for every column independently, exactly
//!   [`null_count`] distinct rows are picked uniformly at random and set to
//!   null.
//! - **Duplicate injection**: [`duplicate_count`] rows are drawn with
//!   replacement from the table as it was before the call and appended.
//!
//! The random source is explicit, so a seeded [`NoiseInjector`] reproduces the
//! same corruption for the same table.
//!
//! # Example
//!
//! ```rust
//! use fakecsv_core::{Table, Value};
//! use fakecsv_noise::NoiseInjector;
//!
//! let mut table = Table::from_columns(
//!     vec!["n".to_string()],
//!     vec![(0..10).map(Value::Int).collect()],
//! )
//! .unwrap();
//!
//! let mut injector = NoiseInjector::seeded(42);
//! injector.inject_nulls(&mut table, 20).unwrap();
//! assert_eq!(table.null_count(0), 2);
//!
//! injector.inject_duplicates(&mut table, 0.5).unwrap();
//! assert_eq!(table.row_count(), 15);
//! ```

use fakecsv_core::config::{validate_duplicate_fraction, validate_null_percent};
use fakecsv_core::{NoiseConfig, SynthError, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// What a noise pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseReport {
    /// Cells nulled per column, in column order.
    pub nulls_per_column: Vec<usize>,
    /// Rows appended as duplicates.
    pub duplicates_appended: usize,
}

impl NoiseReport {
    /// Total number of cells nulled.
    pub fn total_nulls(&self) -> usize {
        self.nulls_per_column.iter().sum()
    }
}

/// Number of cells to null in a column of `rows` values.
///
/// `percent / 100 * rows`, rounded half to even, computed in integers so the
/// result is exact.
pub fn null_count(percent: u8, rows: usize) -> usize {
    let scaled = usize::from(percent) * rows;
    let quotient = scaled / 100;
    match scaled % 100 {
        r if r > 50 => quotient + 1,
        50 => quotient + quotient % 2,
        _ => quotient,
    }
}

/// Number of rows to append for a duplicate fraction: `floor(rows * fraction)`.
pub fn duplicate_count(rows: usize, fraction: f64) -> usize {
    (rows as f64 * fraction).floor() as usize
}

/// Applies null and duplicate noise using an explicit random source.
#[derive(Debug, Clone)]
pub struct NoiseInjector<R> {
    rng: R,
}

impl NoiseInjector<StdRng> {
    /// Create an injector backed by a seeded [`StdRng`].
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseInjector<R> {
    /// Create an injector around any random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Null out `percent`% of every column, sampling rows per column without
    /// replacement. Returns the number of cells nulled per column.
    pub fn inject_nulls(&mut self, table: &mut Table, percent: u8) -> Result<Vec<usize>, SynthError> {
        validate_null_percent(percent)?;

        let rows = table.row_count();
        let per_column = null_count(percent, rows);
        if per_column == 0 {
            debug!("Null injection is a no-op ({percent}% of {rows} rows)");
            return Ok(vec![0; table.column_count()]);
        }

        let mut counts = Vec::with_capacity(table.column_count());
        for column in 0..table.column_count() {
            let picked = rand::seq::index::sample(&mut self.rng, rows, per_column);
            let nulled = picked
                .into_iter()
                .filter(|&row| table.set_null(row, column))
                .count();
            counts.push(nulled);
        }

        info!(
            "Injected {} nulls per column into {} columns ({}% of {} rows)",
            per_column,
            table.column_count(),
            percent,
            rows
        );
        Ok(counts)
    }

    /// Append `floor(rows * fraction)` rows drawn with replacement from the
    /// current rows. Returns the number of rows appended.
    pub fn inject_duplicates(&mut self, table: &mut Table, fraction: f64) -> Result<usize, SynthError> {
        validate_duplicate_fraction(fraction)?;

        let rows = table.row_count();
        let count = duplicate_count(rows, fraction);
        if count == 0 {
            debug!("Duplicate injection is a no-op (fraction {fraction} of {rows} rows)");
            return Ok(0);
        }

        let picked: Vec<usize> = (0..count).map(|_| self.rng.random_range(0..rows)).collect();
        let appended = table.append_copies(&picked);

        info!(
            "Appended {} duplicate rows ({} -> {} rows)",
            appended,
            rows,
            table.row_count()
        );
        Ok(appended)
    }

    /// Apply a full noise configuration: nulls, then duplicates when enabled.
    ///
    /// Parameters are validated before the table is touched.
    pub fn apply(&mut self, table: &mut Table, config: &NoiseConfig) -> Result<NoiseReport, SynthError> {
        validate_null_percent(config.null_percent)?;
        validate_duplicate_fraction(config.duplicate_fraction)?;

        let nulls_per_column = self.inject_nulls(table, config.null_percent)?;
        let duplicates_appended =
            self.inject_duplicates(table, config.effective_duplicate_fraction())?;

        Ok(NoiseReport {
            nulls_per_column,
            duplicates_appended,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakecsv_core::Value;

    fn table(rows: usize, columns: usize) -> Table {
        let names = (0..columns).map(|c| format!("c{c}")).collect();
        let values = (0..columns)
            .map(|c| (0..rows).map(|r| Value::Int((r * 10 + c) as i64)).collect())
            .collect();
        Table::from_columns(names, values).unwrap()
    }

    #[test]
    fn test_null_count_rounding() {
        assert_eq!(null_count(20, 5), 1);
        assert_eq!(null_count(0, 1000), 0);
        assert_eq!(null_count(50, 7), 4); // 3.5 -> 4
        assert_eq!(null_count(50, 5), 2); // 2.5 -> 2
        assert_eq!(null_count(10, 5), 0); // 0.5 -> 0
        assert_eq!(null_count(10, 15), 2); // 1.5 -> 2
        assert_eq!(null_count(35, 3), 1); // 1.05 -> 1
        assert_eq!(null_count(45, 10_000), 4500);
    }

    #[test]
    fn test_duplicate_count() {
        assert_eq!(duplicate_count(100, 0.1), 10);
        assert_eq!(duplicate_count(5, 0.5), 2);
        assert_eq!(duplicate_count(0, 1.0), 0);
        assert_eq!(duplicate_count(10, 0.0), 0);
        assert_eq!(duplicate_count(7, 1.0), 7);
    }

    #[test]
    fn test_exact_null_count_per_column() {
        for percent in [0u8, 5, 10, 20, 25, 33, 50] {
            for rows in [1usize, 5, 37, 200] {
                let mut t = table(rows, 3);
                let mut injector = NoiseInjector::seeded(u64::from(percent) + rows as u64);
                let counts = injector.inject_nulls(&mut t, percent).unwrap();

                let expected = null_count(percent, rows);
                assert_eq!(counts, vec![expected; 3]);
                for column in 0..3 {
                    assert_eq!(t.null_count(column), expected, "{percent}% of {rows}");
                }
                assert_eq!(t.row_count(), rows);
            }
        }
    }

    #[test]
    fn test_nulls_sampled_per_column() {
        let mut t = table(200, 4);
        NoiseInjector::seeded(1).inject_nulls(&mut t, 50).unwrap();

        let null_rows = |column: usize| -> Vec<usize> {
            (0..t.row_count())
                .filter(|&r| t.get(r, column).is_some_and(Value::is_null))
                .collect()
        };
        assert!((1..4).any(|c| null_rows(c) != null_rows(0)));
    }

    #[test]
    fn test_zero_percent_is_noop() {
        let original = table(50, 2);
        let mut t = original.clone();
        NoiseInjector::seeded(9).inject_nulls(&mut t, 0).unwrap();
        assert_eq!(t, original);
    }

    #[test]
    fn test_invalid_percent_leaves_table() {
        let original = table(10, 2);
        let mut t = original.clone();
        let result = NoiseInjector::seeded(9).inject_nulls(&mut t, 60);
        assert!(matches!(result, Err(SynthError::InvalidNoiseParameter { .. })));
        assert_eq!(t, original);
    }

    #[test]
    fn test_duplicates_come_from_original_rows() {
        let original = table(100, 2);
        let mut t = original.clone();
        let appended = NoiseInjector::seeded(3).inject_duplicates(&mut t, 0.1).unwrap();

        assert_eq!(appended, 10);
        assert_eq!(t.row_count(), 110);
        assert_eq!(&t.rows()[..100], original.rows());
        for row in &t.rows()[100..] {
            assert!(original.rows().contains(row));
        }
    }

    #[test]
    fn test_zero_fraction_is_noop() {
        let original = table(20, 1);
        let mut t = original.clone();
        assert_eq!(NoiseInjector::seeded(3).inject_duplicates(&mut t, 0.0).unwrap(), 0);
        assert_eq!(t, original);
    }

    #[test]
    fn test_invalid_fraction_rejected() {
        let mut t = table(20, 1);
        let mut injector = NoiseInjector::seeded(3);
        assert!(injector.inject_duplicates(&mut t, -0.1).is_err());
        assert!(injector.inject_duplicates(&mut t, 1.01).is_err());
        assert!(injector.inject_duplicates(&mut t, f64::NAN).is_err());
        assert_eq!(t.row_count(), 20);
    }

    #[test]
    fn test_apply_disabled_duplicates() {
        let mut t = table(40, 2);
        let config = NoiseConfig {
            row_count: 40,
            null_percent: 25,
            duplicate_enabled: false,
            duplicate_fraction: 0.5,
        };
        let report = NoiseInjector::seeded(5).apply(&mut t, &config).unwrap();

        assert_eq!(report.nulls_per_column, vec![10, 10]);
        assert_eq!(report.total_nulls(), 20);
        assert_eq!(report.duplicates_appended, 0);
        assert_eq!(t.row_count(), 40);
    }

    #[test]
    fn test_apply_disabled_matches_nulls_only() {
        let mut applied = table(30, 2);
        let mut nulls_only = applied.clone();
        let config = NoiseConfig {
            row_count: 30,
            null_percent: 10,
            duplicate_enabled: false,
            duplicate_fraction: 1.0,
        };
        NoiseInjector::seeded(9).apply(&mut applied, &config).unwrap();
        NoiseInjector::seeded(9).inject_nulls(&mut nulls_only, 10).unwrap();
        assert_eq!(applied, nulls_only);
    }

    #[test]
    fn test_apply_nulls_then_duplicates() {
        let mut t = table(100, 2);
        let config = NoiseConfig {
            row_count: 100,
            null_percent: 10,
            duplicate_enabled: true,
            duplicate_fraction: 0.1,
        };
        let report = NoiseInjector::seeded(5).apply(&mut t, &config).unwrap();

        assert_eq!(report.duplicates_appended, 10);
        assert_eq!(t.row_count(), 110);
        // Duplicated rows carry the nulls injected before them.
        let before: Vec<_> = t.rows()[..100].to_vec();
        for row in &t.rows()[100..] {
            assert!(before.contains(row));
        }
    }

    #[test]
    fn test_apply_validates_before_mutating() {
        let original = table(10, 1);
        let mut t = original.clone();
        let config = NoiseConfig {
            row_count: 10,
            null_percent: 20,
            duplicate_enabled: true,
            duplicate_fraction: 2.0,
        };
        assert!(NoiseInjector::seeded(5).apply(&mut t, &config).is_err());
        assert_eq!(t, original);
    }

    #[test]
    fn test_seeded_injection_reproducible() {
        let mut first = table(60, 3);
        let mut second = first.clone();
        NoiseInjector::seeded(11).inject_nulls(&mut first, 30).unwrap();
        NoiseInjector::seeded(11).inject_nulls(&mut second, 30).unwrap();
        assert_eq!(first, second);
    }
}
