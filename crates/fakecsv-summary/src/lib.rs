//! Read-only inspection of synthesized tables.
//!
//! - [`describe`] - Per-column descriptive statistics
//! - [`unique_sample`] / [`unique_values`] - Distinct values in first-seen order
//! - [`value_counts`] - Frequencies behind per-column bar charts
//! - [`search`] - Rows whose cells contain a substring
//!
//! Nothing here mutates the table.
//!
//! # Example
//!
//! ```rust
//! use fakecsv_core::{Table, Value};
//! use fakecsv_summary::{search, unique_sample};
//!
//! let table = Table::from_columns(
//!     vec!["City".to_string()],
//!     vec![vec![Value::text("Lyon"), Value::text("Nice"), Value::text("Lyon")]],
//! )
//! .unwrap();
//!
//! assert_eq!(unique_sample(&table, "City", 10).unwrap(), vec!["Lyon", "Nice"]);
//! assert_eq!(search(&table, "lyon", true).row_count(), 2);
//! ```

pub mod describe;
mod distinct;
pub mod search;
pub mod unique;

pub use describe::{
    describe, quantile, CategoricalStats, ColumnStats, ColumnSummary, Description, NumericStats,
};
pub use search::{matching_rows, search};
pub use unique::{unique_sample, unique_values, value_counts, UniqueValues, ValueCount, DEFAULT_SAMPLE_LIMIT};
