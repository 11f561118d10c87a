//! Core types for the fakecsv dataset generator.
//!
//! This crate provides the foundational types shared by every stage of the
//! generate → corrupt → export pipeline:
//!
//! - [`Value`] - A single cell value (null, integer, float or text)
//! - [`Table`] - Ordered column names plus a rectangular row matrix
//! - [`BuiltinField`], [`CustomDataType`], [`Locale`], [`CategoryPreset`] - Field selection vocabulary
//! - [`NoiseConfig`] / [`RunConfig`] - Run parameters, loadable from YAML
//! - [`TableSlot`] - Single current-table holder with swap semantics
//! - [`SynthError`] - Errors raised while building or corrupting a table
//!
//! # Architecture
//!
//! ```text
//! fakecsv-core (this crate)
//!    │
//!    ├─── fakecsv-generator  (registry + synthesizer, produces a Table)
//!    ├─── fakecsv-noise      (null / duplicate injection on a Table)
//!    ├─── fakecsv-export     (CSV, xlsx, JSON, SQL preview)
//!    └─── fakecsv-summary    (describe, unique values, search)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakecsv_core::{Table, Value};
//!
//! let table = Table::from_columns(
//!     vec!["Score".to_string()],
//!     vec![vec![Value::Int(7), Value::Null]],
//! )
//! .unwrap();
//!
//! assert_eq!(table.row_count(), 2);
//! assert_eq!(table.null_count(0), 1);
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod slot;
pub mod table;
pub mod values;

// Re-exports for convenience
pub use config::{CustomFieldDef, NoiseConfig, RunConfig, MAX_DUPLICATE_FRACTION, MAX_NULL_PERCENT};
pub use error::SynthError;
pub use fields::{BuiltinField, CategoryPreset, CustomDataType, FieldKind, Locale};
pub use slot::TableSlot;
pub use table::{ColumnKind, Table};
pub use values::{format_float, Value};
