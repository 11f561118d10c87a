//! fakecsv library
//!
//! Generates locale-aware fake tabular datasets with controlled noise.
//!
//! # Features
//!
//! - Built-in fields: names, contact data, addresses, companies, dates, text, credentials
//! - Five locales: `en_US`, `hi_IN`, `fr_FR`, `de_DE`, `ja_JP`
//! - Custom Integer / Float / String columns and arbitrary closure generators
//! - Null and duplicate injection with exact counts
//! - Export to CSV, xlsx and JSON plus a SQL `INSERT` preview
//! - Descriptive statistics, unique values and search
//!
//! # Stage crates
//!
//! - `fakecsv_core` - Values, tables, run configuration, the current-table slot
//! - `fakecsv_generator` - Field registry and table synthesizer
//! - `fakecsv_noise` - Null and duplicate injection
//! - `fakecsv_export` - File formats and SQL preview
//! - `fakecsv_summary` - Inspection of a generated table
//!
//! # CLI Usage
//!
//! ```bash
//! # 500 German finance rows with 10% nulls, written as CSV and JSON
//! fakecsv generate --locale de_DE --preset Finance --row-count 500 \
//!   --null-percent 10 --formats csv,json --output-dir out
//!
//! # Everything from a run file, with a summary and a SQL preview
//! fakecsv generate --config run.yaml --summary --sql-table people
//! ```

pub mod args;
pub mod pipeline;

pub use fakecsv_export as export;
pub use fakecsv_generator as generator;
pub use fakecsv_noise as noise;
pub use fakecsv_summary as summary;

pub use fakecsv_core::{RunConfig, SynthError, Table, TableSlot, Value};

pub use args::GenerateArgs;
pub use pipeline::{build_table, resolve_seed, run, RunOutcome, LARGE_ROW_COUNT, MAX_ROW_COUNT};
