//! Field generators and table synthesizer for fakecsv.
//!
//! This crate turns a field selection into an in-memory [`Table`]. Every
//! field owns a seeded RNG, so the same seed and selection always produce the
//! same table, and columns never share random state.
//!
//! # Architecture
//!
//! ```text
//! RunConfig (CLI / YAML)
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │  GeneratorRegistry  │
//! │                     │
//! │  - locale           │
//! │  - seed             │
//! │  - FieldSpec[]      │──── each FieldSpec owns a ValueGenerator
//! └──────────┬──────────┘
//!            │
//!            ▼
//!    TableSynthesizer ──▶ Table { columns, rows }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakecsv_core::{BuiltinField, CustomDataType, Locale};
//! use fakecsv_generator::GeneratorRegistry;
//!
//! let mut registry = GeneratorRegistry::new(Locale::FrFr, 42);
//! registry.register_builtin(BuiltinField::FullName);
//! registry.register_custom("Score", CustomDataType::Integer);
//!
//! let table = registry.synthesize(5).unwrap();
//! assert_eq!(table.columns(), ["Full Name", "Score"]);
//! ```
//!
//! # Built-in generators
//!
//! Names, e-mail, phone, address parts, company, job title, date, time,
//! free text, user name, password, credit card number, IPv4 and URL, each
//! drawing from the pools of one of five locales (`en_US`, `hi_IN`,
//! `fr_FR`, `de_DE`, `ja_JP`).
//!
//! [`Table`]: fakecsv_core::Table

pub mod generators;
pub mod registry;
pub mod synthesizer;

// Re-exports for convenience
pub use generators::{generate_builtin, GeneratorSource, SeededGenerator, ValueGenerator};
pub use registry::{FieldSpec, GeneratorRegistry};
pub use synthesizer::{synthesize, SynthesisMetrics, TableSynthesizer};
