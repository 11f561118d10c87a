//! Command-line arguments for `fakecsv generate`.

use anyhow::Context;
use clap::Args;
use fakecsv_core::{BuiltinField, CategoryPreset, CustomFieldDef, Locale, RunConfig};
use fakecsv_export::{ExportFormat, DEFAULT_PREVIEW_ROWS};
use std::path::PathBuf;

/// Arguments of a generation run.
///
/// Every run parameter is optional so that values from `--config` are only
/// overridden by flags that were actually given.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to a YAML run file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Locale for built-in fields (en_US, hi_IN, fr_FR, de_DE, ja_JP)
    #[arg(long, env = "FAKECSV_LOCALE")]
    pub locale: Option<Locale>,

    /// Category preset (E-commerce, Healthcare, Finance, Education)
    #[arg(long)]
    pub preset: Option<CategoryPreset>,

    /// Built-in fields to include (comma-separated, e.g. "Full Name,Email")
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<BuiltinField>,

    /// Custom column as NAME:TYPE with TYPE one of Integer, Float, String (repeatable)
    #[arg(long = "custom", value_name = "NAME:TYPE", value_parser = CustomFieldDef::parse)]
    pub custom: Vec<CustomFieldDef>,

    /// Number of rows to generate
    #[arg(long)]
    pub row_count: Option<usize>,

    /// Percentage of every column to replace with nulls (0-50)
    #[arg(long)]
    pub null_percent: Option<u8>,

    /// Append randomly drawn duplicate rows
    #[arg(long)]
    pub duplicates: bool,

    /// Fraction of rows to re-append as duplicates (0.0-1.0)
    #[arg(long)]
    pub duplicate_fraction: Option<f64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "FAKECSV_SEED")]
    pub seed: Option<u64>,

    /// Directory for exported files
    #[arg(long, short = 'o', default_value = "out")]
    pub output_dir: PathBuf,

    /// Export formats (comma-separated: csv, xlsx, json)
    #[arg(long, value_delimiter = ',', default_value = "csv,xlsx,json")]
    pub formats: Vec<ExportFormat>,

    /// Skip writing files
    #[arg(long)]
    pub no_export: bool,

    /// Print a SQL INSERT preview for this table name
    #[arg(long)]
    pub sql_table: Option<String>,

    /// Rows in the SQL preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub sql_limit: usize,

    /// Print the first N rows as CSV
    #[arg(long, default_value_t = 0)]
    pub preview: usize,

    /// Print descriptive statistics and unique values
    #[arg(long)]
    pub summary: bool,

    /// Print value frequencies of this column
    #[arg(long)]
    pub chart: Option<String>,

    /// Print rows where any cell contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Make --search case-sensitive
    #[arg(long)]
    pub case_sensitive: bool,
}

impl GenerateArgs {
    /// Run configuration: the `--config` file (or defaults) with flags
    /// applied on top.
    pub fn to_run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)
                .with_context(|| format!("Failed to load run file from {path:?}"))?,
            None => RunConfig::default(),
        };

        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(preset) = self.preset {
            config.preset = Some(preset);
        }
        for field in &self.fields {
            if !config.fields.contains(field) {
                config.fields.push(*field);
            }
        }
        config.custom_fields.extend(self.custom.iter().cloned());
        if let Some(row_count) = self.row_count {
            config.row_count = row_count;
        }
        if let Some(null_percent) = self.null_percent {
            config.null_percent = null_percent;
        }
        if self.duplicates {
            config.duplicates = true;
        }
        if let Some(fraction) = self.duplicate_fraction {
            config.duplicate_fraction = fraction;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}
