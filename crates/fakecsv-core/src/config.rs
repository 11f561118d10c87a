//! Run configuration.
//!
//! A run is described either by CLI flags or by a YAML run file:
//!
//! ```yaml
//! locale: de_DE
//! preset: Finance
//! fields:
//!   - City
//! custom_fields:
//!   - name: Score
//!     datatype: Integer
//! row_count: 500
//! null_percent: 10
//! duplicates: true
//! duplicate_fraction: 0.2
//! seed: 42
//! ```

use crate::error::SynthError;
use crate::fields::{BuiltinField, CategoryPreset, CustomDataType, Locale};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Highest accepted null percentage.
pub const MAX_NULL_PERCENT: u8 = 50;

/// Highest accepted duplicate fraction.
pub const MAX_DUPLICATE_FRACTION: f64 = 1.0;

/// Noise parameters applied after synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Rows to synthesize (at least 1)
    pub row_count: usize,
    /// Percentage of each column to null out (0..=50)
    pub null_percent: u8,
    /// Whether duplicate rows are appended
    pub duplicate_enabled: bool,
    /// Fraction of the table to re-append as duplicates (0.0..=1.0)
    pub duplicate_fraction: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            row_count: 1000,
            null_percent: 0,
            duplicate_enabled: false,
            duplicate_fraction: 0.1,
        }
    }
}

impl NoiseConfig {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.row_count == 0 {
            return Err(SynthError::invalid("row_count", self.row_count, ">= 1"));
        }
        validate_null_percent(self.null_percent)?;
        validate_duplicate_fraction(self.duplicate_fraction)?;
        Ok(())
    }

    /// Fraction actually applied: zero unless duplicates are enabled.
    pub fn effective_duplicate_fraction(&self) -> f64 {
        if self.duplicate_enabled {
            self.duplicate_fraction
        } else {
            0.0
        }
    }
}

/// Reject a null percentage above [`MAX_NULL_PERCENT`].
pub fn validate_null_percent(percent: u8) -> Result<(), SynthError> {
    if percent > MAX_NULL_PERCENT {
        return Err(SynthError::invalid("null_percent", percent, "0..=50"));
    }
    Ok(())
}

/// Reject a duplicate fraction outside `[0, 1]` (NaN included).
pub fn validate_duplicate_fraction(fraction: f64) -> Result<(), SynthError> {
    if !(0.0..=MAX_DUPLICATE_FRACTION).contains(&fraction) {
        return Err(SynthError::invalid("duplicate_fraction", fraction, "0.0..=1.0"));
    }
    Ok(())
}

/// A user-defined column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldDef {
    /// Column name (empty names are skipped at registration)
    pub name: String,
    /// Value distribution
    pub datatype: CustomDataType,
}

impl CustomFieldDef {
    /// Create a new custom field definition.
    pub fn new(name: impl Into<String>, datatype: CustomDataType) -> Self {
        Self {
            name: name.into(),
            datatype,
        }
    }

    /// Parse `Name:Type` (the type defaults to String when omitted).
    pub fn parse(spec: &str) -> Result<Self, SynthError> {
        match spec.rsplit_once(':') {
            Some((name, datatype)) => Ok(Self::new(name.trim(), datatype.parse()?)),
            None => Ok(Self::new(spec.trim(), CustomDataType::String)),
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Locale for built-in generators
    pub locale: Locale,
    /// Optional preset whose fields are selected first
    pub preset: Option<CategoryPreset>,
    /// Explicitly selected built-in fields
    pub fields: Vec<BuiltinField>,
    /// User-defined fields, in entry order
    pub custom_fields: Vec<CustomFieldDef>,
    /// Rows to synthesize
    pub row_count: usize,
    /// Percentage of each column to null out
    pub null_percent: u8,
    /// Append duplicate rows
    pub duplicates: bool,
    /// Fraction of rows to duplicate when `duplicates` is set
    pub duplicate_fraction: f64,
    /// Seed for every random source (random when absent)
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        let noise = NoiseConfig::default();
        Self {
            locale: Locale::default(),
            preset: None,
            fields: Vec::new(),
            custom_fields: Vec::new(),
            row_count: noise.row_count,
            null_percent: noise.null_percent,
            duplicates: noise.duplicate_enabled,
            duplicate_fraction: noise.duplicate_fraction,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Parse a run configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SynthError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a run configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SynthError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Noise parameters of this run.
    pub fn noise(&self) -> NoiseConfig {
        NoiseConfig {
            row_count: self.row_count,
            null_percent: self.null_percent,
            duplicate_enabled: self.duplicates,
            duplicate_fraction: self.duplicate_fraction,
        }
    }

    /// Built-in fields in selection order: preset fields first, then explicit
    /// selections not already covered by the preset.
    pub fn selected_builtins(&self) -> Vec<BuiltinField> {
        let mut selected: Vec<BuiltinField> = self
            .preset
            .map(|p| p.fields().to_vec())
            .unwrap_or_default();
        for field in &self.fields {
            if !selected.contains(field) {
                selected.push(*field);
            }
        }
        selected
    }

    /// Whether the run selects no field at all.
    pub fn is_empty_selection(&self) -> bool {
        self.selected_builtins().is_empty()
            && self.custom_fields.iter().all(|c| c.name.is_empty())
    }

    /// Validate noise parameters.
    pub fn validate(&self) -> Result<(), SynthError> {
        self.noise().validate()
    }
}
