//! Error types for table synthesis and noise injection.

/// Error type for synthesis, noise and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// No built-in and no custom field was selected
    #[error("No fields selected: choose at least one built-in or custom column")]
    EmptySelection,

    /// A noise or size parameter is outside its documented range
    #[error("Invalid value for {name}: {value} (expected {expected})")]
    InvalidNoiseParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, rendered for display
        value: String,
        /// Human readable accepted range
        expected: &'static str,
    },

    /// Built-in field name is not part of the offered set
    #[error("Unknown built-in field: {0}")]
    UnknownField(String),

    /// Locale code is not part of the supported set
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Category preset name is not known
    #[error("Unknown category preset: {0}")]
    UnknownPreset(String),

    /// Custom field data type is not Integer, Float or String
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// Column not found in table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Row or column vector does not match the table shape
    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Error reading a run file
    #[error("Failed to read run file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a run file
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SynthError {
    /// Build an [`SynthError::InvalidNoiseParameter`] from any displayable value.
    pub fn invalid(name: &'static str, value: impl ToString, expected: &'static str) -> Self {
        Self::InvalidNoiseParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
