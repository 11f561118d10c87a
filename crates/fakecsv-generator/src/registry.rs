//! Registry of the fields selected for one run.

use crate::generators::{GeneratorSource, SeededGenerator, ValueGenerator};
use crate::synthesizer::TableSynthesizer;
use fakecsv_core::{BuiltinField, CustomDataType, FieldKind, Locale, RunConfig, SynthError, Table, Value};
use std::fmt;
use tracing::{debug, warn};

/// Multiplier used to spread per-field seeds (64-bit golden ratio).
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// One named column-producing unit.
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    generator: Box<dyn ValueGenerator>,
}

impl FieldSpec {
    /// Create a field backed by any value generator.
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        generator: impl ValueGenerator + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            generator: Box::new(generator),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generator kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Produce the next value for this column.
    pub fn generate(&mut self) -> Value {
        self.generator.generate()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered set of active fields for one run.
///
/// Each registration gets its own RNG, seeded from the run seed and the
/// registration slot, so columns never share random state.
///
/// Names are unique: registering a name that is already present replaces
/// the earlier generator and keeps the earlier column position.
#[derive(Debug)]
pub struct GeneratorRegistry {
    locale: Locale,
    seed: u64,
    next_slot: u64,
    fields: Vec<FieldSpec>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new(locale: Locale, seed: u64) -> Self {
        Self {
            locale,
            seed,
            next_slot: 0,
            fields: Vec::new(),
        }
    }

    /// Build the registry for a run: preset and selected built-ins first,
    /// then custom fields in entry order.
    pub fn from_config(config: &RunConfig, seed: u64) -> Self {
        let mut registry = Self::new(config.locale, seed);
        for field in config.selected_builtins() {
            registry.register_builtin(field);
        }
        for custom in &config.custom_fields {
            registry.register_custom(&custom.name, custom.datatype);
        }
        debug!(
            "Registered {} fields for locale {}: {:?}",
            registry.len(),
            registry.locale,
            registry.field_names()
        );
        registry
    }

    /// Base seed of this registry.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Add a field. Returns false when the field was skipped (empty name).
    pub fn register(&mut self, spec: FieldSpec) -> bool {
        if spec.name.is_empty() {
            debug!("Skipping field with empty name ({:?})", spec.kind);
            return false;
        }

        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => {
                warn!(
                    "Field '{}' registered twice; {:?} replaces {:?}",
                    spec.name, spec.kind, existing.kind
                );
                *existing = spec;
            }
            None => self.fields.push(spec),
        }
        true
    }

    /// Register a built-in field in this registry's locale.
    pub fn register_builtin(&mut self, field: BuiltinField) -> bool {
        let source = GeneratorSource::Builtin {
            field,
            locale: self.locale,
        };
        let generator = SeededGenerator::new(source, self.next_seed());
        self.register(FieldSpec::new(field.name(), FieldKind::Builtin(field), generator))
    }

    /// Register a custom field. Empty names are skipped.
    pub fn register_custom(&mut self, name: &str, datatype: CustomDataType) -> bool {
        if name.is_empty() {
            debug!("Skipping custom {datatype} field with empty name");
            return false;
        }
        let generator = SeededGenerator::new(GeneratorSource::Custom(datatype), self.next_seed());
        self.register(FieldSpec::new(name, FieldKind::Custom(datatype), generator))
    }

    /// Register an arbitrary value producer (e.g. a closure).
    pub fn register_generator(&mut self, name: &str, generator: impl ValueGenerator + 'static) -> bool {
        self.register(FieldSpec::new(name, FieldKind::Callable, generator))
    }

    /// Fields in column order.
    pub fn active_fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Column names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of active fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is active.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Synthesize a table with `row_count` rows from the active fields.
    pub fn synthesize(&mut self, row_count: usize) -> Result<Table, SynthError> {
        TableSynthesizer::new(row_count).synthesize(&mut self.fields)
    }

    /// Hand the active fields over, e.g. to a custom synthesizer.
    pub fn into_fields(self) -> Vec<FieldSpec> {
        self.fields
    }

    fn next_seed(&mut self) -> u64 {
        let seed = self
            .seed
            .wrapping_add(self.next_slot.wrapping_add(1).wrapping_mul(SEED_MIX));
        self.next_slot += 1;
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakecsv_core::{CategoryPreset, CustomFieldDef};

    #[test]
    fn test_registration_order() {
        let mut registry = GeneratorRegistry::new(Locale::EnUs, 42);
        registry.register_builtin(BuiltinField::Email);
        registry.register_builtin(BuiltinField::FullName);
        registry.register_custom("Score", CustomDataType::Integer);

        assert_eq!(registry.field_names(), vec!["Email", "Full Name", "Score"]);
        assert_eq!(registry.active_fields()[2].kind(), FieldKind::Custom(CustomDataType::Integer));
    }

    #[test]
    fn test_empty_custom_name_skipped() {
        let mut registry = GeneratorRegistry::new(Locale::EnUs, 42);
        assert!(!registry.register_custom("", CustomDataType::Float));
        assert!(!registry.register_generator("", || Value::Null));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_custom_overrides_builtin_in_place() {
        let mut registry = GeneratorRegistry::new(Locale::EnUs, 42);
        registry.register_builtin(BuiltinField::FullName);
        registry.register_builtin(BuiltinField::City);
        registry.register_builtin(BuiltinField::Email);
        registry.register_custom("City", CustomDataType::Integer);

        assert_eq!(registry.field_names(), vec!["Full Name", "City", "Email"]);
        assert_eq!(
            registry.active_fields()[1].kind(),
            FieldKind::Custom(CustomDataType::Integer)
        );

        let table = registry.synthesize(20).unwrap();
        assert!(table.column_values(1).all(|v| matches!(v, Value::Int(_))));
    }

    #[test]
    fn test_register_closure() {
        let mut registry = GeneratorRegistry::new(Locale::EnUs, 0);
        let mut next = 0;
        registry.register_generator("Counter", move || {
            next += 1;
            Value::Int(next)
        });

        let table = registry.synthesize(3).unwrap();
        let values: Vec<_> = table.column_values(0).cloned().collect();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_from_config() {
        let config = RunConfig {
            preset: Some(CategoryPreset::Healthcare),
            fields: vec![BuiltinField::Email, BuiltinField::Ipv4],
            custom_fields: vec![
                CustomFieldDef::new("Score", CustomDataType::Integer),
                CustomFieldDef::new("", CustomDataType::String),
                CustomFieldDef::new("Ratio", CustomDataType::Float),
            ],
            ..RunConfig::default()
        };

        let registry = GeneratorRegistry::from_config(&config, 42);
        assert_eq!(
            registry.field_names(),
            vec![
                "Full Name",
                "Date",
                "Job Title",
                "City",
                "State",
                "Email",
                "IPv4",
                "Score",
                "Ratio"
            ]
        );
    }

    #[test]
    fn test_locale_changes_values_not_names() {
        let config = RunConfig {
            fields: vec![BuiltinField::FullName, BuiltinField::City, BuiltinField::Country],
            ..RunConfig::default()
        };
        let german = RunConfig {
            locale: Locale::DeDe,
            ..config.clone()
        };

        let mut us = GeneratorRegistry::from_config(&config, 42);
        let mut de = GeneratorRegistry::from_config(&german, 42);
        assert_eq!(us.field_names(), de.field_names());

        let us_table = us.synthesize(30).unwrap();
        let de_table = de.synthesize(30).unwrap();
        assert_eq!(us_table.columns(), de_table.columns());
        assert_ne!(us_table.rows(), de_table.rows());
    }

    #[test]
    fn test_same_seed_same_table() {
        let config = RunConfig {
            fields: vec![BuiltinField::FullName, BuiltinField::Password],
            custom_fields: vec![CustomFieldDef::new("Score", CustomDataType::Float)],
            ..RunConfig::default()
        };

        let first = GeneratorRegistry::from_config(&config, 7).synthesize(25).unwrap();
        let second = GeneratorRegistry::from_config(&config, 7).synthesize(25).unwrap();
        let other = GeneratorRegistry::from_config(&config, 8).synthesize(25).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_columns_have_independent_streams() {
        let mut registry = GeneratorRegistry::new(Locale::EnUs, 42);
        registry.register_custom("A", CustomDataType::Integer);
        registry.register_custom("B", CustomDataType::Integer);

        let table = registry.synthesize(50).unwrap();
        let a: Vec<_> = table.column_values(0).collect();
        let b: Vec<_> = table.column_values(1).collect();
        assert_ne!(a, b);
    }
}
