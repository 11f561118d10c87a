//! Individual value generators for built-in and custom fields.
//!
//! Every column is backed by a [`ValueGenerator`]: a zero-argument producer
//! that owns whatever random state it needs. Built-in and custom fields are
//! resolved to a [`SeededGenerator`] at registration time; arbitrary closures
//! returning a [`Value`] work as well.

pub mod address;
pub mod internet;
pub mod locale;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod text;
pub mod timestamp;

use fakecsv_core::{BuiltinField, CustomDataType, Locale, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zero-argument value producer backing one column.
pub trait ValueGenerator: Send {
    /// Produce the next value.
    fn generate(&mut self) -> Value;
}

impl<F> ValueGenerator for F
where
    F: FnMut() -> Value + Send,
{
    fn generate(&mut self) -> Value {
        self()
    }
}

/// What a [`SeededGenerator`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorSource {
    /// Built-in field in a given locale
    Builtin { field: BuiltinField, locale: Locale },
    /// Custom field with a fixed distribution
    Custom(CustomDataType),
}

/// Generator owning its own seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededGenerator {
    source: GeneratorSource,
    rng: StdRng,
}

impl SeededGenerator {
    /// Create a generator for `source` seeded with `seed`.
    pub fn new(source: GeneratorSource, seed: u64) -> Self {
        Self {
            source,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueGenerator for SeededGenerator {
    fn generate(&mut self) -> Value {
        match self.source {
            GeneratorSource::Builtin { field, locale } => {
                generate_builtin(field, locale, &mut self.rng)
            }
            GeneratorSource::Custom(datatype) => numeric::generate_custom(datatype, &mut self.rng),
        }
    }
}

/// Generate one value for a built-in field in the given locale.
pub fn generate_builtin<R: Rng + ?Sized>(field: BuiltinField, locale: Locale, rng: &mut R) -> Value {
    let data = locale::locale_data(locale);
    let value = match field {
        BuiltinField::FullName => person::full_name(data, rng),
        BuiltinField::FirstName => person::first_name(data, rng),
        BuiltinField::LastName => person::last_name(data, rng),
        BuiltinField::Email => person::email(data, rng),
        BuiltinField::PhoneNumber => address::phone_number(data, rng),
        BuiltinField::Address => address::address(data, rng),
        BuiltinField::City => address::city(data, rng),
        BuiltinField::State => address::state(data, rng),
        BuiltinField::Country => address::country(data, rng),
        BuiltinField::PostalCode => address::postcode(data, rng),
        BuiltinField::Company => text::company(data, rng),
        BuiltinField::JobTitle => text::job(data, rng),
        BuiltinField::Date => return timestamp::generate_date(rng),
        BuiltinField::Time => return timestamp::generate_time(rng),
        BuiltinField::Text => text::text(data, rng),
        BuiltinField::Username => person::user_name(data, rng),
        BuiltinField::Password => internet::password(rng),
        BuiltinField::CreditCardNumber => internet::credit_card_number(rng),
        BuiltinField::Ipv4 => internet::ipv4(rng),
        BuiltinField::Url => internet::url(data, rng),
    };
    Value::Text(value)
}

/// Pick one entry of a pool, or `""` when the pool is empty.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    pool[rng.random_range(0..pool.len())]
}
