//! Custom field value generators.

use fakecsv_core::{CustomDataType, Value};
use rand::Rng;

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated custom strings.
pub const CUSTOM_STRING_LEN: usize = 8;

/// Generate a value for a custom data type.
pub fn generate_custom<R: Rng + ?Sized>(datatype: CustomDataType, rng: &mut R) -> Value {
    match datatype {
        CustomDataType::Integer => generate_int_range(rng, 1, 100),
        CustomDataType::Float => generate_float_range(rng, 1.0, 100.0, 2),
        CustomDataType::String => generate_letters(rng, CUSTOM_STRING_LEN),
    }
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.random_range(min..=max))
}

/// Generate a random float in the given range (inclusive), rounded to
/// `decimals` places.
pub fn generate_float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: i32) -> Value {
    let scale = 10f64.powi(decimals);
    let value = rng.random_range(min..=max);
    Value::Float(((value * scale).round() / scale).clamp(min, max))
}

/// Generate a string of random ASCII letters.
pub fn generate_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Value {
    let text: String = (0..len)
        .map(|_| char::from(ASCII_LETTERS[rng.random_range(0..ASCII_LETTERS.len())]))
        .collect();
    Value::Text(text)
}
