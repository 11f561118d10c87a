//! Template and digit-pattern rendering.
//!
//! Templates support `{name}` placeholders resolved by the caller. Digit
//! patterns support:
//! - `#` - any digit
//! - `%` - a non-zero digit

use rand::Rng;

/// Render a template, replacing each `{name}` with `resolve(name)`.
///
/// Placeholders that resolve to `None`, and unterminated braces, are kept
/// verbatim. Resolved text is never re-scanned.
pub fn render_template<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let end = start + len;
        let name = &rest[start + 1..end];
        match resolve(name) {
            Some(value) => result.push_str(&value),
            None => result.push_str(&rest[start..=end]),
        }
        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Replace `#` and `%` in a pattern with random digits.
pub fn fill_digits<R: Rng + ?Sized>(pattern: &str, rng: &mut R) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => random_digit(rng, 0),
            '%' => random_digit(rng, 1),
            other => other,
        })
        .collect()
}

/// Generate a random number with exactly N digits.
pub fn generate_random_digits<R: Rng + ?Sized>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(random_digit(rng, 1));

    for _ in 1..digits {
        result.push(random_digit(rng, 0));
    }

    result
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R, min: u8) -> char {
    char::from(b'0' + rng.random_range(min..10))
}
