//! Internet and payment generators: passwords, IPv4 addresses, URLs and
//! credit card numbers.

use super::locale::LocaleData;
use super::pattern::fill_digits;
use super::pick;
use rand::seq::SliceRandom;
use rand::Rng;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+";

/// Generated password length.
pub const PASSWORD_LEN: usize = 10;

/// Card number prefixes (Visa, Mastercard, Discover), padded to 15 digits
/// before the check digit.
const CARD_PREFIXES: &[&str] = &["4", "51", "52", "53", "54", "55", "6011"];

/// Card number length including the check digit.
pub const CARD_LEN: usize = 16;

/// Generate a password with at least one lowercase, uppercase, digit and
/// special character.
pub fn password<R: Rng + ?Sized>(rng: &mut R) -> String {
    let classes = [LOWER, UPPER, DIGITS, SPECIAL];
    let mut chars: Vec<u8> = classes
        .iter()
        .map(|class| class[rng.random_range(0..class.len())])
        .collect();

    while chars.len() < PASSWORD_LEN {
        let class = classes[rng.random_range(0..classes.len())];
        chars.push(class[rng.random_range(0..class.len())]);
    }

    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

/// Generate a dotted-quad IPv4 address with a non-zero first octet.
pub fn ipv4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = rng.random_range(1..=223u8);
    let rest: [u8; 3] = rng.random();
    format!("{first}.{}.{}.{}", rest[0], rest[1], rest[2])
}

/// Generate a URL on a locale top-level domain.
pub fn url<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let word = pick(rng, data.ascii_names);
    let tld = pick(rng, data.tlds);
    format!("https://www.{word}.{tld}/")
}

/// Generate a 16-digit card number with a valid Luhn check digit.
pub fn credit_card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, CARD_PREFIXES);
    let mut number = String::with_capacity(CARD_LEN);
    number.push_str(prefix);
    number.push_str(&fill_digits(&"#".repeat(CARD_LEN - 1 - prefix.len()), rng));

    let check = luhn_check_digit(&number);
    number.push(char::from(b'0' + check));
    number
}

/// Luhn check digit for a digit string (non-digits are ignored).
pub fn luhn_check_digit(payload: &str) -> u8 {
    let sum: u32 = payload
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { double_digit(d) } else { d })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether a digit string passes the Luhn check.
pub fn luhn_valid(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 1 { double_digit(d) } else { d })
        .sum();
    !number.is_empty() && sum % 10 == 0
}

fn double_digit(d: u32) -> u32 {
    let doubled = d * 2;
    if doubled > 9 {
        doubled - 9
    } else {
        doubled
    }
}
