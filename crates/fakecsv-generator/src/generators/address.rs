//! Address-related generators.

use super::locale::LocaleData;
use super::pattern::{fill_digits, render_template};
use super::pick;
use rand::Rng;

/// Generate a city name.
pub fn city<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.cities).to_string()
}

/// Generate a state, region or prefecture name.
pub fn state<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.states).to_string()
}

/// Generate a country name in the locale's language.
pub fn country<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.countries).to_string()
}

/// Generate a postal code in the locale's format.
pub fn postcode<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let pattern = pick(rng, data.postcode_patterns);
    fill_digits(pattern, rng)
}

/// Generate a phone number in one of the locale's formats.
pub fn phone_number<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let pattern = pick(rng, data.phone_patterns);
    fill_digits(pattern, rng)
}

/// Generate a single-line street address.
pub fn address<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    render_template(data.address_format, |slot| match slot {
        "building" => Some(rng.random_range(1..=999u32).to_string()),
        "street" => Some(pick(rng, data.streets).to_string()),
        "city" => Some(city(data, rng)),
        "state" => Some(state(data, rng)),
        "postcode" => Some(postcode(data, rng)),
        _ => None,
    })
}
