//! Person-related generators: names, user names and e-mail addresses.

use super::locale::LocaleData;
use super::pattern::{generate_random_digits, render_template};
use super::pick;
use rand::Rng;

/// Generate a first name.
pub fn first_name<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.first_names).to_string()
}

/// Generate a last name.
pub fn last_name<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.last_names).to_string()
}

/// Generate a full name in the locale's name order.
pub fn full_name<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    render_template(data.name_format, |slot| match slot {
        "first" => Some(first_name(data, rng)),
        "last" => Some(last_name(data, rng)),
        _ => None,
    })
}

/// Generate an ASCII user name such as `mary.garcia`, `jsmith` or `taylor42`.
pub fn user_name<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let first = pick(rng, data.ascii_names);
    let second = pick(rng, data.ascii_names);
    match rng.random_range(0..4) {
        0 => format!("{first}.{second}"),
        1 => format!("{first}_{second}"),
        2 => {
            let initial: String = first.chars().take(1).collect();
            format!("{initial}{second}")
        }
        _ => {
            let digits = rng.random_range(1..=4);
            format!("{first}{}", generate_random_digits(rng, digits))
        }
    }
}

/// Generate an e-mail address on one of the locale's free mail domains.
pub fn email<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let local = user_name(data, rng);
    let domain = pick(rng, data.email_domains);
    format!("{local}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::super::locale::locale_data;
    use super::*;
    use fakecsv_core::Locale;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_uses_pools() {
        let data = locale_data(Locale::EnUs);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let name = full_name(data, &mut rng);
            let (first, last) = name.split_once(' ').unwrap();
            assert!(data.first_names.contains(&first), "{name}");
            assert!(data.last_names.contains(&last), "{name}");
        }
    }

    #[test]
    fn test_japanese_family_name_first() {
        let data = locale_data(Locale::JaJp);
        let mut rng = StdRng::seed_from_u64(42);

        let name = full_name(data, &mut rng);
        let (family, given) = name.split_once(' ').unwrap();
        assert!(data.last_names.contains(&family), "{name}");
        assert!(data.first_names.contains(&given), "{name}");
    }

    #[test]
    fn test_email_is_ascii() {
        let mut rng = StdRng::seed_from_u64(42);

        for locale in Locale::ALL {
            let data = locale_data(locale);
            for _ in 0..50 {
                let address = email(data, &mut rng);
                assert!(address.is_ascii(), "{address}");
                let (local, domain) = address.split_once('@').unwrap();
                assert!(!local.is_empty());
                assert!(data.email_domains.contains(&domain));
            }
        }
    }

    #[test]
    fn test_user_name_no_spaces() {
        let data = locale_data(Locale::DeDe);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let name = user_name(data, &mut rng);
            assert!(!name.is_empty());
            assert!(!name.contains(' '), "{name}");
        }
    }

    #[test]
    fn test_user_name_initial_on_non_ascii_stems() {
        let data = LocaleData {
            ascii_names: &["Élodie", "Ōno"],
            ..*locale_data(Locale::FrFr)
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let name = user_name(&data, &mut rng);
            assert!(!name.is_empty());
            assert!(name.starts_with('É') || name.starts_with('Ō'), "{name}");
        }
    }
}
