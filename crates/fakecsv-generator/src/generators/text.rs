//! Company, job title and free-text generators.

use super::locale::{LocaleData, Script};
use super::pattern::render_template;
use super::person::last_name;
use super::pick;
use rand::Rng;

/// Upper bound on generated text length, in characters.
pub const MAX_TEXT_CHARS: usize = 200;

/// Generate a company name.
pub fn company<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let format = pick(rng, data.company_formats);
    render_template(format, |slot| match slot {
        "last" => Some(last_name(data, rng)),
        _ => None,
    })
}

/// Generate a job title.
pub fn job<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    pick(rng, data.jobs).to_string()
}

/// Generate a sentence of 4 to 9 words.
pub fn sentence<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let count = rng.random_range(4..=9);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, data.words)).collect();

    match data.script {
        Script::Spaced => {
            let mut sentence = words.join(" ");
            capitalize_first(&mut sentence);
            sentence.push('.');
            sentence
        }
        Script::Unspaced => {
            let mut sentence = words.concat();
            sentence.push('。');
            sentence
        }
    }
}

/// Generate up to [`MAX_TEXT_CHARS`] characters of whole sentences.
///
/// The first sentence is always kept (truncated when it alone is too long).
pub fn text<R: Rng + ?Sized>(data: &LocaleData, rng: &mut R) -> String {
    let separator = match data.script {
        Script::Spaced => " ",
        Script::Unspaced => "",
    };

    let mut result = String::new();
    let mut len = 0;
    for _ in 0..rng.random_range(2..=5) {
        let next = sentence(data, rng);
        let next_len = next.chars().count();
        if result.is_empty() {
            result = next.chars().take(MAX_TEXT_CHARS).collect();
            len = next_len.min(MAX_TEXT_CHARS);
            continue;
        }
        let added = separator.len() + next_len;
        if len + added > MAX_TEXT_CHARS {
            break;
        }
        result.push_str(separator);
        result.push_str(&next);
        len += added;
    }
    result
}

fn capitalize_first(s: &mut String) {
    if let Some(first) = s.chars().next() {
        let upper: String = first.to_uppercase().collect();
        s.replace_range(..first.len_utf8(), &upper);
    }
}

#[cfg(test)]
mod tests {
    use super::super::locale::locale_data;
    use super::*;
    use fakecsv_core::Locale;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_company_resolves_names() {
        let mut rng = StdRng::seed_from_u64(42);

        for locale in Locale::ALL {
            let data = locale_data(locale);
            for _ in 0..20 {
                let value = company(data, &mut rng);
                assert!(!value.contains("{last}"), "{value}");
                assert!(data.last_names.iter().any(|n| value.contains(n)), "{value}");
            }
        }
    }

    #[test]
    fn test_sentence_shape() {
        let data = locale_data(Locale::EnUs);
        let mut rng = StdRng::seed_from_u64(42);

        let value = sentence(data, &mut rng);
        assert!(value.ends_with('.'));
        assert!(value.chars().next().unwrap().is_uppercase());
        let words = value.trim_end_matches('.').split(' ').count();
        assert!((4..=9).contains(&words));
    }

    #[test]
    fn test_text_length_bound() {
        let mut rng = StdRng::seed_from_u64(42);

        for locale in Locale::ALL {
            let data = locale_data(locale);
            for _ in 0..50 {
                let value = text(data, &mut rng);
                assert!(!value.is_empty());
                assert!(value.chars().count() <= MAX_TEXT_CHARS, "{value}");
            }
        }
    }

    #[test]
    fn test_japanese_text_unspaced() {
        let data = locale_data(Locale::JaJp);
        let mut rng = StdRng::seed_from_u64(42);

        let value = text(data, &mut rng);
        assert!(!value.contains(' '));
        assert!(value.ends_with('。'));
    }
}
