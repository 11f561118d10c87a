//! First-seen ordered frequency table over non-null values.

use fakecsv_core::Value;
use std::collections::HashMap;

/// Distinct non-null values with their frequencies, in first-seen order.
///
/// Values are keyed by their canonical rendering.
#[derive(Debug, Default)]
pub(crate) struct Distinct<'a> {
    entries: Vec<(&'a Value, usize)>,
    index: HashMap<String, usize>,
    total: usize,
}

impl<'a> Distinct<'a> {
    pub(crate) fn from_values(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut distinct = Self::default();
        for value in values {
            let Some(key) = value.render() else {
                continue;
            };
            distinct.total += 1;
            match distinct.index.get(&key) {
                Some(&slot) => distinct.entries[slot].1 += 1,
                None => {
                    distinct.index.insert(key, distinct.entries.len());
                    distinct.entries.push((value, 1));
                }
            }
        }
        distinct
    }

    /// Number of distinct values.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-null values seen.
    pub(crate) fn total(&self) -> usize {
        self.total
    }

    /// `(value, count)` pairs in first-seen order.
    pub(crate) fn entries(&self) -> &[(&'a Value, usize)] {
        &self.entries
    }

    /// Highest-count value; the earliest seen wins ties.
    pub(crate) fn most_frequent(&self) -> Option<(&'a Value, usize)> {
        self.entries
            .iter()
            .copied()
            .fold(None, |best, (value, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((value, count)),
            })
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a Value, usize)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_skip_nulls() {
        let values = [
            Value::text("b"),
            Value::Null,
            Value::text("a"),
            Value::text("b"),
            Value::text("a"),
        ];
        let distinct = Distinct::from_values(&values);

        assert_eq!(distinct.total(), 4);
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct.entries()[0], (&Value::text("b"), 2));
        assert_eq!(distinct.most_frequent(), Some((&Value::text("b"), 2)));
    }

    #[test]
    fn test_empty() {
        let distinct = Distinct::from_values(&[Value::Null]);
        assert_eq!(distinct.len(), 0);
        assert_eq!(distinct.most_frequent(), None);
    }
}
