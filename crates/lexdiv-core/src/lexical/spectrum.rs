//! Vocabulary frequency spectrum.
//!
//! Maps each distinct token to its occurrence count, and derives the
//! frequency-of-frequencies `V(m)`: how many distinct tokens occur exactly
//! `m` times. `Σ V(m)·m = N` and `Σ V(m) = V` hold by construction.

use std::collections::BTreeMap;

/// Token counts for one token sequence.
///
/// Backed by ordered maps so every iteration (and every floating-point sum
/// built from one) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencySpectrum {
    counts: BTreeMap<String, usize>,
    token_count: usize,
}

impl FrequencySpectrum {
    /// Count the tokens of `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(count) = counts.get_mut(token) {
                *count += 1;
            } else {
                counts.insert(token.to_string(), 1);
            }
        }
        Self {
            counts,
            token_count: tokens.len(),
        }
    }

    /// `N`, the number of tokens.
    pub const fn token_count(&self) -> usize {
        self.token_count
    }

    /// `V`, the number of distinct tokens.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `token` (0 if absent).
    pub fn count_of(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Iterate `(token, count)` in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Tokens that occur exactly `m` times, in token order.
    pub fn tokens_with_frequency(&self, m: usize) -> impl Iterator<Item = &str> {
        self.iter().filter(move |(_, c)| *c == m).map(|(t, _)| t)
    }

    /// `V(m)`, the number of distinct tokens occurring exactly `m` times.
    pub fn frequency_of(&self, m: usize) -> usize {
        self.counts.values().filter(|c| **c == m).count()
    }

    /// The full `m -> V(m)` mapping, ascending by `m`.
    pub fn frequency_of_frequencies(&self) -> BTreeMap<usize, usize> {
        let mut vm = BTreeMap::new();
        for count in self.counts.values() {
            *vm.entry(*count).or_insert(0) += 1;
        }
        vm
    }

    /// `Σ m²·V(m)`.
    pub fn sum_m2_vm(&self) -> u128 {
        self.frequency_of_frequencies()
            .into_iter()
            .map(|(m, vm)| (m as u128) * (m as u128) * (vm as u128))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectrum(text: &str) -> FrequencySpectrum {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        FrequencySpectrum::from_tokens(&tokens)
    }

    #[test]
    fn empty() {
        let s = spectrum("");
        assert_eq!(s.token_count(), 0);
        assert_eq!(s.vocabulary_size(), 0);
        assert_eq!(s.sum_m2_vm(), 0);
        assert!(s.frequency_of_frequencies().is_empty());
    }

    #[test]
    fn counts_and_frequency_of_frequencies() {
        let s = spectrum("one two one three one");
        assert_eq!(s.token_count(), 5);
        assert_eq!(s.vocabulary_size(), 3);
        assert_eq!(s.count_of("one"), 3);
        assert_eq!(s.count_of("four"), 0);
        assert_eq!(s.frequency_of(1), 2);
        assert_eq!(s.frequency_of(3), 1);
        assert_eq!(s.sum_m2_vm(), 11);
    }

    #[test]
    fn spectrum_invariants_hold() {
        let s = spectrum("a b a c b a d e e e e");
        let vm = s.frequency_of_frequencies();
        let tokens: usize = vm.iter().map(|(m, v)| m * v).sum();
        let types: usize = vm.values().sum();
        assert_eq!(tokens, s.token_count());
        assert_eq!(types, s.vocabulary_size());
    }

    #[test]
    fn tokens_with_frequency_are_sorted() {
        let s = spectrum("pear apple fig apple");
        let once: Vec<_> = s.tokens_with_frequency(1).collect();
        assert_eq!(once, vec!["fig", "pear"]);
    }
}
