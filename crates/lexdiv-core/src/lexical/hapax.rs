//! Hapax legomena and related vocabulary richness measures.
//!
//! - `V1`: distinct tokens occurring exactly once (hapax legomena)
//! - `V2`: distinct tokens occurring exactly twice (dis legomena)
//! - Sichel's S: `V2 / V`
//! - Honoré's R: `100 · ln N / (1 − V1/V)`
//!
//! Honoré's R is `+inf` when every type is a hapax: the denominator reaches
//! zero at maximal richness, which is a limit rather than an undefined value.

use super::lexicon::Lexicon;
use super::metadata::metadata;
use super::reports::{HapaxLexiconResult, HapaxResult, LexiconCategories};
use super::spectrum::FrequencySpectrum;
use crate::text;

/// Compute hapax statistics for `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_hapax_ratios(text: &str) -> HapaxResult {
    hapax_from_tokens(&text::tokenize(text))
}

/// Compute hapax statistics over an already tokenized sequence.
pub fn hapax_from_tokens(tokens: &[String]) -> HapaxResult {
    hapax_from_spectrum(&FrequencySpectrum::from_tokens(tokens))
}

fn hapax_from_spectrum(spectrum: &FrequencySpectrum) -> HapaxResult {
    let n = spectrum.token_count();
    let v = spectrum.vocabulary_size();
    let v1 = spectrum.frequency_of(1);
    let v2 = spectrum.frequency_of(2);

    let (hapax_ratio, dis_hapax_ratio, honore_r) = if n == 0 {
        (f64::NAN, f64::NAN, f64::NAN)
    } else {
        let honore = if v1 == v {
            f64::INFINITY
        } else {
            100.0 * (n as f64).ln() / (1.0 - v1 as f64 / v as f64)
        };
        (v1 as f64 / n as f64, v2 as f64 / n as f64, honore)
    };

    let sichel_s = if v == 0 { 0.0 } else { v2 as f64 / v as f64 };

    HapaxResult {
        hapax_count: v1,
        hapax_ratio,
        dis_hapax_count: v2,
        dis_hapax_ratio,
        sichel_s,
        honore_r,
        metadata: metadata! {
            "total_token_count" => n,
            "total_vocabulary_size" => v,
        },
    }
}

/// Compute hapax statistics and categorize each hapax by lexicon membership.
///
/// A hapax found in neither lexicon is a neologism, in exactly one a rare
/// word, and in both a common word. Category lists are sorted
/// alphabetically.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn compute_hapax_with_lexicon_analysis(
    text: &str,
    general_corpus: &impl Lexicon,
    sense_inventory: &impl Lexicon,
) -> HapaxLexiconResult {
    hapax_with_lexicon_from_tokens(&text::tokenize(text), general_corpus, sense_inventory)
}

/// Lexicon analysis over an already tokenized sequence.
pub fn hapax_with_lexicon_from_tokens(
    tokens: &[String],
    general_corpus: &impl Lexicon,
    sense_inventory: &impl Lexicon,
) -> HapaxLexiconResult {
    let spectrum = FrequencySpectrum::from_tokens(tokens);
    let hapax = hapax_from_spectrum(&spectrum);

    let mut neologisms = Vec::new();
    let mut rare_words = Vec::new();
    let mut common_words = Vec::new();

    // Spectrum iteration is already alphabetical.
    for word in spectrum.tokens_with_frequency(1) {
        match (general_corpus.contains(word), sense_inventory.contains(word)) {
            (false, false) => neologisms.push(word.to_string()),
            (true, true) => common_words.push(word.to_string()),
            _ => rare_words.push(word.to_string()),
        }
    }

    let total = hapax.hapax_count;
    let ratio = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    };

    let lexicon_analysis = LexiconCategories {
        neologism_ratio: ratio(neologisms.len()),
        rare_word_ratio: ratio(rare_words.len()),
        common_word_ratio: ratio(common_words.len()),
        metadata: metadata! {
            "total_hapax" => total,
            "neologism_count" => neologisms.len(),
            "rare_word_count" => rare_words.len(),
            "common_word_count" => common_words.len(),
        },
        neologisms,
        rare_words,
        common_words,
    };

    HapaxLexiconResult {
        metadata: metadata! {
            "total_token_count" => spectrum.token_count(),
            "total_vocabulary_size" => spectrum.vocabulary_size(),
            "hapax_count" => total,
        },
        hapax,
        lexicon_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::lexicon::WordList;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn counts_and_ratios() {
        let r = compute_hapax_ratios("one one two two three");
        assert_eq!(r.hapax_count, 1);
        assert_eq!(r.dis_hapax_count, 2);
        assert!((r.hapax_ratio - 0.2).abs() < EPSILON);
        assert!((r.dis_hapax_ratio - 0.4).abs() < EPSILON);
    }

    #[test]
    fn sichel_exact() {
        let r = compute_hapax_ratios("one one two two three");
        assert!((r.sichel_s - 2.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn honore_value() {
        // N=5, V=3, V1=1: 100·ln5 / (1 − 1/3).
        let r = compute_hapax_ratios("one one two two three");
        let expected = 100.0 * 5f64.ln() / (2.0 / 3.0);
        assert!((r.honore_r - expected).abs() < 1e-9);
    }

    #[test]
    fn honore_is_infinite_when_all_hapax() {
        let r = compute_hapax_ratios("one two three four five");
        assert_eq!(r.honore_r, f64::INFINITY);
        assert_eq!(r.sichel_s, 0.0);
    }

    #[test]
    fn single_token_is_all_hapax() {
        let r = compute_hapax_ratios("alone");
        assert_eq!(r.hapax_count, 1);
        assert_eq!(r.hapax_ratio, 1.0);
        assert_eq!(r.honore_r, f64::INFINITY);
    }

    #[test]
    fn empty_is_nan_with_zero_counts() {
        for text in ["", "  \n\t "] {
            let r = compute_hapax_ratios(text);
            assert_eq!(r.hapax_count, 0);
            assert_eq!(r.dis_hapax_count, 0);
            assert!(r.hapax_ratio.is_nan());
            assert!(r.dis_hapax_ratio.is_nan());
            assert!(r.honore_r.is_nan());
            assert_eq!(r.sichel_s, 0.0);
        }
    }

    #[test]
    fn metadata_keys() {
        let r = compute_hapax_ratios("a b a");
        assert_eq!(r.metadata["total_token_count"].as_usize(), Some(3));
        assert_eq!(r.metadata["total_vocabulary_size"].as_usize(), Some(2));
    }

    #[test]
    fn lexicon_partition() {
        let general = WordList::from_words(["cat", "dog", "blorb"]);
        let senses = WordList::from_words(["cat", "dog", "zeal"]);
        let r = compute_hapax_with_lexicon_analysis(
            "the the cat dog zeal blorb frobnicate quux",
            &general,
            &senses,
        );
        let cats = &r.lexicon_analysis;
        assert_eq!(cats.neologisms, vec!["frobnicate", "quux"]);
        assert_eq!(cats.rare_words, vec!["blorb", "zeal"]);
        assert_eq!(cats.common_words, vec!["cat", "dog"]);
        let sum = cats.neologism_ratio + cats.rare_word_ratio + cats.common_word_ratio;
        assert!((sum - 1.0).abs() < EPSILON);
        assert_eq!(r.metadata["hapax_count"].as_usize(), Some(6));
        assert_eq!(r.hapax.hapax_count, 6);
    }

    #[test]
    fn lexicon_with_no_hapax_has_zero_ratios() {
        let empty = WordList::default();
        let r = compute_hapax_with_lexicon_analysis("a a b b", &empty, &empty);
        assert!(r.lexicon_analysis.neologisms.is_empty());
        assert_eq!(r.lexicon_analysis.neologism_ratio, 0.0);
        assert_eq!(r.lexicon_analysis.rare_word_ratio, 0.0);
        assert_eq!(r.lexicon_analysis.common_word_ratio, 0.0);
    }
}
