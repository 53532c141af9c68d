//! Shannon entropy and perplexity of n-gram distributions.
//!
//! ```text
//! H = −Σ p(g) · log2 p(g)      perplexity = 2^H
//! ```
//!
//! N-grams are overlapping windows of `n` items, where an item is either a
//! case-folded word token or a single character of the raw text (whitespace
//! included). Frequencies are kept in an ordered map so the entropy sum is
//! reproducible to the bit.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisResult, require_positive};
use crate::lexical::{Distribution, Metadata, metadata::metadata};
use crate::text;

/// Warning recorded when there are fewer items than `n`.
const TOO_SHORT_WARNING: &str = "Text too short for n-gram analysis";

/// Unit that n-grams are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum NgramKind {
    /// Case-folded word tokens.
    #[default]
    Word,
    /// Characters of the raw text, including whitespace.
    Character,
}

impl NgramKind {
    /// Returns the kind name (`"word"` or `"character"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Character => "character",
        }
    }

    /// Label in the form `"{kind}_{n}gram"`.
    pub fn label(&self, n: usize) -> String {
        format!("{}_{n}gram", self.as_str())
    }
}

impl std::fmt::Display for NgramKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entropy of one n-gram distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntropyResult {
    /// Shannon entropy in bits, `>= 0`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub entropy: f64,
    /// `2^entropy`, `>= 1`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub perplexity: f64,
    /// Label such as `"word_2gram"`.
    pub ngram_type: String,
    /// `n`, `ngram_type`, `item_count`, `unique_ngrams`, `total_ngrams`,
    /// and `warning` for too-short input.
    pub metadata: Metadata,
}

/// Entropy computed per chunk and summarized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChunkedEntropyResult {
    /// Mean chunk entropy.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub entropy: f64,
    /// `2^entropy`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub perplexity: f64,
    /// Label such as `"word_2gram"`.
    pub ngram_type: String,
    /// Items per chunk.
    pub chunk_size: usize,
    /// Chunks long enough to hold at least one n-gram.
    pub chunk_count: usize,
    /// Per-chunk entropy.
    pub entropy_dist: Distribution,
    /// Per-chunk perplexity.
    pub perplexity_dist: Distribution,
    /// `n`, `ngram_type`, `total_item_count`, `total_unique_ngrams`,
    /// `total_ngrams`, and `warning` when no chunk qualified.
    pub metadata: Metadata,
}

/// Compute n-gram entropy for `text`.
///
/// Fewer than `n` items yields `entropy = 0.0`, `perplexity = 1.0`, and a
/// `warning` in metadata.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_ngram_entropy(
    text: &str,
    n: usize,
    kind: NgramKind,
) -> AnalysisResult<EntropyResult> {
    let n = require_positive("n", n)?;
    let words;
    let items: Vec<&str> = match kind {
        NgramKind::Word => {
            words = text::tokenize(text);
            words.iter().map(String::as_str).collect()
        }
        NgramKind::Character => characters(text),
    };
    Ok(entropy_of_items(&items, n, kind))
}

/// Word n-gram entropy over an already tokenized sequence.
pub fn entropy_from_tokens(tokens: &[String], n: usize) -> AnalysisResult<EntropyResult> {
    let n = require_positive("n", n)?;
    let items: Vec<&str> = tokens.iter().map(String::as_str).collect();
    Ok(entropy_of_items(&items, n, NgramKind::Word))
}

/// Character bigram entropy.
pub fn compute_character_bigram_entropy(text: &str) -> EntropyResult {
    entropy_of_items(&characters(text), 2, NgramKind::Character)
}

/// Word bigram entropy.
pub fn compute_word_bigram_entropy(text: &str) -> EntropyResult {
    let tokens = text::tokenize(text);
    let items: Vec<&str> = tokens.iter().map(String::as_str).collect();
    entropy_of_items(&items, 2, NgramKind::Word)
}

/// Compute n-gram entropy separately over consecutive chunks of
/// `chunk_size` items.
///
/// Chunks with fewer than `n` items are skipped. If no chunk qualifies, the
/// short-text convention applies (`0.0` / `1.0` plus a warning).
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_ngram_entropy_chunked(
    text: &str,
    n: usize,
    kind: NgramKind,
    chunk_size: usize,
) -> AnalysisResult<ChunkedEntropyResult> {
    let n = require_positive("n", n)?;
    let chunk_size = require_positive("chunk_size", chunk_size)?;
    let words;
    let items: Vec<&str> = match kind {
        NgramKind::Word => {
            words = text::tokenize(text);
            words.iter().map(String::as_str).collect()
        }
        NgramKind::Character => characters(text),
    };
    Ok(chunked_entropy_of_items(&items, n, kind, chunk_size))
}

/// Chunked word n-gram entropy over an already tokenized sequence.
pub fn chunked_entropy_from_tokens(
    tokens: &[String],
    n: usize,
    chunk_size: usize,
) -> AnalysisResult<ChunkedEntropyResult> {
    let n = require_positive("n", n)?;
    let chunk_size = require_positive("chunk_size", chunk_size)?;
    let items: Vec<&str> = tokens.iter().map(String::as_str).collect();
    Ok(chunked_entropy_of_items(&items, n, NgramKind::Word, chunk_size))
}

fn chunked_entropy_of_items(
    items: &[&str],
    n: usize,
    kind: NgramKind,
    chunk_size: usize,
) -> ChunkedEntropyResult {
    let mut entropies = Vec::new();
    let mut unique: BTreeMap<&[&str], usize> = BTreeMap::new();
    let mut total_ngrams = 0usize;

    for chunk in items.chunks(chunk_size).filter(|c| c.len() >= n) {
        let counts = count_ngrams(chunk, n);
        let chunk_total = chunk.len() - n + 1;
        entropies.push(shannon_entropy(&counts, chunk_total));
        total_ngrams += chunk_total;
        for (gram, count) in counts {
            *unique.entry(gram).or_insert(0) += count;
        }
    }

    let mut meta = metadata! {
        "n" => n,
        "ngram_type" => kind.as_str(),
        "total_item_count" => items.len(),
        "total_unique_ngrams" => unique.len(),
        "total_ngrams" => total_ngrams,
    };
    if entropies.is_empty() {
        tracing::debug!(items = items.len(), n, "no chunk long enough for n-grams");
        meta.insert("warning".to_string(), TOO_SHORT_WARNING.into());
    }

    let perplexities: Vec<f64> = entropies.iter().map(|h| h.exp2()).collect();
    let entropy_dist = Distribution::from_values(entropies);
    let entropy = if entropy_dist.is_empty() {
        0.0
    } else {
        entropy_dist.mean
    };

    ChunkedEntropyResult {
        entropy,
        perplexity: entropy.exp2(),
        ngram_type: kind.label(n),
        chunk_size,
        chunk_count: entropy_dist.len(),
        perplexity_dist: Distribution::from_values(perplexities),
        entropy_dist,
        metadata: meta,
    }
}

fn entropy_of_items(items: &[&str], n: usize, kind: NgramKind) -> EntropyResult {
    if items.len() < n {
        tracing::debug!(items = items.len(), n, "text too short for n-grams");
        return EntropyResult {
            entropy: 0.0,
            perplexity: 1.0,
            ngram_type: kind.label(n),
            metadata: metadata! {
                "n" => n,
                "ngram_type" => kind.as_str(),
                "item_count" => items.len(),
                "warning" => TOO_SHORT_WARNING,
            },
        };
    }

    let counts = count_ngrams(items, n);
    let total = items.len() - n + 1;
    let entropy = shannon_entropy(&counts, total);

    EntropyResult {
        entropy,
        perplexity: entropy.exp2(),
        ngram_type: kind.label(n),
        metadata: metadata! {
            "n" => n,
            "ngram_type" => kind.as_str(),
            "item_count" => items.len(),
            "unique_ngrams" => counts.len(),
            "total_ngrams" => total,
        },
    }
}

/// Split text into one-character slices.
fn characters(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}

fn count_ngrams<'a, 'b>(items: &'a [&'b str], n: usize) -> BTreeMap<&'a [&'b str], usize> {
    let mut counts = BTreeMap::new();
    for gram in items.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

fn shannon_entropy(counts: &BTreeMap<&[&str], usize>, total: usize) -> f64 {
    let total = total as f64;
    let mut entropy = 0.0;
    for &count in counts.values() {
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn all_distinct_bigrams_hit_maximum() {
        let r = compute_ngram_entropy("A B C D E F G H", 2, NgramKind::Word).unwrap();
        let unique = r.metadata["unique_ngrams"].as_usize().unwrap();
        assert_eq!(unique, 7);
        assert!((r.entropy - (unique as f64).log2()).abs() < EPSILON);
    }

    #[test]
    fn repeated_token_has_zero_entropy() {
        let r = compute_ngram_entropy("A A A A A", 2, NgramKind::Word).unwrap();
        assert_eq!(r.entropy, 0.0);
        assert_eq!(r.perplexity, 1.0);
    }

    #[test]
    fn perplexity_is_two_to_the_entropy() {
        let r = compute_word_bigram_entropy("the cat sat on the mat and the cat ran");
        assert!((r.perplexity - r.entropy.exp2()).abs() < EPSILON);
    }

    #[test]
    fn too_short_warns() {
        let r = compute_ngram_entropy("alone", 2, NgramKind::Word).unwrap();
        assert_eq!(r.entropy, 0.0);
        assert_eq!(r.perplexity, 1.0);
        assert_eq!(r.metadata["warning"].as_str(), Some(TOO_SHORT_WARNING));
        assert_eq!(r.metadata["item_count"].as_usize(), Some(1));
    }

    #[test]
    fn empty_and_whitespace_match_for_words() {
        let a = compute_ngram_entropy("", 2, NgramKind::Word).unwrap();
        let b = compute_ngram_entropy("  \t\n ", 2, NgramKind::Word).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ngram_type_label() {
        assert_eq!(compute_word_bigram_entropy("a b").ngram_type, "word_2gram");
        assert_eq!(
            compute_ngram_entropy("abc", 3, NgramKind::Character)
                .unwrap()
                .ngram_type,
            "character_3gram"
        );
    }

    #[test]
    fn character_ngrams_include_whitespace() {
        // "a a" -> bigrams "a ", " a": two distinct.
        let r = compute_character_bigram_entropy("a a");
        assert_eq!(r.metadata["item_count"].as_usize(), Some(3));
        assert_eq!(r.metadata["unique_ngrams"].as_usize(), Some(2));
        assert!((r.entropy - 1.0).abs() < EPSILON);
    }

    #[test]
    fn character_ngrams_keep_case_and_unicode() {
        let r = compute_character_bigram_entropy("éÉé");
        assert_eq!(r.metadata["item_count"].as_usize(), Some(3));
        assert_eq!(r.metadata["unique_ngrams"].as_usize(), Some(2));
    }

    #[test]
    fn word_ngrams_are_case_folded() {
        let r = compute_word_bigram_entropy("The the THE the");
        assert_eq!(r.entropy, 0.0);
    }

    #[test]
    fn zero_n_is_rejected() {
        assert!(compute_ngram_entropy("a b", 0, NgramKind::Word).is_err());
    }

    #[test]
    fn chunked_skips_short_tail() {
        // Chunks of 4: "a b c d" (3 distinct bigrams), "e" (skipped).
        let r = compute_ngram_entropy_chunked("a b c d e", 2, NgramKind::Word, 4).unwrap();
        assert_eq!(r.chunk_count, 1);
        assert!((r.entropy - 3f64.log2()).abs() < EPSILON);
        assert!((r.perplexity - r.entropy.exp2()).abs() < EPSILON);
        assert_eq!(r.metadata["total_item_count"].as_usize(), Some(5));
        assert_eq!(r.metadata["total_ngrams"].as_usize(), Some(3));
        assert!(!r.metadata.contains_key("warning"));
    }

    #[test]
    fn chunked_summarizes_each_chunk() {
        let r = compute_ngram_entropy_chunked("a a a a b c d e", 2, NgramKind::Word, 4).unwrap();
        assert_eq!(r.chunk_count, 2);
        assert_eq!(r.entropy_dist.values[0], 0.0);
        assert!((r.entropy_dist.values[1] - 3f64.log2()).abs() < EPSILON);
        assert!((r.entropy - 3f64.log2() / 2.0).abs() < EPSILON);
        assert_eq!(r.perplexity_dist.len(), 2);
    }

    #[test]
    fn chunked_with_no_qualifying_chunk_warns() {
        let r = compute_ngram_entropy_chunked("a", 2, NgramKind::Word, 10).unwrap();
        assert_eq!(r.chunk_count, 0);
        assert_eq!(r.entropy, 0.0);
        assert_eq!(r.perplexity, 1.0);
        assert_eq!(r.metadata["warning"].as_str(), Some(TOO_SHORT_WARNING));
    }
}
