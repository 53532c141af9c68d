//! Type-token ratio and its length-normalized variants.
//!
//! - Raw TTR: `V / N`
//! - Root TTR (Guiraud's index): `V / sqrt(N)`
//! - Log TTR (Herdan's C): `ln V / ln N`
//! - STTR: mean TTR over complete fixed-size chunks
//! - Delta std (Sigley): population standard deviation of chunk TTR
//!
//! STTR is only reported for texts of at least [`STTR_MIN_WORDS`] tokens;
//! shorter texts get `sttr = 0.0` and `sttr_available = false`.

use std::collections::HashSet;

use super::distribution::{Distribution, mean, population_std};
use super::metadata::metadata;
use super::reports::{TtrAggregate, TtrResult};
use crate::error::{AnalysisError, AnalysisResult, require_positive};
use crate::text;

/// Default tokens per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Minimum text length for a reliable STTR.
pub const STTR_MIN_WORDS: usize = 2000;

/// Compute TTR metrics for `text`.
///
/// `text_id` is echoed into metadata for tracking (empty string if `None`).
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_ttr(
    text: &str,
    text_id: Option<&str>,
    chunk_size: usize,
) -> AnalysisResult<TtrResult> {
    ttr_from_tokens(&text::tokenize(text), text_id, chunk_size)
}

/// Compute TTR metrics over an already tokenized sequence.
pub fn ttr_from_tokens(
    tokens: &[String],
    text_id: Option<&str>,
    chunk_size: usize,
) -> AnalysisResult<TtrResult> {
    let chunk_size = require_positive("chunk_size", chunk_size)?;

    let total_words = tokens.len();
    let unique_words = distinct(tokens);
    let ratios = Ratios::of(unique_words, total_words);

    let chunks: Vec<&[String]> = tokens.chunks(chunk_size).collect();
    let chunk_ratios: Vec<Ratios> = chunks
        .iter()
        .map(|chunk| Ratios::of(distinct(chunk), chunk.len()))
        .collect();

    // STTR and delta only use complete chunks; a short tail would inflate TTR.
    let complete: Vec<f64> = chunks
        .iter()
        .zip(&chunk_ratios)
        .filter(|(chunk, _)| chunk.len() == chunk_size)
        .map(|(_, r)| r.ttr)
        .collect();

    let sttr_available = total_words >= STTR_MIN_WORDS && !complete.is_empty();
    let delta_std_available = sttr_available && complete.len() >= 2;

    let sttr = if sttr_available { mean(&complete) } else { 0.0 };
    let delta_std = if delta_std_available {
        population_std(&complete, sttr)
    } else {
        0.0
    };

    if !sttr_available {
        tracing::debug!(total_words, "text too short for STTR");
    }

    Ok(TtrResult {
        total_words,
        unique_words,
        ttr: ratios.ttr,
        root_ttr: ratios.root_ttr,
        log_ttr: ratios.log_ttr,
        sttr,
        delta_std,
        chunk_size,
        chunk_count: total_words.div_ceil(chunk_size).max(1),
        ttr_dist: Distribution::from_values(chunk_ratios.iter().map(|r| r.ttr).collect()),
        root_ttr_dist: Distribution::from_values(
            chunk_ratios.iter().map(|r| r.root_ttr).collect(),
        ),
        log_ttr_dist: Distribution::from_values(chunk_ratios.iter().map(|r| r.log_ttr).collect()),
        sttr_dist: single_or_empty(sttr_available, sttr),
        delta_std_dist: single_or_empty(delta_std_available, delta_std),
        metadata: metadata! {
            "text_id" => text_id.unwrap_or_default(),
            "source" => "lexdiv",
            "sttr_available" => sttr_available,
            "delta_std_available" => delta_std_available,
        },
    })
}

/// The three whole-sequence ratios.
#[derive(Debug, Clone, Copy)]
struct Ratios {
    ttr: f64,
    root_ttr: f64,
    log_ttr: f64,
}

impl Ratios {
    fn of(types: usize, tokens: usize) -> Self {
        if tokens == 0 {
            return Self {
                ttr: 0.0,
                root_ttr: 0.0,
                log_ttr: 0.0,
            };
        }
        let (v, n) = (types as f64, tokens as f64);
        Self {
            ttr: v / n,
            root_ttr: v / n.sqrt(),
            // ln(1) = 0 in the denominator; a single token has no spread.
            log_ttr: if tokens > 1 { v.ln() / n.ln() } else { 0.0 },
        }
    }
}

fn distinct(tokens: &[String]) -> usize {
    tokens.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

fn single_or_empty(available: bool, value: f64) -> Distribution {
    if available {
        Distribution::from_values(vec![value])
    } else {
        Distribution::empty()
    }
}

/// Combines [`TtrResult`]s from several texts into group statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtrAggregator;

impl TtrAggregator {
    /// Create an aggregator.
    pub const fn new() -> Self {
        Self
    }

    /// Aggregate `results` under `group_id`.
    ///
    /// Fails with [`AnalysisError::EmptyAggregate`] when `results` is empty.
    /// A single result yields `ttr_std == 0.0`.
    pub fn aggregate(&self, results: &[TtrResult], group_id: &str) -> AnalysisResult<TtrAggregate> {
        if results.is_empty() {
            return Err(AnalysisError::EmptyAggregate);
        }

        let ttrs: Vec<f64> = results.iter().map(|r| r.ttr).collect();
        let roots: Vec<f64> = results.iter().map(|r| r.root_ttr).collect();
        let logs: Vec<f64> = results.iter().map(|r| r.log_ttr).collect();
        let ttr_mean = mean(&ttrs);

        Ok(TtrAggregate {
            group_id: group_id.to_string(),
            text_count: results.len(),
            total_words: results.iter().map(|r| r.total_words).sum(),
            ttr_mean,
            ttr_std: population_std(&ttrs, ttr_mean),
            ttr_min: ttrs.iter().copied().fold(f64::INFINITY, f64::min),
            ttr_max: ttrs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            root_ttr_mean: mean(&roots),
            log_ttr_mean: mean(&logs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn ttr(text: &str) -> TtrResult {
        compute_ttr(text, None, DEFAULT_CHUNK_SIZE).unwrap()
    }

    /// `n` tokens cycling through `vocab` distinct words.
    fn cycled(n: usize, vocab: usize) -> String {
        (0..n)
            .map(|i| format!("w{}", i % vocab))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn empty_text_is_all_zero() {
        let r = ttr("");
        assert_eq!(r.total_words, 0);
        assert_eq!(r.unique_words, 0);
        assert_eq!(r.ttr, 0.0);
        assert_eq!(r.root_ttr, 0.0);
        assert_eq!(r.log_ttr, 0.0);
        assert_eq!(r.sttr, 0.0);
        assert_eq!(r.chunk_count, 1);
        assert!(r.ttr_dist.is_empty());
    }

    #[test]
    fn whitespace_only_matches_empty() {
        let (blank, empty) = (ttr("  \n\t "), ttr(""));
        assert_eq!(blank.total_words, empty.total_words);
        assert_eq!(blank.ttr, empty.ttr);
        assert_eq!(blank.chunk_count, empty.chunk_count);
        assert_eq!(blank.metadata, empty.metadata);
    }

    #[test]
    fn case_insensitive_types() {
        let r = ttr("The cat and THE dog");
        assert_eq!(r.total_words, 5);
        assert_eq!(r.unique_words, 4);
        assert!((r.ttr - 0.8).abs() < EPSILON);
    }

    #[test]
    fn root_and_log_ttr() {
        let r = ttr("a b c a");
        assert!((r.root_ttr - 3.0 / 2.0).abs() < EPSILON);
        assert!((r.log_ttr - 3f64.ln() / 4f64.ln()).abs() < EPSILON);
    }

    #[test]
    fn log_ttr_special_cases() {
        assert_eq!(ttr("alone").log_ttr, 0.0);
        assert_eq!(ttr("two words").log_ttr, 1.0);
    }

    #[test]
    fn short_text_has_no_sttr() {
        let r = ttr(&cycled(500, 100));
        assert_eq!(r.sttr, 0.0);
        assert_eq!(r.delta_std, 0.0);
        assert_eq!(r.metadata["sttr_available"].as_bool(), Some(false));
        assert_eq!(r.metadata["delta_std_available"].as_bool(), Some(false));
        assert!(r.sttr_dist.is_empty());
    }

    #[test]
    fn long_text_has_sttr_over_complete_chunks() {
        // Three complete chunks of 1000 with 250 types each, plus a short tail.
        let r = ttr(&cycled(3100, 250));
        assert_eq!(r.chunk_count, 4);
        assert_eq!(r.ttr_dist.len(), 4);
        assert!((r.sttr - 0.25).abs() < EPSILON);
        assert_eq!(r.delta_std, 0.0);
        assert_eq!(r.metadata["sttr_available"].as_bool(), Some(true));
        assert_eq!(r.metadata["delta_std_available"].as_bool(), Some(true));
        assert_eq!(r.sttr_dist.values, vec![r.sttr]);
    }

    #[test]
    fn chunk_count_rounds_up() {
        let r = compute_ttr(&cycled(25, 5), None, 10).unwrap();
        assert_eq!(r.chunk_count, 3);
        assert_eq!(r.chunk_size, 10);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = compute_ttr("a b", None, 0).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidParameter {
                name: "chunk_size",
                value: 0
            }
        );
    }

    #[test]
    fn metadata_records_text_id_and_source() {
        let r = compute_ttr("a b", Some("doc-1"), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(r.metadata["text_id"].as_str(), Some("doc-1"));
        assert_eq!(r.metadata["source"].as_str(), Some("lexdiv"));
        assert_eq!(ttr("a").metadata["text_id"].as_str(), Some(""));
    }

    #[test]
    fn aggregate_empty_fails() {
        assert_eq!(
            TtrAggregator::new().aggregate(&[], "g"),
            Err(AnalysisError::EmptyAggregate)
        );
    }

    #[test]
    fn aggregate_single_has_zero_std() {
        let agg = TtrAggregator::new().aggregate(&[ttr("a b a")], "solo").unwrap();
        assert_eq!(agg.text_count, 1);
        assert_eq!(agg.ttr_std, 0.0);
        assert_eq!(agg.ttr_min, agg.ttr_max);
        assert_eq!(agg.group_id, "solo");
    }

    #[test]
    fn aggregate_combines_results() {
        let results = [ttr("a b c d"), ttr("a a b b")];
        let agg = TtrAggregator::new().aggregate(&results, "pair").unwrap();
        assert_eq!(agg.total_words, 8);
        assert!((agg.ttr_mean - 0.75).abs() < EPSILON);
        assert!((agg.ttr_std - 0.25).abs() < EPSILON);
        assert_eq!(agg.ttr_min, 0.5);
        assert_eq!(agg.ttr_max, 1.0);
    }
}
