//! Hypergeometric distribution D (McCarthy & Jarvis, 2007).
//!
//! For each type of frequency `f`, the probability that it appears at least
//! once in a random draw of `s` tokens without replacement from `N` is
//!
//! ```text
//! P = 1 - C(N - f, s) / C(N, s) = 1 - Π_{i<s} (N - f - i) / (N - i)
//! ```
//!
//! The sum of these probabilities is the expected type count of a sample;
//! HD-D is that expectation divided by `s`.

use super::metadata::metadata;
use super::reports::HddResult;
use super::spectrum::FrequencySpectrum;
use crate::error::{AnalysisResult, require_positive};
use crate::text;

/// Conventional sample size.
pub const DEFAULT_SAMPLE_SIZE: usize = 42;

/// Compute HD-D for `text`.
///
/// When the text has fewer tokens than `sample_size`, the whole text is the
/// sample. Empty text yields a NaN score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_hdd(text: &str, sample_size: usize) -> AnalysisResult<HddResult> {
    hdd_from_tokens(&text::tokenize(text), sample_size)
}

/// Compute HD-D over an already tokenized sequence.
pub fn hdd_from_tokens(tokens: &[String], sample_size: usize) -> AnalysisResult<HddResult> {
    let sample_size = require_positive("sample_size", sample_size)?;
    let spectrum = FrequencySpectrum::from_tokens(tokens);
    let n = spectrum.token_count();
    let v = spectrum.vocabulary_size();

    let effective = sample_size.min(n);
    if n > 0 && effective < sample_size {
        tracing::debug!(n, sample_size, "text shorter than sample, using whole text");
    }

    let (hdd_score, expected_types) = if n == 0 {
        (f64::NAN, 0.0)
    } else {
        // Types sharing a frequency share a probability.
        let expected: f64 = spectrum
            .frequency_of_frequencies()
            .into_iter()
            .map(|(f, vm)| vm as f64 * presence_probability(n, f, effective))
            .sum();
        (expected / effective as f64, expected)
    };

    Ok(HddResult {
        hdd_score,
        expected_types,
        sample_size,
        type_count: v,
        token_count: n,
        metadata: metadata! {
            "total_token_count" => n,
            "total_type_count" => v,
            "simple_ttr" => if n == 0 { f64::NAN } else { v as f64 / n as f64 },
            "effective_sample_size" => effective,
        },
    })
}

/// Probability that a type with frequency `f` appears in a sample of `s`
/// drawn without replacement from `n` tokens.
fn presence_probability(n: usize, f: usize, s: usize) -> f64 {
    let rest = n - f;
    if rest < s {
        return 1.0;
    }
    let mut absent = 1.0;
    for i in 0..s {
        absent *= (rest - i) as f64 / (n - i) as f64;
    }
    1.0 - absent
}
