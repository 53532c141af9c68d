//! Yule's characteristic K and its inverse I.
//!
//! Both are computed from the frequency spectrum with `S2 = Σ m²·V(m)`:
//!
//! - `K = 10⁴ · (S2 − N) / N²` (higher means more repetitive)
//! - `I = V² / (S2 − N)` (higher means more diverse)
//!
//! Empty text makes both NaN. When no token repeats, `S2 == N`: K is
//! exactly `0.0` and I is NaN.

use super::metadata::metadata;
use super::reports::YuleResult;
use super::spectrum::FrequencySpectrum;
use crate::text;

/// Compute Yule's K and I for `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_yule(text: &str) -> YuleResult {
    yule_from_tokens(&text::tokenize(text))
}

/// Compute Yule's K and I over an already tokenized sequence.
pub fn yule_from_tokens(tokens: &[String]) -> YuleResult {
    let spectrum = FrequencySpectrum::from_tokens(tokens);
    let n = spectrum.token_count();
    let v = spectrum.vocabulary_size();

    let (yule_k, yule_i) = if n == 0 {
        (f64::NAN, f64::NAN)
    } else {
        // S2 >= N always; the difference is exact in integers.
        let excess = (spectrum.sum_m2_vm() - n as u128) as f64;
        let n = n as f64;
        let k = 1e4 * excess / (n * n);
        let i = if excess == 0.0 {
            f64::NAN
        } else {
            (v as f64 * v as f64) / excess
        };
        (k, i)
    };

    YuleResult {
        yule_k,
        yule_i,
        metadata: metadata! {
            "token_count" => n,
            "vocabulary_size" => v,
        },
    }
}
