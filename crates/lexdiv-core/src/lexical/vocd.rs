//! voc-D (Malvern, Richards, Chipere & Durán, 2004).
//!
//! Random samples of 35..=50 tokens are drawn without replacement and their
//! mean TTR is recorded per sample size. D is the single parameter of the
//! curve
//!
//! ```text
//! TTR(n) = (D / n) · (sqrt(1 + 2n / D) − 1)
//! ```
//!
//! that best fits those means in the least-squares sense. Higher D means a
//! more diverse vocabulary.
//!
//! Sampling uses a seeded [`StdRng`], so the same seed and input always give
//! the same D.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::metadata::metadata;
use super::reports::VocdResult;
use crate::error::{AnalysisResult, require_positive};
use crate::text;

/// Number of additional sample sizes after the smallest (35..=50 by default).
const SAMPLE_SIZE_SPAN: usize = 15;

/// Search interval for D.
const D_MIN: f64 = 0.1;
const D_MAX: f64 = 1000.0;
const SEARCH_TOLERANCE: f64 = 1e-6;

/// Sampling parameters for voc-D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VocdParams {
    /// Smallest sample size; sizes run up to `sample_size + 15`.
    pub sample_size: usize,
    /// Random samples drawn per sample size.
    pub num_samples: usize,
    /// Texts shorter than this are not scored.
    pub min_tokens: usize,
    /// Seed for the sampling RNG.
    pub random_seed: u64,
}

impl Default for VocdParams {
    fn default() -> Self {
        Self {
            sample_size: 35,
            num_samples: 100,
            min_tokens: 100,
            random_seed: 42,
        }
    }
}

/// Compute voc-D for `text`.
///
/// Texts with fewer than `min_tokens` tokens yield NaN for D and R², with a
/// `warning` in metadata.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_vocd_d(text: &str, params: &VocdParams) -> AnalysisResult<VocdResult> {
    vocd_from_tokens(&text::tokenize(text), params)
}

/// Compute voc-D over an already tokenized sequence.
pub fn vocd_from_tokens(tokens: &[String], params: &VocdParams) -> AnalysisResult<VocdResult> {
    require_positive("sample_size", params.sample_size)?;
    require_positive("num_samples", params.num_samples)?;

    let n = tokens.len();
    let type_count = tokens.iter().map(String::as_str).collect::<HashSet<_>>().len();
    let simple_ttr = if n == 0 { f64::NAN } else { type_count as f64 / n as f64 };

    let last_size = params.sample_size.saturating_add(SAMPLE_SIZE_SPAN);
    let sizes: Vec<usize> = (params.sample_size..=last_size)
        .filter(|&size| size <= n)
        .collect();

    if n < params.min_tokens || sizes.is_empty() {
        tracing::debug!(n, min_tokens = params.min_tokens, "text too short for voc-D");
        return Ok(VocdResult {
            d_parameter: f64::NAN,
            curve_fit_r_squared: f64::NAN,
            sample_count: 0,
            optimal_sample_size: params.sample_size,
            metadata: metadata! {
                "total_token_count" => n,
                "total_type_count" => type_count,
                "simple_ttr" => simple_ttr,
                "random_seed" => params.random_seed,
                "warning" => format!(
                    "Text has {n} tokens; voc-D needs at least {}",
                    params.min_tokens.max(params.sample_size)
                ),
            },
        });
    }

    let mut rng = StdRng::seed_from_u64(params.random_seed);
    let mean_ttrs: Vec<f64> = sizes
        .iter()
        .map(|&size| mean_sample_ttr(tokens, size, params.num_samples, &mut rng))
        .collect();

    let points: Vec<(f64, f64)> = sizes
        .iter()
        .zip(&mean_ttrs)
        .map(|(&size, &ttr)| (size as f64, ttr))
        .collect();

    let d = fit_d(&points);
    let r_squared = r_squared(&points, d);

    let optimal_sample_size = points
        .iter()
        .zip(&sizes)
        .map(|(&(x, y), &size)| ((model_ttr(x, d) - y).abs(), size))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map_or(params.sample_size, |(_, size)| size);

    Ok(VocdResult {
        d_parameter: d,
        curve_fit_r_squared: r_squared,
        sample_count: sizes.len() * params.num_samples,
        optimal_sample_size,
        metadata: metadata! {
            "total_token_count" => n,
            "total_type_count" => type_count,
            "simple_ttr" => simple_ttr,
            "sample_sizes_used" => sizes,
            "mean_ttrs_per_sample_size" => mean_ttrs,
            "random_seed" => params.random_seed,
            "curve_equation" => format!("TTR = ({d:.4} / N) * (sqrt(1 + 2N / {d:.4}) - 1)"),
        },
    })
}

fn mean_sample_ttr(tokens: &[String], size: usize, samples: usize, rng: &mut StdRng) -> f64 {
    let mut total = 0.0;
    for _ in 0..samples {
        let picked = index::sample(rng, tokens.len(), size);
        let types: HashSet<&str> = picked.iter().map(|i| tokens[i].as_str()).collect();
        total += types.len() as f64 / size as f64;
    }
    total / samples as f64
}

/// Theoretical TTR at sample size `n` for parameter `d`.
fn model_ttr(n: f64, d: f64) -> f64 {
    (d / n) * ((1.0 + 2.0 * n / d).sqrt() - 1.0)
}

fn sum_squared_error(points: &[(f64, f64)], d: f64) -> f64 {
    points
        .iter()
        .map(|&(x, y)| {
            let e = model_ttr(x, d) - y;
            e * e
        })
        .sum()
}

/// Golden-section search for the D minimizing squared error.
fn fit_d(points: &[(f64, f64)]) -> f64 {
    let ratio = (5f64.sqrt() - 1.0) / 2.0;
    let (mut lo, mut hi) = (D_MIN, D_MAX);
    let mut c = hi - ratio * (hi - lo);
    let mut d = lo + ratio * (hi - lo);
    let mut fc = sum_squared_error(points, c);
    let mut fd = sum_squared_error(points, d);

    while hi - lo > SEARCH_TOLERANCE {
        if fc < fd {
            hi = d;
            d = c;
            fd = fc;
            c = hi - ratio * (hi - lo);
            fc = sum_squared_error(points, c);
        } else {
            lo = c;
            c = d;
            fc = fd;
            d = lo + ratio * (hi - lo);
            fd = sum_squared_error(points, d);
        }
    }

    (lo + hi) / 2.0
}

/// Coefficient of determination; NaN when the observed TTRs do not vary.
fn r_squared(points: &[(f64, f64)], d: f64) -> f64 {
    let mean = points.iter().map(|p| p.1).sum::<f64>() / points.len() as f64;
    let total: f64 = points.iter().map(|&(_, y)| (y - mean) * (y - mean)).sum();
    if total == 0.0 {
        return f64::NAN;
    }
    1.0 - sum_squared_error(points, d) / total
}
