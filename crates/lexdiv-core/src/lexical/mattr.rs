//! Moving-average type-token ratio (Covington & McFall, 2010).
//!
//! A window of fixed size slides one token at a time; MATTR is the mean TTR
//! over every window position. The window's type counts are updated
//! incrementally, so the whole scan is linear in the token count.

use std::collections::HashMap;

use super::distribution::Distribution;
use super::metadata::metadata;
use super::reports::MattrResult;
use super::spectrum::FrequencySpectrum;
use crate::error::{AnalysisResult, require_positive};
use crate::text;

/// Conventional window size.
pub const DEFAULT_WINDOW_SIZE: usize = 50;

/// Compute MATTR for `text`.
///
/// Texts shorter than `window_size` are treated as a single whole-text
/// window (`whole_text_window = true`). Empty text yields a NaN score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_mattr(text: &str, window_size: usize) -> AnalysisResult<MattrResult> {
    mattr_from_tokens(&text::tokenize(text), window_size)
}

/// Compute MATTR over an already tokenized sequence.
pub fn mattr_from_tokens(tokens: &[String], window_size: usize) -> AnalysisResult<MattrResult> {
    let requested = require_positive("window_size", window_size)?;
    let n = tokens.len();
    let whole_text_window = n > 0 && n < requested;
    if whole_text_window {
        tracing::debug!(n, requested, "text shorter than window, using whole text");
    }
    let window = if whole_text_window { n } else { requested };

    let ttrs = window_ttrs(tokens, window);
    let dist = Distribution::from_values(ttrs);
    let type_count = FrequencySpectrum::from_tokens(tokens).vocabulary_size();

    Ok(MattrResult {
        mattr_score: dist.mean,
        window_size: window,
        window_count: dist.len(),
        ttr_std_dev: dist.std,
        min_ttr: dist.min,
        max_ttr: dist.max,
        metadata: metadata! {
            "total_token_count" => n,
            "total_type_count" => type_count,
            "simple_ttr" => if n == 0 { f64::NAN } else { type_count as f64 / n as f64 },
            "first_window_ttr" => dist.values.first().copied().unwrap_or(f64::NAN),
            "last_window_ttr" => dist.values.last().copied().unwrap_or(f64::NAN),
            "whole_text_window" => whole_text_window,
        },
    })
}

/// TTR of every window position, maintained incrementally.
fn window_ttrs(tokens: &[String], window: usize) -> Vec<f64> {
    if tokens.len() < window {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens[..window] {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let size = window as f64;
    let mut ttrs = Vec::with_capacity(tokens.len() - window + 1);
    ttrs.push(counts.len() as f64 / size);

    for (outgoing, incoming) in tokens.iter().zip(&tokens[window..]) {
        if let Some(count) = counts.get_mut(outgoing.as_str()) {
            *count -= 1;
            if *count == 0 {
                counts.remove(outgoing.as_str());
            }
        }
        *counts.entry(incoming.as_str()).or_insert(0) += 1;
        ttrs.push(counts.len() as f64 / size);
    }

    ttrs
}
