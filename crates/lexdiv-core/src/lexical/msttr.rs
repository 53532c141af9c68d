//! Mean segmental type-token ratio (Johnson, 1944).
//!
//! The token sequence is cut into non-overlapping segments of fixed size;
//! MSTTR is the mean TTR over the complete segments. A short tail is
//! discarded rather than padded.

use std::collections::HashSet;

use super::distribution::Distribution;
use super::metadata::metadata;
use super::reports::MsttrResult;
use crate::error::{AnalysisResult, require_positive};
use crate::text;

/// Conventional segment size.
pub const DEFAULT_SEGMENT_SIZE: usize = 100;

/// Compute MSTTR for `text`.
///
/// Texts shorter than one segment are scored as a single whole-text segment
/// (`whole_text_segment = true`). Empty text yields a NaN score.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_msttr(text: &str, segment_size: usize) -> AnalysisResult<MsttrResult> {
    msttr_from_tokens(&text::tokenize(text), segment_size)
}

/// Compute MSTTR over an already tokenized sequence.
pub fn msttr_from_tokens(tokens: &[String], segment_size: usize) -> AnalysisResult<MsttrResult> {
    let requested = require_positive("segment_size", segment_size)?;
    let n = tokens.len();
    let whole_text_segment = n > 0 && n < requested;
    if whole_text_segment {
        tracing::debug!(n, requested, "text shorter than segment, using whole text");
    }
    let size = if whole_text_segment { n } else { requested };

    let segment_ttrs: Vec<f64> = tokens
        .chunks_exact(size)
        .map(|segment| {
            let types: HashSet<&str> = segment.iter().map(String::as_str).collect();
            types.len() as f64 / size as f64
        })
        .collect();

    let tokens_used = segment_ttrs.len() * size;
    let dist = Distribution::from_values(segment_ttrs);

    Ok(MsttrResult {
        msttr_score: dist.mean,
        segment_size: size,
        segment_count: dist.len(),
        ttr_std_dev: dist.std,
        min_ttr: dist.min,
        max_ttr: dist.max,
        metadata: metadata! {
            "total_token_count" => n,
            "tokens_used" => tokens_used,
            "tokens_discarded" => n - tokens_used,
            "whole_text_segment" => whole_text_segment,
        },
        segment_ttrs: dist.values,
    })
}
