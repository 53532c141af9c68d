//! Lexical diversity and vocabulary richness.
//!
//! Each measure lives in its own module as a pair of pure functions: a
//! `compute_*` entry point that tokenizes with [`crate::text::tokenize`], and
//! a `*_from_tokens` form for callers that already hold a token sequence.
//! [`run_full_analysis`] tokenizes once and runs any subset of the measures.

pub mod distribution;
pub mod hapax;
pub mod hdd;
pub mod lexicon;
pub mod mattr;
pub mod metadata;
pub mod msttr;
pub mod mtld;
pub mod reports;
pub mod spectrum;
pub mod ttr;
pub mod vocd;
pub mod yule;

use std::collections::HashSet;

pub use distribution::Distribution;
pub use hapax::{compute_hapax_ratios, compute_hapax_with_lexicon_analysis};
pub use hdd::compute_hdd;
pub use lexicon::{Lexicon, WordList};
pub use mattr::compute_mattr;
pub use metadata::{MetaValue, Metadata};
pub use msttr::compute_msttr;
pub use mtld::compute_mtld;
pub use reports::{
    FullLexicalReport, HapaxLexiconResult, HapaxResult, HddResult, LexiconCategories, MattrResult,
    MsttrResult, MtldResult, TtrAggregate, TtrResult, VocdResult, YuleResult,
};
pub use spectrum::FrequencySpectrum;
pub use ttr::{TtrAggregator, compute_ttr};
pub use vocd::{VocdParams, compute_vocd_d};
pub use yule::compute_yule;

use crate::config::Config;
use crate::error::{AnalysisError, AnalysisResult};
use crate::markdown;
use crate::ngrams;
use crate::text::Tokenizer;

/// All available check names.
pub const ALL_CHECKS: &[&str] = &[
    "ttr", "mtld", "yule", "hapax", "mattr", "msttr", "hdd", "vocd", "entropy",
];

/// Parameters for [`run_full_analysis`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Strip markdown formatting before tokenizing.
    pub strip_md: bool,
    /// Tokenizer applied to the input.
    pub tokenizer: Tokenizer,
    /// Checks to run; `None` runs all of [`ALL_CHECKS`].
    pub checks: Option<Vec<String>>,
    /// TTR chunk size.
    pub ttr_chunk_size: usize,
    /// MTLD threshold.
    pub mtld_threshold: f64,
    /// MATTR window size.
    pub mattr_window: usize,
    /// MSTTR segment size.
    pub msttr_segment: usize,
    /// HD-D sample size.
    pub hdd_sample_size: usize,
    /// voc-D sampling parameters.
    pub vocd: VocdParams,
    /// N-gram width for entropy.
    pub ngram_size: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            strip_md: false,
            tokenizer: Tokenizer::default(),
            checks: None,
            ttr_chunk_size: ttr::DEFAULT_CHUNK_SIZE,
            mtld_threshold: mtld::DEFAULT_THRESHOLD,
            mattr_window: mattr::DEFAULT_WINDOW_SIZE,
            msttr_segment: msttr::DEFAULT_SEGMENT_SIZE,
            hdd_sample_size: hdd::DEFAULT_SAMPLE_SIZE,
            vocd: VocdParams::default(),
            ngram_size: 2,
        }
    }
}

impl AnalysisOptions {
    /// Options carrying the engine parameters from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            strip_md: false,
            tokenizer: config.tokenizer,
            checks: None,
            ttr_chunk_size: config.ttr_chunk_size,
            mtld_threshold: config.mtld_threshold,
            mattr_window: config.mattr_window,
            msttr_segment: config.msttr_segment,
            hdd_sample_size: config.hdd_sample_size,
            vocd: config.vocd,
            ngram_size: config.ngram_size,
        }
    }
}

/// Run the selected lexical checks over one tokenization of `input`.
///
/// Unknown check names fail with [`AnalysisError::UnknownCheck`] before any
/// work is done. Empty input is not an error; each check reports its own
/// degenerate-data convention.
#[tracing::instrument(skip(input, options), fields(text_len = input.len(), strip_md = options.strip_md))]
pub fn run_full_analysis(
    input: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<FullLexicalReport> {
    let enabled: HashSet<&str> = match &options.checks {
        None => ALL_CHECKS.iter().copied().collect(),
        Some(list) => {
            for name in list {
                if !ALL_CHECKS.contains(&name.as_str()) {
                    return Err(AnalysisError::UnknownCheck {
                        name: name.clone(),
                        available: ALL_CHECKS.join(", "),
                    });
                }
            }
            list.iter().map(String::as_str).collect()
        }
    };

    let prose = if options.strip_md {
        markdown::strip_to_prose(input)
    } else {
        input.to_string()
    };
    let tokens = options.tokenizer.tokenize(&prose);
    let spectrum = FrequencySpectrum::from_tokens(&tokens);
    tracing::debug!(tokens = tokens.len(), checks = enabled.len(), "running lexical checks");

    let ttr = if enabled.contains("ttr") {
        Some(ttr::ttr_from_tokens(&tokens, None, options.ttr_chunk_size)?)
    } else {
        None
    };

    let mtld = if enabled.contains("mtld") {
        Some(mtld::mtld_from_tokens(&tokens, options.mtld_threshold)?)
    } else {
        None
    };

    let yule = enabled
        .contains("yule")
        .then(|| yule::yule_from_tokens(&tokens));

    let hapax = enabled
        .contains("hapax")
        .then(|| hapax::hapax_from_tokens(&tokens));

    let mattr = if enabled.contains("mattr") {
        Some(mattr::mattr_from_tokens(&tokens, options.mattr_window)?)
    } else {
        None
    };

    let msttr = if enabled.contains("msttr") {
        Some(msttr::msttr_from_tokens(&tokens, options.msttr_segment)?)
    } else {
        None
    };

    let hdd = if enabled.contains("hdd") {
        Some(hdd::hdd_from_tokens(&tokens, options.hdd_sample_size)?)
    } else {
        None
    };

    let vocd = if enabled.contains("vocd") {
        Some(vocd::vocd_from_tokens(&tokens, &options.vocd)?)
    } else {
        None
    };

    let entropy = if enabled.contains("entropy") {
        Some(ngrams::entropy_from_tokens(&tokens, options.ngram_size)?)
    } else {
        None
    };

    Ok(FullLexicalReport {
        token_count: spectrum.token_count(),
        vocabulary_size: spectrum.vocabulary_size(),
        ttr,
        mtld,
        yule,
        hapax,
        mattr,
        msttr,
        hdd,
        vocd,
        entropy,
    })
}
