//! Result records for the lexical engines.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! CLI JSON output. Non-finite values (NaN, `+inf`) are part of the numeric
//! contract; in JSON they appear as the strings `"NaN"`, `"inf"`, and
//! `"-inf"` (see [`crate::nonfinite`]) and read back unchanged. Check them
//! with `is_nan()` / `is_infinite()` before doing arithmetic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::distribution::Distribution;
use super::metadata::Metadata;
use crate::ngrams::EntropyResult;

/// Combined report produced by [`super::run_full_analysis`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FullLexicalReport {
    /// Tokens in the analyzed sequence.
    pub token_count: usize,
    /// Distinct tokens in the analyzed sequence.
    pub vocabulary_size: usize,
    /// Type-token ratio family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttr: Option<TtrResult>,
    /// Measure of textual lexical diversity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtld: Option<MtldResult>,
    /// Yule's K and I.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yule: Option<YuleResult>,
    /// Hapax statistics, Sichel's S, Honoré's R.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hapax: Option<HapaxResult>,
    /// Moving-average TTR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mattr: Option<MattrResult>,
    /// Mean segmental TTR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msttr: Option<MsttrResult>,
    /// Hypergeometric distribution D.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdd: Option<HddResult>,
    /// voc-D curve fit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocd: Option<VocdResult>,
    /// Word n-gram entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<EntropyResult>,
}

// -- TTR --------------------------------------------------------------------

/// Type-token ratio and its length-normalized variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TtrResult {
    /// Tokens (N).
    pub total_words: usize,
    /// Distinct tokens (V).
    pub unique_words: usize,
    /// `V / N`, in `[0, 1]`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr: f64,
    /// Guiraud's index, `V / sqrt(N)`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub root_ttr: f64,
    /// Herdan's C, `ln V / ln N`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub log_ttr: f64,
    /// Mean TTR over complete chunks (0.0 unless `total_words >= 2000`).
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub sttr: f64,
    /// Standard deviation of complete-chunk TTR (Sigley's delta).
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub delta_std: f64,
    /// Tokens per chunk.
    pub chunk_size: usize,
    /// `ceil(N / chunk_size)`, at least 1.
    pub chunk_count: usize,
    /// Per-chunk TTR.
    pub ttr_dist: Distribution,
    /// Per-chunk root TTR.
    pub root_ttr_dist: Distribution,
    /// Per-chunk log TTR.
    pub log_ttr_dist: Distribution,
    /// STTR (one value when available, else empty).
    pub sttr_dist: Distribution,
    /// Delta std (one value when available, else empty).
    pub delta_std_dist: Distribution,
    /// `text_id`, `source`, `sttr_available`, `delta_std_available`.
    pub metadata: Metadata,
}

/// TTR statistics across a group of texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TtrAggregate {
    /// Caller-supplied group label.
    pub group_id: String,
    /// Number of results combined.
    pub text_count: usize,
    /// Sum of `total_words`.
    pub total_words: usize,
    /// Mean TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_mean: f64,
    /// Population standard deviation of TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_std: f64,
    /// Smallest TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_min: f64,
    /// Largest TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_max: f64,
    /// Mean root TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub root_ttr_mean: f64,
    /// Mean log TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub log_ttr_mean: f64,
}

// -- MTLD -------------------------------------------------------------------

/// Measure of textual lexical diversity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MtldResult {
    /// Left-to-right pass.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub mtld_forward: f64,
    /// Right-to-left pass.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub mtld_backward: f64,
    /// Mean of both passes.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub mtld_average: f64,
    /// `token_count`, `threshold`, `forward_factors`, `backward_factors`.
    pub metadata: Metadata,
}

// -- Yule -------------------------------------------------------------------

/// Yule's characteristic K and its inverse I.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct YuleResult {
    /// Repetitiveness; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub yule_k: f64,
    /// Diversity; NaN for empty text or when no token repeats.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub yule_i: f64,
    /// `token_count`, `vocabulary_size`.
    pub metadata: Metadata,
}

// -- Hapax ------------------------------------------------------------------

/// Hapax legomena statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HapaxResult {
    /// Distinct tokens occurring once (V1).
    pub hapax_count: usize,
    /// `V1 / N`; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub hapax_ratio: f64,
    /// Distinct tokens occurring twice (V2).
    pub dis_hapax_count: usize,
    /// `V2 / N`; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub dis_hapax_ratio: f64,
    /// Sichel's S, `V2 / V`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub sichel_s: f64,
    /// Honoré's R, `100 ln N / (1 - V1/V)`; `+inf` when every type is a hapax.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub honore_r: f64,
    /// `total_token_count`, `total_vocabulary_size`.
    pub metadata: Metadata,
}

/// Hapax words partitioned by lexicon membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LexiconCategories {
    /// In neither lexicon.
    pub neologisms: Vec<String>,
    /// In exactly one lexicon.
    pub rare_words: Vec<String>,
    /// In both lexicons.
    pub common_words: Vec<String>,
    /// Share of hapaxes that are neologisms.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub neologism_ratio: f64,
    /// Share of hapaxes that are rare.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub rare_word_ratio: f64,
    /// Share of hapaxes that are common.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub common_word_ratio: f64,
    /// `total_hapax`, `neologism_count`, `rare_word_count`, `common_word_count`.
    pub metadata: Metadata,
}

/// Hapax statistics plus lexicon categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HapaxLexiconResult {
    /// Base hapax statistics.
    pub hapax: HapaxResult,
    /// Categorized hapax words.
    pub lexicon_analysis: LexiconCategories,
    /// `total_token_count`, `total_vocabulary_size`, `hapax_count`.
    pub metadata: Metadata,
}

// -- Advanced diversity -----------------------------------------------------

/// Moving-average type-token ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MattrResult {
    /// Mean TTR across window positions; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub mattr_score: f64,
    /// Window size actually used.
    pub window_size: usize,
    /// Number of window positions.
    pub window_count: usize,
    /// Population standard deviation of window TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_std_dev: f64,
    /// Smallest window TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub min_ttr: f64,
    /// Largest window TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub max_ttr: f64,
    /// `total_token_count`, `total_type_count`, `simple_ttr`,
    /// `first_window_ttr`, `last_window_ttr`, `whole_text_window`.
    pub metadata: Metadata,
}

/// Mean segmental type-token ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MsttrResult {
    /// Mean segment TTR; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub msttr_score: f64,
    /// Segment size actually used.
    pub segment_size: usize,
    /// Complete segments analyzed.
    pub segment_count: usize,
    /// Population standard deviation of segment TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub ttr_std_dev: f64,
    /// Smallest segment TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub min_ttr: f64,
    /// Largest segment TTR.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub max_ttr: f64,
    /// TTR of each segment, in order.
    #[serde(with = "crate::nonfinite::vec")]
    #[schemars(with = "Vec<crate::nonfinite::Repr>")]
    pub segment_ttrs: Vec<f64>,
    /// `total_token_count`, `tokens_used`, `tokens_discarded`, `whole_text_segment`.
    pub metadata: Metadata,
}

/// Hypergeometric distribution D.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HddResult {
    /// `expected_types / sample_size`, in `[0, 1]`; NaN for empty text.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub hdd_score: f64,
    /// Expected number of distinct types in a random sample.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub expected_types: f64,
    /// Requested sample size.
    pub sample_size: usize,
    /// Distinct tokens.
    pub type_count: usize,
    /// Tokens.
    pub token_count: usize,
    /// `total_token_count`, `total_type_count`, `simple_ttr`, `effective_sample_size`.
    pub metadata: Metadata,
}

/// voc-D curve fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocdResult {
    /// Fitted D; NaN when the text is shorter than `min_tokens`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub d_parameter: f64,
    /// Coefficient of determination of the fit.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub curve_fit_r_squared: f64,
    /// Random samples drawn in total.
    pub sample_count: usize,
    /// Sample size whose mean TTR lies closest to the fitted curve.
    pub optimal_sample_size: usize,
    /// `total_token_count`, `total_type_count`, `simple_ttr`,
    /// `sample_sizes_used`, `mean_ttrs_per_sample_size`, `random_seed`,
    /// `curve_equation`.
    pub metadata: Metadata,
}
