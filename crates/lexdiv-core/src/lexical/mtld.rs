//! Measure of Textual Lexical Diversity (McCarthy & Jarvis, 2010).
//!
//! MTLD is the mean length of sequential token runs that keep a running TTR
//! above a threshold. Each pass walks the sequence once, closing a "factor"
//! whenever the running TTR falls to or below the threshold. The leftover
//! run at the end of the text contributes a partial factor of
//! `(1 - ttr) / (1 - threshold)`.
//!
//! The score is computed left-to-right and right-to-left; the headline
//! value is their mean.

use std::collections::HashSet;

use super::metadata::metadata;
use super::reports::MtldResult;
use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Conventional threshold from the literature.
pub const DEFAULT_THRESHOLD: f64 = 0.72;

/// Compute MTLD for `text`.
///
/// `threshold` must lie in the open interval `(0, 1)`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_mtld(text: &str, threshold: f64) -> AnalysisResult<MtldResult> {
    validate_threshold(threshold)?;
    mtld_from_tokens(&text::tokenize(text), threshold)
}

/// Compute MTLD over an already tokenized sequence.
pub fn mtld_from_tokens(tokens: &[String], threshold: f64) -> AnalysisResult<MtldResult> {
    validate_threshold(threshold)?;

    let forward = Pass::run(tokens.iter(), threshold);
    let backward = Pass::run(tokens.iter().rev(), threshold);

    let mtld_forward = forward.score(tokens.len());
    let mtld_backward = backward.score(tokens.len());

    Ok(MtldResult {
        mtld_forward,
        mtld_backward,
        mtld_average: (mtld_forward + mtld_backward) / 2.0,
        metadata: metadata! {
            "token_count" => tokens.len(),
            "threshold" => threshold,
            "forward_factors" => forward.factors,
            "backward_factors" => backward.factors,
        },
    })
}

fn validate_threshold(threshold: f64) -> AnalysisResult<()> {
    // Written so NaN fails too.
    if threshold > 0.0 && threshold < 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidThreshold { value: threshold })
    }
}

/// Factor count accumulated by one directional pass.
#[derive(Debug, Clone, Copy)]
struct Pass {
    factors: f64,
}

impl Pass {
    fn run<'a>(tokens: impl Iterator<Item = &'a String>, threshold: f64) -> Self {
        let mut factors = 0.0;
        let mut types: HashSet<&str> = HashSet::new();
        let mut count = 0usize;

        for token in tokens {
            count += 1;
            types.insert(token.as_str());
            if (types.len() as f64 / count as f64) <= threshold {
                factors += 1.0;
                types.clear();
                count = 0;
            }
        }

        if count > 0 {
            let ttr = types.len() as f64 / count as f64;
            factors += (1.0 - ttr) / (1.0 - threshold);
        }

        Self { factors }
    }

    /// `N / factors`, or `N` itself when no factor ever accumulated.
    fn score(self, token_count: usize) -> f64 {
        if self.factors > 0.0 {
            token_count as f64 / self.factors
        } else {
            token_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn mtld(text: &str) -> MtldResult {
        compute_mtld(text, DEFAULT_THRESHOLD).unwrap()
    }

    #[test]
    fn empty_text_is_zero() {
        let r = mtld("");
        assert_eq!(r.mtld_forward, 0.0);
        assert_eq!(r.mtld_backward, 0.0);
        assert_eq!(r.mtld_average, 0.0);
        assert_eq!(r.metadata["token_count"].as_usize(), Some(0));
    }

    #[test]
    fn whitespace_only_matches_empty() {
        assert_eq!(mtld(" \t\n "), mtld(""));
    }

    #[test]
    fn single_word_is_one() {
        let r = mtld("hello");
        assert_eq!(r.mtld_forward, 1.0);
        assert_eq!(r.mtld_backward, 1.0);
        assert_eq!(r.mtld_average, 1.0);
    }

    #[test]
    fn all_unique_equals_token_count() {
        let r = mtld("one two three four five six seven");
        assert_eq!(r.mtld_forward, 7.0);
        assert_eq!(r.mtld_backward, 7.0);
        assert_eq!(r.mtld_average, 7.0);
    }

    #[test]
    fn average_is_mean_of_directions() {
        let r = mtld("the cat sat on the mat and the dog sat on the log by the door");
        assert_eq!(r.mtld_average, (r.mtld_forward + r.mtld_backward) / 2.0);
    }

    #[test]
    fn repetition_lowers_score() {
        let diverse = mtld("alpha beta gamma delta epsilon zeta eta theta iota kappa");
        let repetitive = mtld("the the the the the the the the the the");
        assert!(repetitive.mtld_average < diverse.mtld_average);
    }

    #[test]
    fn factor_closes_at_threshold() {
        // "a b a b": running TTR 1, 1, 2/3, 1/2. With threshold 0.5 the
        // factor closes exactly at the fourth token.
        let r = compute_mtld("a b a b", 0.5).unwrap();
        assert_eq!(r.metadata["forward_factors"].as_f64(), Some(1.0));
        assert!((r.mtld_forward - 4.0).abs() < EPSILON);
    }

    #[test]
    fn partial_factor_credit() {
        // "a a b": TTR 1 then 1/2 (closes, threshold 0.72), leaving "b" with
        // TTR 1 and zero credit. Forward factors = 1.
        let r = mtld("a a b");
        assert_eq!(r.metadata["forward_factors"].as_f64(), Some(1.0));
        assert!((r.mtld_forward - 3.0).abs() < EPSILON);
        // Backward "b a a": TTR 1, 1, 2/3 (closes). Factors = 1.
        assert!((r.mtld_backward - 3.0).abs() < EPSILON);
    }

    #[test]
    fn unterminated_run_earns_fractional_credit() {
        // Threshold 0.5: "a b c a" never drops to 0.5 (1, 1, 1, 3/4).
        // Remainder TTR 0.75 earns (1 - 0.75) / 0.5 = 0.5 factors.
        let r = compute_mtld("a b c a", 0.5).unwrap();
        assert!((r.mtld_forward - 8.0).abs() < EPSILON);
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(
                matches!(
                    compute_mtld("some text here", bad),
                    Err(AnalysisError::InvalidThreshold { .. })
                ),
                "threshold {bad} should be rejected"
            );
        }
    }

    #[test]
    fn valid_thresholds_succeed() {
        for ok in [0.5, 0.72] {
            let r = compute_mtld("some text here", ok).unwrap();
            assert_eq!(r.metadata["threshold"].as_f64(), Some(ok));
        }
    }

    #[test]
    fn threshold_validated_before_empty_check() {
        assert!(compute_mtld("", 1.0).is_err());
    }
}
