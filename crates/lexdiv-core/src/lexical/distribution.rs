//! Summary statistics over per-chunk values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary of one metric computed over several chunks of a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Distribution {
    /// Per-chunk values, in chunk order.
    #[serde(with = "crate::nonfinite::vec")]
    #[schemars(with = "Vec<crate::nonfinite::Repr>")]
    pub values: Vec<f64>,
    /// Arithmetic mean.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub mean: f64,
    /// Median (mean of the two middle values for even counts).
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub median: f64,
    /// Population standard deviation.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub std: f64,
    /// Smallest value.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub min: f64,
    /// Largest value.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub max: f64,
    /// `max - min`.
    #[serde(with = "crate::nonfinite")]
    #[schemars(with = "crate::nonfinite::Repr")]
    pub range: f64,
}

impl Distribution {
    /// Summarize `values`.
    ///
    /// An empty input yields NaN for mean, median, min, and max, with zero
    /// spread.
    pub fn from_values(values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mean = mean(&values);
        let std = population_std(&values, mean);

        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        Self {
            values,
            mean,
            median,
            std,
            min,
            max,
            range: max - min,
        }
    }

    /// A distribution with no observations.
    pub const fn empty() -> Self {
        Self {
            values: Vec::new(),
            mean: f64::NAN,
            median: f64::NAN,
            std: 0.0,
            min: f64::NAN,
            max: f64::NAN,
            range: 0.0,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a known mean; `0.0` for fewer than
/// two values.
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn empty_is_nan_with_zero_spread() {
        let d = Distribution::from_values(Vec::new());
        assert!(d.is_empty());
        assert!(d.mean.is_nan());
        assert!(d.median.is_nan());
        assert_eq!(d.std, 0.0);
        assert_eq!(d.range, 0.0);
    }

    #[test]
    fn single_value() {
        let d = Distribution::from_values(vec![0.4]);
        assert_eq!(d.mean, 0.4);
        assert_eq!(d.median, 0.4);
        assert_eq!(d.std, 0.0);
        assert_eq!(d.min, 0.4);
        assert_eq!(d.max, 0.4);
    }

    #[test]
    fn known_spread() {
        // Mean 5, population variance 4.
        let d = Distribution::from_values(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((d.mean - 5.0).abs() < EPSILON);
        assert!((d.std - 2.0).abs() < EPSILON);
        assert!((d.median - 4.5).abs() < EPSILON);
        assert_eq!(d.min, 2.0);
        assert_eq!(d.max, 9.0);
        assert_eq!(d.range, 7.0);
    }

    #[test]
    fn preserves_chunk_order() {
        let d = Distribution::from_values(vec![3.0, 1.0, 2.0]);
        assert_eq!(d.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(d.median, 2.0);
    }
}
