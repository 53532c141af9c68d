//! Error types for lexdiv-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by caller misuse of the statistics engines.
///
/// Degenerate input (empty text, a single token, no repetition) is never an
/// error; engines answer those with `0.0`, `NaN`, or `+inf` per metric.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The MTLD threshold was outside the open interval `(0, 1)`.
    #[error("threshold must be in range (0, 1), got {value}. Common values: 0.72 (default), 0.5-0.8")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },

    /// Aggregation was requested over an empty result list.
    #[error("cannot aggregate an empty list of results")]
    EmptyAggregate,

    /// A size parameter (window, chunk, segment, sample, n) was zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidParameter {
        /// Parameter name as the caller knows it.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// An unknown check name was passed to the full-analysis runner.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available check names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Reject a zero-valued size parameter.
pub(crate) const fn require_positive(name: &'static str, value: usize) -> AnalysisResult<usize> {
    if value == 0 {
        Err(AnalysisError::InvalidParameter { name, value })
    } else {
        Ok(value)
    }
}
