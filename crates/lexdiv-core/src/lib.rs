//! Core library for lexdiv.
//!
//! Lexical diversity, vocabulary richness, and n-gram entropy statistics for
//! a single text. Every engine is a pure function of a token sequence; the
//! `lexdiv` CLI and any downstream consumers share these types.
//!
//! # Modules
//!
//! - [`lexical`] - TTR family, MTLD, Yule's K/I, hapax statistics, MATTR,
//!   MSTTR, HD-D, voc-D, and the full-analysis runner
//! - [`ngrams`] - Shannon entropy and perplexity of word/character n-grams
//! - [`text`] - Tokenizer collaborator
//! - [`markdown`] - Markdown-to-prose input preparation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`nonfinite`] - JSON encoding for NaN and infinite statistics
//!
//! # Quick Start
//!
//! ```
//! use lexdiv_core::lexical::{compute_mtld, compute_ttr};
//!
//! let text = "the cat sat on the mat and the dog sat on the log";
//! let ttr = compute_ttr(text, None, 1000).unwrap();
//! assert_eq!(ttr.total_words, 13);
//!
//! let mtld = compute_mtld(text, 0.72).unwrap();
//! assert!(mtld.mtld_average > 0.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod lexical;
pub mod markdown;
pub mod ngrams;
pub mod nonfinite;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexical::{AnalysisOptions, FullLexicalReport, run_full_analysis};
pub use text::Tokenizer;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
