//! Tokenization.
//!
//! Every engine consumes the token sequence produced here; none of them
//! splits text on its own. Tokens are case-folded so `"The"` and `"the"` are
//! the same type.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Letters and digits, allowing inner apostrophes and hyphens ("don't", "well-known").
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\x{2019}-][\p{L}\p{N}]+)*").expect("valid regex")
});

/// Tokenizer policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Tokenizer {
    /// Split on Unicode whitespace; punctuation stays attached to words.
    #[default]
    Whitespace,
    /// Extract runs of letters and digits; punctuation is dropped.
    Words,
}

impl Tokenizer {
    /// Returns the tokenizer name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Words => "words",
        }
    }

    /// Tokenize `text` under this policy, lower-casing every token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            Self::Whitespace => text.split_whitespace().map(str::to_lowercase).collect(),
            Self::Words => WORD_PATTERN
                .find_iter(text)
                .map(|m| m.as_str().to_lowercase())
                .collect(),
        }
    }
}

impl std::fmt::Display for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenize with the default (whitespace) policy.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_splits_and_folds_case() {
        assert_eq!(tokenize("The cat  THE\tcat\n"), vec!["the", "cat", "the", "cat"]);
    }

    #[test]
    fn whitespace_keeps_punctuation() {
        assert_eq!(tokenize("Hello, world!"), vec!["hello,", "world!"]);
    }

    #[test]
    fn empty_and_whitespace_only_are_equivalent() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
        assert!(Tokenizer::Words.tokenize("  ... !! ").is_empty());
    }

    #[test]
    fn words_strips_punctuation() {
        let words = Tokenizer::Words.tokenize("Hello, world! It's a well-known test.");
        assert_eq!(words, vec!["hello", "world", "it's", "a", "well-known", "test"]);
    }

    #[test]
    fn words_handles_unicode_letters() {
        let words = Tokenizer::Words.tokenize("Café naïve—résumé");
        assert_eq!(words, vec!["café", "naïve", "résumé"]);
    }

    #[test]
    fn tokenizer_display() {
        assert_eq!(Tokenizer::Whitespace.to_string(), "whitespace");
        assert_eq!(Tokenizer::Words.to_string(), "words");
    }
}
