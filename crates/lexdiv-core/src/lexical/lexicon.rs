//! Word-membership lookups used to categorize hapax legomena.

use std::collections::HashSet;

use camino::Utf8Path;

/// A set of known words.
pub trait Lexicon {
    /// Whether `word` (already lower-cased) is known.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// In-memory lexicon backed by a hash set.
///
/// Entries are lower-cased and trimmed on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build a word list from any iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a newline-delimited word list. Lines starting with `#` are ignored.
    #[tracing::instrument]
    pub fn from_file(path: &Utf8Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_words(content.lines().filter(|l| !l.trim_start().starts_with('#')));
        tracing::debug!(words = list.len(), "loaded word list");
        Ok(list)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
