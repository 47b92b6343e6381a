//! Dictionary of valid words
//!
//! An immutable, ordered word list loaded once at startup. Supports uniform
//! random selection by index and exact membership tests.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::error::DictionaryError;
use crate::ports::RandomSource;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Ordered word list with a hash index for membership tests
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any sequence of words, keeping their order
    ///
    /// # Examples
    /// ```
    /// use wordle_server::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate"]);
    /// assert!(dictionary.contains("crane"));
    /// assert!(!dictionary.contains("CRANE"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Load a newline-delimited word list from disk
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Load` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        loader::load_from_file(path).map(Self::from_words)
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    /// Pick a uniformly random word
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if there is nothing to pick from.
    pub fn pick_random(&self, random: &dyn RandomSource) -> Result<&str, DictionaryError> {
        if self.words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        let i = random.index(self.words.len());
        self.words
            .get(i)
            .map(String::as_str)
            .ok_or(DictionaryError::Empty)
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedRandom, SystemRandom};

    #[test]
    fn pick_random_uses_index() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate"]);

        assert_eq!(dictionary.pick_random(&FixedRandom(0)).unwrap(), "crane");
        assert_eq!(dictionary.pick_random(&FixedRandom(2)).unwrap(), "irate");
    }

    #[test]
    fn pick_random_returns_member() {
        let dictionary = Dictionary::from_words(["crane", "slate", "irate"]);

        for _ in 0..20 {
            let word = dictionary.pick_random(&SystemRandom).unwrap();
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn pick_random_empty_is_error() {
        let dictionary = Dictionary::default();
        assert!(matches!(
            dictionary.pick_random(&SystemRandom),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn contains_is_exact() {
        let dictionary = Dictionary::from_words(["crane"]);

        assert!(dictionary.contains("crane"));
        assert!(!dictionary.contains("Crane"));
        assert!(!dictionary.contains("cran"));
        assert!(!dictionary.contains(" crane"));
    }

    #[test]
    fn from_words_keeps_order_and_duplicates() {
        let dictionary = Dictionary::from_words(["slate", "crane", "slate"]);
        assert_eq!(dictionary.words(), ["slate", "crane", "slate"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn embedded_matches_const() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        // All words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Dictionary::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Load { .. }));
    }
}
