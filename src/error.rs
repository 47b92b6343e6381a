//! Error types for dictionary and game operations.

use std::path::PathBuf;

/// Dictionary loading and selection errors.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Word list could not be read. Fatal at startup.
    #[error("Failed to load word list from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No words available to pick a solution from.
    #[error("Dictionary is empty")]
    Empty,
}

impl DictionaryError {
    /// Create a Load error with the offending path.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}

/// Game engine errors surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No game with this id exists.
    #[error("Game not found: {0}")]
    NotFound(String),

    /// Guess is not a dictionary word. The game is left unchanged.
    #[error("{0} is not a valid word")]
    InvalidWord(String),

    /// A game could not be created because the dictionary has no words.
    #[error("Dictionary is empty")]
    EmptyDictionary,
}

impl GameError {
    /// Create a NotFound error for a game id.
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    /// Check if this is a NotFound error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_word_message() {
        let err = GameError::InvalidWord("zzzzz".to_string());
        assert_eq!(err.to_string(), "zzzzz is not a valid word");
    }

    #[test]
    fn load_error_mentions_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = DictionaryError::load("words.txt", io);
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn not_found_helper() {
        assert!(GameError::not_found("abc").is_not_found());
        assert!(!GameError::EmptyDictionary.is_not_found());
    }
}
