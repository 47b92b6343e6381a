//! Word list loading utilities
//!
//! Reads newline-delimited word lists. Lines are taken as-is apart from line
//! terminators; length and case are not validated.

use crate::error::DictionaryError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError::Load` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_server::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/five_letter_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DictionaryError::load(path, e))?;

    Ok(words_from_str(&content))
}

/// Split newline-delimited text into words
///
/// `\r\n` endings are handled and blank lines are skipped; anything else
/// passes through untouched.
///
/// # Examples
/// ```
/// use wordle_server::dictionary::loader::words_from_str;
///
/// let words = words_from_str("crane\r\nslate\n\n");
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_str_keeps_order() {
        let words = words_from_str("crane\nslate\nirate");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_str_passes_garbage_through() {
        // No validation at load time
        let words = words_from_str("crane\ntoolong\nABC\n");
        assert_eq!(words, vec!["crane", "toolong", "ABC"]);
    }

    #[test]
    fn words_from_str_skips_trailing_newline() {
        let words = words_from_str("crane\nslate\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane").unwrap();
        writeln!(file, "slate").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(err, DictionaryError::Load { ref path, .. } if path == &missing));
    }
}
