//! Formatting utilities for terminal output

use crate::core::{LetterResult, Outcome};
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterResult]) -> String {
    feedback.iter().map(|r| r.result.to_emoji()).collect()
}

/// Render one guessed letter as an upper-case tile coloured by its outcome
#[must_use]
pub fn letter_tile(result: &LetterResult) -> ColoredString {
    let tile = format!(" {} ", result.letter.to_ascii_uppercase());
    match result.result {
        Outcome::Correct => tile.black().on_green().bold(),
        Outcome::Present => tile.black().on_yellow().bold(),
        Outcome::Absent => tile.white().on_bright_black(),
    }
}

/// Render a whole feedback row as coloured tiles
#[must_use]
pub fn feedback_tiles(feedback: &[LetterResult]) -> String {
    feedback.iter().map(|r| letter_tile(r).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grade;

    #[test]
    fn emoji_all_absent() {
        let feedback = grade("abcde", "fghij");
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        let feedback = grade("crane", "crane");
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let feedback = grade("abcde", "aecdb");
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟨🟩🟩🟨");
    }

    #[test]
    fn tiles_contain_uppercase_letters() {
        colored::control::set_override(false);
        let feedback = grade("crane", "slate");
        assert_eq!(feedback_tiles(&feedback), " S  L  A  T  E ");
    }
}
