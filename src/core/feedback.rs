//! Per-letter feedback representation
//!
//! Each scored letter carries one of three outcomes, encoded on the wire as
//! an integer:
//! - 0 = Absent (letter not in the solution)
//! - 1 = Present (letter in the solution, other position)
//! - 2 = Correct (letter in this exact position)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Absent,
    Present,
    Correct,
}

impl Outcome {
    /// Integer code used in JSON responses
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Emoji square for terminal display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(format!("Invalid outcome code: {other}")),
        }
    }
}

/// A guessed letter paired with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterResult {
    pub letter: char,
    pub result: Outcome,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: char, result: Outcome) -> Self {
        Self { letter, result }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self.result, Outcome::Correct)
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.result.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_codes() {
        assert_eq!(Outcome::Absent.code(), 0);
        assert_eq!(Outcome::Present.code(), 1);
        assert_eq!(Outcome::Correct.code(), 2);
    }

    #[test]
    fn outcome_rejects_unknown_code() {
        assert!(Outcome::try_from(3).is_err());
        assert_eq!(Outcome::try_from(1), Ok(Outcome::Present));
    }

    #[test]
    fn letter_result_serializes_integer_result() {
        let result = LetterResult::new('a', Outcome::Correct);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json, serde_json::json!({ "letter": "a", "result": 2 }));
    }

    #[test]
    fn letter_result_parses_from_json() {
        let parsed: LetterResult =
            serde_json::from_str(r#"{"letter":"e","result":1}"#).unwrap();
        assert_eq!(parsed, LetterResult::new('e', Outcome::Present));

        assert!(serde_json::from_str::<LetterResult>(r#"{"letter":"e","result":7}"#).is_err());
    }

    #[test]
    fn letter_result_display() {
        let result = LetterResult::new('c', Outcome::Absent);
        assert_eq!(result.to_string(), "c⬜");
    }
}
