//! Guess scoring
//!
//! Scores a guess letter by letter against the solution:
//! 1. Same letter at the same position: Correct
//! 2. Otherwise, letter appears anywhere in the solution: Present
//! 3. Otherwise: Absent
//!
//! Letter counts are not consumed. A guess that repeats a letter the solution
//! holds once gets Present (or Correct) for every occurrence, unlike the
//! count-aware rule of the newspaper game.

use super::{LetterResult, Outcome};
use crate::dictionary::Dictionary;
use crate::error::GameError;

/// Score `guess` against `solution`, rejecting guesses that are not real words
///
/// The solution is not checked against the dictionary since the engine always
/// picks it from there.
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if `guess` is not in `dictionary`.
///
/// # Examples
/// ```
/// use wordle_server::core::{Outcome, score};
/// use wordle_server::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["abcde", "aecdb"]);
/// let feedback = score(&dictionary, "abcde", "aecdb").unwrap();
///
/// assert_eq!(feedback[0].result, Outcome::Correct);
/// assert_eq!(feedback[1].result, Outcome::Present);
/// assert!(score(&dictionary, "abcde", "zzzzz").is_err());
/// ```
pub fn score(
    dictionary: &Dictionary,
    solution: &str,
    guess: &str,
) -> Result<Vec<LetterResult>, GameError> {
    if !dictionary.contains(guess) {
        return Err(GameError::InvalidWord(guess.to_string()));
    }

    Ok(grade(solution, guess))
}

/// Grade `guess` against `solution` without the dictionary check
///
/// Produces one entry per character of `guess`, in order.
#[must_use]
pub fn grade(solution: &str, guess: &str) -> Vec<LetterResult> {
    let solution: Vec<char> = solution.chars().collect();

    guess
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let result = if solution.get(i) == Some(&letter) {
                Outcome::Correct
            } else if solution.contains(&letter) {
                Outcome::Present
            } else {
                Outcome::Absent
            };
            LetterResult::new(letter, result)
        })
        .collect()
}
