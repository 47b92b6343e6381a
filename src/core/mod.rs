//! Core domain types for the guessing game
//!
//! Feedback types and the scoring rule. Nothing here touches I/O.

mod feedback;
mod scoring;

pub use feedback::{LetterResult, Outcome};
pub use scoring::{grade, score};

/// Number of letters in every solution and guess
pub const WORD_LENGTH: usize = 5;
