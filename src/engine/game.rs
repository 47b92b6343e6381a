//! Game record and its redacted view

use crate::core::LetterResult;
use serde::{Deserialize, Serialize};

/// A single game, including its secret solution
///
/// `guesses` and `feedback` are aligned by index and only ever appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub guesses: Vec<String>,
    pub feedback: Vec<Vec<LetterResult>>,
    pub solved: bool,
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl Game {
    /// Fresh game with no guesses
    #[must_use]
    pub fn new(id: String, word: String, engine: Option<String>) -> Self {
        Self {
            id,
            guesses: Vec::new(),
            feedback: Vec::new(),
            solved: false,
            word,
            engine,
        }
    }

    /// Append a scored guess, flipping `solved` when it matches the solution
    ///
    /// `solved` is never cleared once set.
    pub(crate) fn record(&mut self, guess: String, feedback: Vec<LetterResult>) {
        if guess == self.word {
            self.solved = true;
        }
        self.guesses.push(guess);
        self.feedback.push(feedback);
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }

    /// Client-facing view with the solution removed
    #[must_use]
    pub fn redacted(&self) -> GameView {
        GameView {
            id: self.id.clone(),
            guesses: self.guesses.clone(),
            feedback: self.feedback.clone(),
            solved: self.solved,
            engine: self.engine.clone(),
        }
    }
}

/// Game without its `word`, safe to hand to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: String,
    pub guesses: Vec<String>,
    pub feedback: Vec<Vec<LetterResult>>,
    pub solved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

impl From<Game> for GameView {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            guesses: game.guesses,
            feedback: game.feedback,
            solved: game.solved,
            engine: game.engine,
        }
    }
}
