//! Game engine
//!
//! Owns every game in an in-memory table and applies the three game
//! operations: create, fetch and guess.

mod game;

pub use game::{Game, GameView};

use crate::core::score;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::ports::{IdGenerator, RandomSource, SystemRandom, UuidGenerator};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory game engine
///
/// Games live for the lifetime of the engine; there is no eviction. Each
/// guess is applied while holding that game's entry lock, so concurrent
/// guesses on one id never interleave, while different ids proceed in
/// parallel.
pub struct GameEngine {
    dictionary: Arc<Dictionary>,
    games: DashMap<String, Game>,
    random: Arc<dyn RandomSource>,
    ids: Arc<dyn IdGenerator>,
}

impl GameEngine {
    /// Create an engine with system randomness and UUID ids
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self::with_ports(dictionary, Arc::new(SystemRandom), Arc::new(UuidGenerator))
    }

    /// Create an engine with injected randomness and id generation
    #[must_use]
    pub fn with_ports(
        dictionary: Arc<Dictionary>,
        random: Arc<dyn RandomSource>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            dictionary,
            games: DashMap::new(),
            random,
            ids,
        }
    }

    /// Start a new game with a random solution
    ///
    /// Returns the full record, solution included.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no solution can be picked.
    pub fn create_game(&self, engine: Option<String>) -> Result<Game, GameError> {
        let word = self
            .dictionary
            .pick_random(self.random.as_ref())
            .map_err(|_| GameError::EmptyDictionary)?
            .to_string();

        let game = Game::new(self.ids.next_id(), word, engine);
        self.games.insert(game.id.clone(), game.clone());
        Ok(game)
    }

    /// Look up a game by id
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotFound` if no game has this id.
    pub fn get_game(&self, id: &str) -> Result<Game, GameError> {
        self.games
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| GameError::not_found(id))
    }

    /// Score a guess and record it on the game
    ///
    /// The guess is expected to be five characters already; only dictionary
    /// membership is checked here. On error the game is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotFound` for an unknown id, or
    /// `GameError::InvalidWord` if the guess is not in the dictionary.
    pub fn submit_guess(&self, id: &str, guess: &str) -> Result<Game, GameError> {
        let mut entry = self
            .games
            .get_mut(id)
            .ok_or_else(|| GameError::not_found(id))?;
        let game = entry.value_mut();

        let feedback = score(&self.dictionary, &game.word, guess)?;
        game.record(guess.to_string(), feedback);

        Ok(game.clone())
    }

    /// Number of stored games
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
