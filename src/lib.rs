//! Wordle Server
//!
//! A word-guessing game server: clients create a game, submit guesses and get
//! per-letter feedback until the secret word is found.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_server::{dictionary::Dictionary, engine::GameEngine};
//!
//! let engine = GameEngine::new(Arc::new(Dictionary::from_words(["crane", "slate"])));
//! let game = engine.create_game(None).unwrap();
//!
//! let updated = engine.submit_guess(&game.id, "slate").unwrap();
//! assert_eq!(updated.guesses.len(), updated.feedback.len());
//! ```

// Core domain types and scoring
pub mod core;

// Word list
pub mod dictionary;

// Game state
pub mod engine;

// Error types
pub mod error;

// Injected randomness and ids
pub mod ports;

// HTTP boundary
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
