//! HTTP routes.

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::Uri,
    routing::{get, post, put},
};
use std::sync::Arc;

use super::ApiError;
use crate::core::WORD_LENGTH;
use crate::engine::{Game, GameEngine, GameView};

/// Length of a hyphenated UUID.
const GAME_ID_LENGTH: usize = 36;

/// Create all HTTP routes.
///
/// Anything outside the three game routes, including a known path with the
/// wrong method, answers 404 `Not Found`.
pub fn routes() -> Router<Arc<GameEngine>> {
    Router::new()
        .route("/game", post(create_game))
        .route("/game/{id}", get(get_game))
        .route("/game/{id}/{guess}", put(submit_guess))
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn create_game(
    State(engine): State<Arc<GameEngine>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Game>, ApiError> {
    let tag = query.as_deref().and_then(first_engine_param).and_then(engine_tag);
    let game = engine.create_game(tag)?;

    tracing::info!(game_id = %game.id, engine = ?game.engine, games = engine.len(), "Created game");
    Ok(Json(game))
}

async fn get_game(
    State(engine): State<Arc<GameEngine>>,
    uri: Uri,
) -> Result<Json<GameView>, ApiError> {
    let segments = raw_segments(&uri);
    let &[_, id] = segments.as_slice() else {
        return Err(ApiError::NotFound);
    };
    if !is_game_id(id) {
        return Err(ApiError::NotFound);
    }

    let game = engine.get_game(id)?;
    Ok(Json(game.into()))
}

async fn submit_guess(
    State(engine): State<Arc<GameEngine>>,
    uri: Uri,
) -> Result<Json<GameView>, ApiError> {
    let segments = raw_segments(&uri);
    let &[_, id, guess] = segments.as_slice() else {
        return Err(ApiError::NotFound);
    };
    if !is_game_id(id) || !is_guess(guess) {
        return Err(ApiError::NotFound);
    }

    let game = engine.submit_guess(id, guess)?;

    tracing::debug!(game_id = %id, guess = %guess, turns = game.turns(), solved = game.solved, "Recorded guess");
    if guess == game.word {
        tracing::info!(game_id = %id, turns = game.turns(), "Game solved");
    }
    Ok(Json(game.into()))
}

/// Path segments exactly as sent, before percent-decoding.
fn raw_segments(uri: &Uri) -> Vec<&str> {
    uri.path().split('/').filter(|s| !s.is_empty()).collect()
}

/// First `engine=` value in a raw query string, undecoded.
fn first_engine_param(query: &str) -> Option<&str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == "engine").then_some(value))
}

/// `\w` in the usual regex sense: ASCII letters, digits and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Game ids are UUID-shaped: 36 word characters or hyphens.
fn is_game_id(id: &str) -> bool {
    id.chars().count() == GAME_ID_LENGTH && id.chars().all(|c| is_word_char(c) || c == '-')
}

/// Guesses reaching the engine are exactly five word characters.
fn is_guess(guess: &str) -> bool {
    guess.chars().count() == WORD_LENGTH && guess.chars().all(is_word_char)
}

/// Leading run of word characters in the `engine` query value, if any.
fn engine_tag(raw: &str) -> Option<String> {
    let tag: String = raw.chars().take_while(|&c| is_word_char(c)).collect();
    (!tag.is_empty()).then_some(tag)
}
