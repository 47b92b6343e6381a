//! HTTP boundary around the game engine.
//!
//! Route shapes are checked here; the engine only ever sees a UUID-shaped
//! id and a five-character guess.

pub mod http;

use crate::error::GameError;

pub use http::routes;

/// Errors returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::NotFound(_) => ApiError::NotFound,
            GameError::InvalidWord(_) => {
                tracing::debug!(error = %e, "Rejected guess");
                ApiError::BadRequest(e.to_string())
            }
            GameError::EmptyDictionary => ApiError::Internal(e.to_string()),
        }
    }
}
