//! Application error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rps_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Playing failed. Your move: {0}")]
    InvalidMove(String),

    #[error("Missing X-Session-Id header")]
    MissingSession,
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        match e {
            GameError::InvalidMove(m) => AppError::InvalidMove(m),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidMove(_) | AppError::MissingSession => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}
