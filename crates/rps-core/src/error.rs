//! Error types.

use thiserror::Error;

/// Errors from game operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),
}
