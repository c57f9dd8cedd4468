//! Error types for cardflip-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while loading a deck.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing question before answer at line {line}")]
    MissingQuestion { line: usize },

    #[error("missing answer for question at line {line}")]
    MissingAnswer { line: usize },

    #[error("empty question or answer in card at line {line}")]
    EmptyField { line: usize },

    #[error("invalid JSON deck: {0}")]
    Json(#[from] serde_json::Error),
}
