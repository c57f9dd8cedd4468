//! Core flashcard study library.
//!
//! Provides:
//! - Answer matching for typed guesses (normalization, Levenshtein distance)
//! - The deck study session state machine (navigation, shuffle, mastery, streaks)
//! - Deck loading from plain-text and JSON files
//! - Shared types (Card, Feedback, SessionStatus, SessionSnapshot)

pub mod deck;
pub mod error;
pub mod matching;
pub mod parser;
pub mod session;
pub mod types;

pub use deck::{default_deck, DEFAULT_DECK_DESCRIPTION, DEFAULT_DECK_TITLE};
pub use error::{ParseError, Result};
pub use matching::{edit_distance, grade, is_close_match, normalize, MatchKind, MatchResult, MAX_TYPO_DISTANCE};
pub use parser::{parse, parse_json};
pub use session::Session;
pub use types::{Card, Feedback, SessionSnapshot, SessionStatus};
