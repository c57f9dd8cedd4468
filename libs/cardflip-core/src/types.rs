//! Core types for the study session.

use serde::{Deserialize, Serialize};

/// A question/answer pair. Identity is positional within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Result of grading the last submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    /// Map a match decision to feedback.
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    /// Message shown to the learner.
    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::Incorrect => "Incorrect, try again!",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Cards remain in the deck.
    Active,
    /// Every card has been mastered. Terminal.
    Complete,
}

/// Read-only view of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub deck_len: usize,
    /// Position of the current card; `None` once complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    /// Question or answer, depending on `show_answer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_text: Option<String>,
    pub show_answer: bool,
    pub user_guess: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub mastered: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_messages() {
        assert_eq!(Feedback::Correct.message(), "Correct!");
        assert_eq!(Feedback::Incorrect.message(), "Incorrect, try again!");
        assert_eq!(Feedback::from_correct(true), Feedback::Correct);
        assert_eq!(Feedback::from_correct(false), Feedback::Incorrect);
    }

    #[test]
    fn card_deserializes_from_json() {
        let card: Card = serde_json::from_str(r#"{"question":"Q1","answer":"A1"}"#).unwrap();
        assert_eq!(card, Card::new("Q1", "A1"));
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&SessionStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
    }
}
