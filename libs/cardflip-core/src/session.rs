//! Deck study session.
//!
//! A [`Session`] owns the working deck, the cursor into it, and the streak
//! and mastery counters. Every transition is a `&mut self` method that runs
//! to completion. Once the last card is mastered the session is
//! [`SessionStatus::Complete`] and every transition becomes a no-op.

use crate::matching::is_close_match;
use crate::types::{Card, Feedback, SessionSnapshot, SessionStatus};
use rand::seq::SliceRandom;
use rand::Rng;

/// In-memory state for one study session.
#[derive(Debug, Clone)]
pub struct Session {
    deck: Vec<Card>,
    current_index: usize,
    show_answer: bool,
    user_guess: String,
    feedback: Option<Feedback>,
    current_streak: u32,
    max_streak: u32,
    mastered: Vec<Card>,
}

impl Session {
    /// Start a session over `deck`. An empty deck starts out complete.
    pub fn new(deck: Vec<Card>) -> Self {
        tracing::debug!(cards = deck.len(), "starting study session");
        Self {
            deck,
            current_index: 0,
            show_answer: false,
            user_guess: String::new(),
            feedback: None,
            current_streak: 0,
            max_streak: 0,
            mastered: Vec::new(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.deck.is_empty() {
            SessionStatus::Complete
        } else {
            SessionStatus::Active
        }
    }

    pub fn is_complete(&self) -> bool {
        self.deck.is_empty()
    }

    /// Card under the cursor, `None` once complete.
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.current_index)
    }

    /// The face of the current card that is showing.
    pub fn visible_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.show_answer {
                card.answer.as_str()
            } else {
                card.question.as_str()
            }
        })
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Cards mastered so far, in the order they were mastered.
    pub fn mastered(&self) -> &[Card] {
        &self.mastered
    }

    /// Toggle between question and answer.
    pub fn flip(&mut self) {
        if self.is_complete() {
            return;
        }
        self.feedback = None;
        self.show_answer = !self.show_answer;
    }

    /// Move to the next card, wrapping to the first.
    pub fn next(&mut self) {
        if self.is_complete() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.deck.len();
        self.reset_card_view();
    }

    /// Move to the previous card, wrapping to the last.
    pub fn prev(&mut self) {
        if self.is_complete() {
            return;
        }
        let len = self.deck.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.reset_card_view();
    }

    /// Replace the pending guess text without grading it.
    pub fn set_guess(&mut self, text: impl Into<String>) {
        if self.is_complete() {
            return;
        }
        self.user_guess = text.into();
    }

    /// Grade `guess` against the current card's answer and update streaks.
    ///
    /// Returns `None` when the session is complete.
    pub fn submit_guess(&mut self, guess: &str) -> Option<Feedback> {
        let card = self.current_card()?;
        let feedback = Feedback::from_correct(is_close_match(guess, &card.answer));

        match feedback {
            Feedback::Correct => {
                self.current_streak = self.current_streak.saturating_add(1);
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Feedback::Incorrect => self.current_streak = 0,
        }
        self.feedback = Some(feedback);

        tracing::debug!(
            index = self.current_index,
            correct = feedback.is_correct(),
            streak = self.current_streak,
            "graded guess"
        );
        Some(feedback)
    }

    /// Grade the pending guess set with [`Session::set_guess`].
    pub fn submit_current_guess(&mut self) -> Option<Feedback> {
        let guess = self.user_guess.clone();
        self.submit_guess(&guess)
    }

    /// Shuffle the deck with the thread-local generator.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Uniformly permute the deck (Fisher-Yates) and return to the first card.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_complete() {
            return;
        }
        self.deck.shuffle(rng);
        self.current_index = 0;
        self.reset_card_view();
        tracing::debug!(cards = self.deck.len(), "shuffled deck");
    }

    /// Move the current card out of the deck into the mastered list.
    ///
    /// The cursor keeps its position, so it lands on the card that shifted
    /// into the freed slot, or wraps to 0 if the last card was removed.
    pub fn mark_mastered(&mut self) -> Option<Card> {
        if self.is_complete() {
            return None;
        }

        let card = self.deck.remove(self.current_index);
        self.mastered.push(card.clone());

        if self.current_index >= self.deck.len() {
            self.current_index = 0;
        }
        self.reset_card_view();

        tracing::debug!(
            remaining = self.deck.len(),
            mastered = self.mastered.len(),
            "card mastered"
        );
        if self.is_complete() {
            tracing::info!(
                mastered = self.mastered.len(),
                max_streak = self.max_streak,
                "all cards mastered"
            );
        }
        Some(card)
    }

    /// Capture everything observable for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let active = !self.is_complete();
        SessionSnapshot {
            status: self.status(),
            deck_len: self.deck.len(),
            current_index: active.then_some(self.current_index),
            visible_text: self.visible_text().map(str::to_string),
            show_answer: self.show_answer,
            user_guess: self.user_guess.clone(),
            feedback: self.feedback.map(|f| f.message().to_string()),
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            mastered: self.mastered.clone(),
        }
    }

    fn reset_card_view(&mut self) {
        self.show_answer = false;
        self.feedback = None;
        self.user_guess.clear();
    }
}
