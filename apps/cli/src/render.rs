//! Text rendering of session state.

use std::fmt;

use cardflip_core::{
    Card, MatchKind, MatchResult, SessionSnapshot, SessionStatus, DEFAULT_DECK_DESCRIPTION,
    DEFAULT_DECK_TITLE,
};

pub const HELP: &str = "\
Commands:
  flip, f            show the other side of the card
  next, n            next card
  prev, p            previous card
  guess, g <text>    type a guess and submit it
  type <text>        type a guess without submitting
  submit, s          submit the typed guess
  shuffle            shuffle the deck
  mastered, m        remove the current card from the deck
  status [--json]    show the current state
  help, ?            show this help
  quit, q            leave the session";

/// Deck title and blurb shown above the card count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub description: Option<String>,
}

impl Header {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Heading for the built-in deck.
    pub fn default_deck() -> Self {
        Self::new(DEFAULT_DECK_TITLE, Some(DEFAULT_DECK_DESCRIPTION.to_string()))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        Ok(())
    }
}

/// The card view, or the summary once the session is complete.
pub struct SessionView<'a> {
    pub snapshot: &'a SessionSnapshot,
    pub header: Option<&'a Header>,
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        if snapshot.status == SessionStatus::Complete {
            return fmt::Display::fmt(&Summary(snapshot), f);
        }

        if let Some(header) = self.header {
            write!(f, "{header}")?;
        }
        let position = snapshot.current_index.map_or(0, |i| i + 1);
        writeln!(
            f,
            "Number of cards: {} (card {} of {})",
            snapshot.deck_len, position, snapshot.deck_len
        )?;
        write_streaks(f, snapshot)?;

        let face = if snapshot.show_answer { "A" } else { "Q" };
        writeln!(f, "{face}: {}", snapshot.visible_text.as_deref().unwrap_or_default())?;

        if !snapshot.user_guess.is_empty() {
            writeln!(f, "Guess: {}", snapshot.user_guess)?;
        }
        if let Some(feedback) = &snapshot.feedback {
            writeln!(f, "{feedback}")?;
        }
        write_mastered(f, &snapshot.mastered)
    }
}

/// Final screen shown when every card has been mastered.
pub struct Summary<'a>(pub &'a SessionSnapshot);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All cards mastered!")?;
        write_streaks(f, self.0)?;
        write_mastered(f, &self.0.mastered)
    }
}

/// Shown when the learner quits before mastering everything.
pub struct Farewell<'a>(pub &'a SessionSnapshot);

impl fmt::Display for Farewell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.status == SessionStatus::Complete {
            return fmt::Display::fmt(&Summary(self.0), f);
        }
        writeln!(f, "Session ended with {} card(s) left.", self.0.deck_len)?;
        write_streaks(f, self.0)?;
        write_mastered(f, &self.0.mastered)
    }
}

pub struct DeckList<'a>(pub &'a [Card]);

impl fmt::Display for DeckList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            writeln!(f, "{}. Q: {}", idx + 1, card.question)?;
            writeln!(f, "   A: {}", card.answer)?;
        }
        Ok(())
    }
}

pub fn session_view(snapshot: &SessionSnapshot, header: Option<&Header>) -> String {
    SessionView { snapshot, header }.to_string()
}

pub fn farewell(snapshot: &SessionSnapshot) -> String {
    Farewell(snapshot).to_string()
}

pub fn deck_list(cards: &[Card]) -> String {
    DeckList(cards).to_string()
}

/// Explain why a guess was accepted or rejected.
pub fn match_report(result: &MatchResult) -> String {
    let verdict = if result.is_correct { "accepted" } else { "rejected" };
    let reason = match result.kind {
        MatchKind::Exact => "same words after normalization".to_string(),
        MatchKind::Contains => "one answer contains the other".to_string(),
        MatchKind::Typo { distance } => format!("{distance} edit(s) apart"),
        MatchKind::NoMatch if result.guess_normalized.is_empty() => "guess is empty".to_string(),
        MatchKind::NoMatch => "too different".to_string(),
    };
    format!(
        "{verdict}: {reason}\n  guess:     \"{}\"\n  reference: \"{}\"\n",
        result.guess_normalized, result.reference_normalized
    )
}

fn write_streaks(f: &mut fmt::Formatter<'_>, snapshot: &SessionSnapshot) -> fmt::Result {
    writeln!(
        f,
        "Current Streak: {}, Longest Streak: {}",
        snapshot.current_streak, snapshot.max_streak
    )
}

fn write_mastered(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    if cards.is_empty() {
        return Ok(());
    }
    writeln!(f, "Mastered cards:")?;
    for card in cards {
        writeln!(f, "  Q: {}", card.question)?;
        writeln!(f, "  A: {}", card.answer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardflip_core::{grade, Session};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_question_side() {
        let mut session = Session::new(vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]);
        session.set_guess("a1");
        session.submit_current_guess();

        let view = session_view(&session.snapshot(), None);
        assert_eq!(
            view,
            "Number of cards: 2 (card 1 of 2)\n\
             Current Streak: 1, Longest Streak: 1\n\
             Q: Q1\n\
             Guess: a1\n\
             Correct!\n"
        );
    }

    #[test]
    fn renders_header_above_card_count() {
        let session = Session::new(vec![Card::new("Q1", "A1")]);
        let header = Header::default_deck();

        let view = session_view(&session.snapshot(), Some(&header));
        assert!(view.starts_with(
            "React Flashcards\n\
             Test your knowledge of React!\n\
             Number of cards: 1 (card 1 of 1)\n"
        ));
    }

    #[test]
    fn header_without_description() {
        let header = Header::new("Rust basics", None);
        assert_eq!(header.to_string(), "Rust basics\n");
    }

    #[test]
    fn renders_answer_side_and_mastered() {
        let mut session = Session::new(vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]);
        session.mark_mastered();
        session.flip();

        let view = session_view(&session.snapshot(), None);
        assert!(view.contains("A: A2\n"));
        assert!(view.ends_with("Mastered cards:\n  Q: Q1\n  A: A1\n"));
    }

    #[test]
    fn renders_summary_when_complete() {
        let mut session = Session::new(vec![Card::new("Q1", "A1")]);
        session.mark_mastered();

        let header = Header::default_deck();
        let view = session_view(&session.snapshot(), Some(&header));
        assert!(view.starts_with("All cards mastered!\nCurrent Streak: 0, Longest Streak: 0\n"));
    }

    #[test]
    fn lists_deck() {
        let cards = vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")];
        assert_eq!(deck_list(&cards), "1. Q: Q1\n   A: A1\n2. Q: Q2\n   A: A2\n");
    }

    #[test]
    fn reports_match_reasons() {
        assert!(match_report(&grade("virtual dom", "Virtual DOM tree"))
            .starts_with("accepted: one answer contains the other"));
        assert!(match_report(&grade("webpak", "webpack")).starts_with("accepted: 1 edit(s) apart"));
        assert!(match_report(&grade("", "webpack")).starts_with("rejected: guess is empty"));
        assert!(match_report(&grade("parcel", "grunt")).starts_with("rejected: too different"));
    }
}
