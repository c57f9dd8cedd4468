//! Deck file parsers.
//!
//! # Format
//! ```text
//! Q: Which structure does React use to optimize updates?
//! A: Virtual DOM tree
//!
//! Q: Explain props
//! A: Read-only component inputs.
//! Multiple lines are supported.
//! ```
//!
//! Lines before the first `Q:` are ignored. Decks can also be loaded from a
//! JSON array of `{"question", "answer"}` objects with [`parse_json`].

use crate::error::{ParseError, Result};
use crate::types::Card;

/// Parse a plain-text deck into cards, preserving file order.
pub fn parse(content: &str) -> Result<Vec<Card>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        parser.process_line(line, line_num)?;
    }

    parser.finalize()
}

/// Parse a JSON array of cards.
pub fn parse_json(content: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(content)?;
    Ok(cards)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Question,
    Answer,
}

struct CardBuilder {
    question: Option<String>,
    answer: Option<String>,
    start_line: usize,
}

impl CardBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            question: None,
            answer: None,
            start_line,
        }
    }

    fn build(self) -> Result<Card> {
        let line = self.start_line;
        let question = self.question.ok_or(ParseError::MissingQuestion { line })?;
        let answer = self.answer.ok_or(ParseError::MissingAnswer { line })?;

        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(ParseError::EmptyField { line });
        }

        Ok(Card::new(question, answer))
    }
}

struct Parser {
    cards: Vec<Card>,
    current: Option<CardBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            cards: Vec::new(),
            current: None,
            current_field: None,
            buffer: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Question(text) => self.handle_question(text, line_num)?,
            LineType::Answer(text) => self.handle_answer(text, line_num)?,
            LineType::Text(text) => self.push_continuation(text),
            LineType::Empty => self.push_continuation(""),
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("A:") {
            LineType::Answer(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }

    fn handle_question(&mut self, text: &str, line_num: usize) -> Result<()> {
        self.flush_buffer();
        self.finish_card()?;

        self.current = Some(CardBuilder::new(line_num));
        self.current_field = Some(Field::Question);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn handle_answer(&mut self, text: &str, line_num: usize) -> Result<()> {
        self.flush_buffer();

        // An answer needs an open question that has not been answered yet.
        match self.current {
            Some(ref card) if card.answer.is_none() => {}
            _ => return Err(ParseError::MissingQuestion { line: line_num }),
        }

        self.current_field = Some(Field::Answer);
        self.buffer.push(text.to_string());
        Ok(())
    }

    fn push_continuation(&mut self, text: &str) {
        // Commentary before the first question is dropped
        if self.current_field.is_some() {
            self.buffer.push(text.to_string());
        }
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let Some(ref mut card) = self.current {
            match self.current_field {
                Some(Field::Question) => card.question = Some(content),
                Some(Field::Answer) => card.answer = Some(content),
                None => {}
            }
        }
    }

    fn finish_card(&mut self) -> Result<()> {
        if let Some(card) = self.current.take() {
            self.cards.push(card.build()?);
        }
        self.current_field = None;
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<Card>> {
        self.flush_buffer();
        self.finish_card()?;
        Ok(self.cards)
    }
}

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    Text(&'a str),
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_card() {
        let input = "Q: What is Rust?\nA: A systems programming language.";
        let cards = parse(input).unwrap();
        assert_eq!(cards, vec![Card::new("What is Rust?", "A systems programming language.")]);
    }

    #[test]
    fn parse_multiline_answer() {
        let input = "Q: Explain\nA: Line 1\nLine 2\n\nLine 4\n\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].answer, "Line 1\nLine 2\n\nLine 4");
    }

    #[test]
    fn parse_multiline_question() {
        let input = "Q: First line\nsecond line\nA: Answer";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].question, "First line\nsecond line");
    }

    #[test]
    fn parse_multiple_cards_in_order() {
        let input = "Q: Q1\nA: A1\n\nQ: Q2\nA: A2\n\nQ: Q1\nA: A1";
        let cards = parse(input).unwrap();
        assert_eq!(
            cards,
            vec![Card::new("Q1", "A1"), Card::new("Q2", "A2"), Card::new("Q1", "A1")]
        );
    }

    #[test]
    fn ignores_preamble() {
        let input = "# React deck\nsome notes\n\nQ: Q1\nA: A1";
        let cards = parse(input).unwrap();
        assert_eq!(cards, vec![Card::new("Q1", "A1")]);
    }

    #[test]
    fn reject_answer_without_question() {
        let result = parse("A: Answer only");
        assert!(matches!(result, Err(ParseError::MissingQuestion { line: 1 })));
    }

    #[test]
    fn reject_second_answer() {
        let result = parse("Q: Q1\nA: A1\nA: again");
        assert!(matches!(result, Err(ParseError::MissingQuestion { line: 3 })));
    }

    #[test]
    fn reject_missing_answer() {
        let result = parse("Q: Q1\nA: A1\n\nQ: Question only\n\nQ: Q3\nA: A3");
        assert!(matches!(result, Err(ParseError::MissingAnswer { line: 4 })));
    }

    #[test]
    fn reject_empty_answer() {
        let result = parse("Q: Q1\nA:   \n");
        assert!(matches!(result, Err(ParseError::EmptyField { line: 1 })));
    }

    #[test]
    fn parse_empty_content() {
        let cards = parse("  \n\n").unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn parse_json_deck() {
        let input = r#"[{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": "A2"}]"#;
        let cards = parse_json(input).unwrap();
        assert_eq!(cards, vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]);
    }

    #[test]
    fn reject_malformed_json() {
        let result = parse_json(r#"[{"question": "Q1"}]"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
