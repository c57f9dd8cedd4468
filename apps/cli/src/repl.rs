//! Interactive study loop.
//!
//! Each input line is parsed into a [`Command`], applied to the session, and
//! answered with a freshly rendered view.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use cardflip_core::Session;
use rand::Rng;
use thiserror::Error;

use crate::render::{self, Header};

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Flip,
    Next,
    Prev,
    /// Type a guess and submit it.
    Guess(String),
    /// Type a guess without grading it.
    Type(String),
    Submit,
    Shuffle,
    Mastered,
    Status { json: bool },
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs some text, e.g. '{0} virtual dom'")]
    MissingText(&'static str),

    #[error("empty input")]
    Empty,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "flip" | "f" => Self::Flip,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "guess" | "g" => Self::Guess(require_text("guess", rest)?),
            "type" => Self::Type(require_text("type", rest)?),
            "submit" | "s" => Self::Submit,
            "shuffle" => Self::Shuffle,
            "mastered" | "m" => Self::Mastered,
            "status" => match rest {
                "" => Self::Status { json: false },
                "--json" => Self::Status { json: true },
                _ => return Err(CommandError::Unknown(line.to_string())),
            },
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

fn require_text(command: &'static str, text: &str) -> Result<String, CommandError> {
    if text.is_empty() {
        Err(CommandError::MissingText(command))
    } else {
        Ok(text.to_string())
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Finished(String),
}

/// Drives a [`Session`] from text commands.
pub struct Repl<R> {
    session: Session,
    rng: R,
    header: Option<Header>,
}

impl<R: Rng> Repl<R> {
    pub fn new(session: Session, rng: R) -> Self {
        Self {
            session,
            rng,
            header: None,
        }
    }

    /// Show `header` above every card view.
    pub fn with_header(mut self, header: Option<Header>) -> Self {
        self.header = header;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Shuffle with this loop's generator, as the `--shuffle` flag does.
    pub fn shuffle(&mut self) {
        self.session.shuffle_with(&mut self.rng);
    }

    /// Apply one command and render the result.
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        tracing::debug!(?command, "applying command");

        match command {
            Command::Flip => self.session.flip(),
            Command::Next => self.session.next(),
            Command::Prev => self.session.prev(),
            Command::Guess(text) => {
                self.session.set_guess(text);
                self.session.submit_current_guess();
            }
            Command::Type(text) => self.session.set_guess(text),
            Command::Submit => {
                self.session.submit_current_guess();
            }
            Command::Shuffle => self.shuffle(),
            Command::Mastered => {
                self.session.mark_mastered();
            }
            Command::Status { json: true } => {
                let json = serde_json::to_string_pretty(&self.session.snapshot())?;
                return Ok(Step::Continue(format!("{json}\n")));
            }
            Command::Status { json: false } => {}
            Command::Help => return Ok(Step::Continue(format!("{}\n", render::HELP))),
            Command::Quit => return Ok(Step::Finished(render::farewell(&self.session.snapshot()))),
        }

        let view = render::session_view(&self.session.snapshot(), self.header.as_ref());
        if self.session.is_complete() {
            Ok(Step::Finished(view))
        } else {
            Ok(Step::Continue(view))
        }
    }

    /// Read commands until the user quits, input ends, or the deck is mastered.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut out: W) -> Result<()> {
        let opening = render::session_view(&self.session.snapshot(), self.header.as_ref());
        write!(out, "{opening}")?;
        if self.session.is_complete() {
            return Ok(());
        }
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let step = match line.parse::<Command>() {
                Ok(command) => self.apply(command)?,
                Err(CommandError::Empty) => Step::Continue(String::new()),
                Err(err) => Step::Continue(format!("{err}\n")),
            };

            match step {
                Step::Continue(text) => {
                    write!(out, "{text}> ")?;
                    out.flush()?;
                }
                Step::Finished(text) => {
                    write!(out, "{text}")?;
                    return Ok(());
                }
            }
        }

        writeln!(out)?;
        Ok(())
    }
}
