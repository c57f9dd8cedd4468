//! Command-line configuration.
//!
//! Every option can also come from the environment (after `.env` is loaded),
//! so a deck can be pinned with `CARDFLIP_DECK` and shuffles made repeatable
//! with `CARDFLIP_SEED`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardflip_core::{default_deck, parse, parse_json, Card};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::render::Header;

#[derive(Parser, Debug)]
#[command(
    name = "cardflip",
    version,
    about = "Study a flashcard deck from the terminal with typo-tolerant answer checking."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive study session
    Study(StudyArgs),
    /// Check whether a guess would be accepted for an answer
    Check(CheckArgs),
    /// Print every card in a deck
    List(ListArgs),
}

/// Where the deck comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct DeckArgs {
    /// Deck file (`.json` array or `Q:`/`A:` text). Defaults to the built-in deck.
    #[arg(long, env = "CARDFLIP_DECK")]
    pub deck: Option<PathBuf>,
}

impl DeckArgs {
    pub fn load(&self) -> Result<Vec<Card>> {
        match &self.deck {
            Some(path) => load_deck_file(path),
            None => Ok(default_deck()),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StudyArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Shuffle the deck before the first card
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for shuffling, for repeatable orderings
    #[arg(long, env = "CARDFLIP_SEED")]
    pub seed: Option<u64>,

    /// Title shown above the cards
    #[arg(long, env = "CARDFLIP_TITLE")]
    pub title: Option<String>,
}

impl StudyArgs {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// An explicit title wins; the built-in deck brings its own heading.
    pub fn header(&self) -> Option<Header> {
        match (&self.title, &self.deck.deck) {
            (Some(title), _) => Some(Header::new(title.clone(), None)),
            (None, None) => Some(Header::default_deck()),
            (None, Some(_)) => None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// The learner's guess
    pub guess: String,
    /// The reference answer
    pub reference: String,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
    /// Print the deck as JSON
    #[arg(long)]
    pub json: bool,
}

fn load_deck_file(path: &Path) -> Result<Vec<Card>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cards = if is_json {
        parse_json(&content)
    } else {
        parse(&content)
    }
    .with_context(|| format!("failed to parse deck file {}", path.display()))?;

    tracing::info!(path = %path.display(), cards = cards.len(), "loaded deck");
    Ok(cards)
}
