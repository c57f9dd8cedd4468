pub mod config;
pub mod render;
pub mod repl;

use std::io::{self, Write};

use anyhow::Result;
use cardflip_core::{grade, Session};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CheckArgs, Cli, Commands, ListArgs, StudyArgs};
use crate::repl::Repl;

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the card view.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Study(args) => study(args),
        Commands::Check(args) => check(args),
        Commands::List(args) => list(args),
    }
}

fn study(args: StudyArgs) -> Result<()> {
    let cards = args.deck.load()?;
    tracing::info!(cards = cards.len(), shuffle = args.shuffle, "starting study");

    let mut repl = Repl::new(Session::new(cards), args.rng()).with_header(args.header());
    if args.shuffle {
        repl.shuffle();
    }

    let stdin = io::stdin();
    repl.run(stdin.lock(), io::stdout().lock())
}

fn check(args: CheckArgs) -> Result<()> {
    let result = grade(&args.guess, &args.reference);
    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(out, "{}", render::match_report(&result))?;
    }
    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let cards = args.deck.load()?;
    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&cards)?)?;
    } else {
        write!(out, "{}", render::deck_list(&cards))?;
    }
    Ok(())
}
