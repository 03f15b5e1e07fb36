//! Terminal Wordle - CLI
//!
//! Guess the six-letter word in six tries.

use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};
use terminal_wordle::{
    core::{Game, Scoring, Word},
    interactive::{App, run_tui},
    output::print_summary,
    wordlists::random_secret,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "terminal-wordle",
    about = "Guess the six-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// Secret word to play (six letters)
    #[arg(short, long, conflicts_with = "random")]
    word: Option<String>,

    /// Pick the secret word at random from the built-in list
    #[arg(short, long)]
    random: bool,

    /// Scoring: positional (default, every misplaced copy is yellow) or standard
    #[arg(short, long, default_value = "positional")]
    scoring: String,

    /// Write log output to this file (filter with RUST_LOG); off when not given
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Skip the summary printed after the game
    #[arg(long)]
    no_summary: bool,
}

/// Open the log file, if one was requested
fn open_log_file(path: Option<&Path>) -> Result<Option<File>> {
    path.map(|path| {
        File::create(path).with_context(|| format!("failed to create log file {}", path.display()))
    })
    .transpose()
}

/// Send tracing output to a file so it never draws over the board
///
/// Without `--log-file` no subscriber is installed and nothing touches the disk.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(log_file) = open_log_file(path)? else {
        return Ok(());
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

fn secret_word(cli: &Cli) -> Result<Word> {
    if let Some(text) = &cli.word {
        return Word::new(text.as_str()).with_context(|| format!("invalid secret word '{text}'"));
    }
    if cli.random {
        return Ok(random_secret());
    }
    Ok(Word::default())
}

fn run(cli: &Cli) -> Result<()> {
    init_logging(cli.log_file.as_deref())?;

    let scoring = Scoring::from_name(&cli.scoring);
    if scoring == Scoring::Positional && cli.scoring != Scoring::Positional.name() {
        warn!(requested = %cli.scoring, "Unknown scoring rule, using positional");
    }

    let secret = secret_word(cli)?;
    info!(%scoring, random = cli.random, custom = cli.word.is_some(), "Starting game");

    let app = run_tui(App::new(Game::new(secret, scoring)))?;

    if !cli.no_summary
        && let Some(outcome) = app.outcome
    {
        print_summary(&app.game, outcome);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Alas, there's been an error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
