//! Hangman - CLI
//!
//! Plays one game of hangman on stdin/stdout.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hangman::{
    commands::{DEFAULT_MAX_STRIKES, Game, GameConfig, play_game},
    core::validate_target,
    input::StdinInput,
    wordlists::{FractionSource, RngFractions, WORDS},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    /// Number of wrong guesses allowed before the game is lost
    #[arg(short, long, default_value_t = DEFAULT_MAX_STRIKES)]
    max_strikes: u32,

    /// Play this word instead of a random one
    #[arg(short, long)]
    word: Option<String>,

    /// Seed for reproducible word selection
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_tracing() {
    // stdout carries the game itself; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Decide the target word from the CLI flags
fn choose_game(cli: &Cli) -> Result<Game> {
    if let Some(word) = &cli.word {
        validate_target(word)?;
        return Ok(Game::new(word.as_str()));
    }

    let game = match cli.seed {
        Some(seed) => random_game(&mut RngFractions::new(StdRng::seed_from_u64(seed))),
        None => random_game(&mut RngFractions::new(rand::rng())),
    };
    game.context("Word list is empty")
}

fn random_game<S: FractionSource>(source: &mut S) -> Option<Game> {
    Game::random(WORDS, source)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.max_strikes == 0 {
        bail!("--max-strikes must be at least 1");
    }

    let game = choose_game(&cli)?.with_config(GameConfig::new(cli.max_strikes));

    let mut input = StdinInput::stdin();
    let mut out = io::stdout();
    play_game(game, &mut input, &mut out).context("Game ended unexpectedly")?;

    Ok(())
}
