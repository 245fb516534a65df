//! Display functions for game progress and results
//!
//! Everything is written to an injected writer as plain text lines.

use super::formatters::{format_guessed, format_revealed, format_strikes};
use crate::commands::GameStatus;
use crate::core::GuessState;
use std::io::{self, Write};

/// Write the single terminal line for a finished game
///
/// Writes nothing while the game is still in progress.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(out: &mut W, status: GameStatus, target: &str) -> io::Result<()> {
    match status {
        GameStatus::Won => writeln!(out, "You win! The word was {target}"),
        GameStatus::Lost => writeln!(out, "You lose! The word was {target}"),
        GameStatus::InProgress => Ok(()),
    }
}

/// Write the per-turn progress line
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_status<W: Write>(out: &mut W, state: &GuessState, max_strikes: u32) -> io::Result<()> {
    writeln!(
        out,
        "{}  [{}]  guessed: {}",
        format_revealed(state.revealed()),
        format_strikes(state.strikes(), max_strikes),
        format_guessed(&state.guessed())
    )
}
