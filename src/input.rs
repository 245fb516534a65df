//! Line-based player input
//!
//! The game loop asks an [`InputSource`] for raw text and validates it itself.

use crate::error::HangmanError;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Supplies one raw guess per turn
pub trait InputSource {
    /// Prompt for a letter and return whatever the player entered, unvalidated
    ///
    /// Returns `Ok(None)` once no more input is available.
    ///
    /// # Errors
    /// Returns an error if reading or prompting fails.
    fn ask_for_a_letter(&mut self) -> Result<Option<String>, HangmanError>;

    /// Called when the last answer failed validation
    ///
    /// # Errors
    /// Returns an error if the rejection cannot be shown.
    fn reject(&mut self, _error: &HangmanError) -> Result<(), HangmanError> {
        Ok(())
    }
}

/// Prompts on a writer and reads answers line by line from a reader
pub struct LineInput<R: BufRead, W: Write> {
    reader: R,
    prompt: W,
}

/// [`LineInput`] bound to the process's stdin and stdout
pub type StdinInput = LineInput<StdinLock<'static>, Stdout>;

impl<R: BufRead, W: Write> LineInput<R, W> {
    #[must_use]
    pub const fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    /// Give back the prompt writer
    #[must_use]
    pub fn into_prompt(self) -> W {
        self.prompt
    }
}

impl StdinInput {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn ask_for_a_letter(&mut self) -> Result<Option<String>, HangmanError> {
        write!(self.prompt, "{} ", "Guess a letter:".bold())?;
        self.prompt.flush()?;

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        // Undecodable bytes become U+FFFD so validation rejects the line
        let line = String::from_utf8_lossy(&bytes);

        // Only the line terminator is stripped; the rest is the player's
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    fn reject(&mut self, error: &HangmanError) -> Result<(), HangmanError> {
        writeln!(self.prompt, "{}", format!("{error}, try again.").yellow())?;
        Ok(())
    }
}
