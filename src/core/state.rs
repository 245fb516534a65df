//! Per-game guessing state
//!
//! Tracks which positions of the target word are revealed and how many wrong
//! guesses (strikes) have been made.

use super::formatting::{PLACEHOLDER, create_blank_sequence};
use crate::error::HangmanError;
use rustc_hash::FxHashSet;

/// Check whether a revealed sequence has no placeholders left
///
/// # Errors
/// Returns [`HangmanError::TypeMismatch`] if `sequence` is `None`. A missing
/// sequence is a caller bug, not an unsolved word.
pub fn is_solved(sequence: Option<&[char]>) -> Result<bool, HangmanError> {
    let sequence = sequence.ok_or(HangmanError::TypeMismatch)?;
    Ok(!sequence.contains(&PLACEHOLDER))
}

/// Result of applying one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs at this many positions of the target
    Hit(usize),
    /// The letter does not occur; a strike was recorded
    Miss,
}

/// Revealed letters and strike count for one target word
///
/// The revealed sequence always has one slot per letter of the target.
#[derive(Debug, Clone)]
pub struct GuessState {
    target: String,
    letters: Vec<char>,
    revealed: Vec<char>,
    strikes: u32,
    guessed: FxHashSet<char>,
}

impl GuessState {
    /// Fresh state: every slot is a placeholder and no strikes
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let letters: Vec<char> = target.chars().collect();
        let revealed = create_blank_sequence(Some(letters.len()));

        Self {
            target,
            letters,
            revealed,
            strikes: 0,
            guessed: FxHashSet::default(),
        }
    }

    /// Pre-seeded state, for resuming a game or setting up a test position
    ///
    /// # Errors
    /// Returns [`HangmanError::LengthMismatch`] if `revealed` does not have
    /// exactly one slot per letter of `target`.
    pub fn resume(
        target: impl Into<String>,
        revealed: Vec<char>,
        strikes: u32,
    ) -> Result<Self, HangmanError> {
        let mut state = Self::new(target);

        if revealed.len() != state.letters.len() {
            return Err(HangmanError::LengthMismatch {
                expected: state.letters.len(),
                actual: revealed.len(),
            });
        }

        state.revealed = revealed;
        state.strikes = strikes;
        Ok(state)
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Letters guessed so far, lowercased and sorted
    #[must_use]
    pub fn guessed(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Apply a validated letter
    ///
    /// Every position whose target letter matches case-insensitively is
    /// revealed with the target's own casing. No match adds one strike.
    /// Guessing an already revealed letter again is a hit with no new
    /// progress; repeating a wrong letter strikes again.
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        self.guessed.insert(letter.to_ascii_lowercase());

        let mut positions = 0;
        for (slot, &target_letter) in self.revealed.iter_mut().zip(&self.letters) {
            if target_letter.eq_ignore_ascii_case(&letter) {
                *slot = target_letter;
                positions += 1;
            }
        }

        if positions == 0 {
            self.strikes += 1;
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit(positions)
        }
    }
}
