//! Error types for the hangman library
//!
//! `InvalidInput` is recoverable (the game loop re-prompts). The rest end the
//! current game and propagate to the caller.

use thiserror::Error;

/// Errors raised by the hangman core and game loop
#[derive(Error, Debug)]
pub enum HangmanError {
    /// The raw guess was absent or did not start with an ASCII letter
    #[error("Invalid input")]
    InvalidInput,

    /// A required sequence argument was absent
    #[error("Type mismatch: expected a character sequence, got nothing")]
    TypeMismatch,

    /// The target word holds something a single-letter guess cannot reveal
    #[error("Target word must be one or more ASCII letters, got '{0}'")]
    InvalidTarget(String),

    /// A pre-seeded revealed sequence does not line up with the target word
    #[error("Revealed sequence has {actual} slots but the target word has {expected} letters")]
    LengthMismatch { expected: usize, actual: usize },

    /// The input source ran dry before the game reached a terminal state
    #[error("Input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
