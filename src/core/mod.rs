//! Core domain types for hangman
//!
//! Pure functions and state with no I/O. Everything here is deterministic and
//! testable in isolation.

mod formatting;
mod letter;
mod state;

pub use formatting::{BlankLength, PLACEHOLDER, create_blank_sequence, stringify};
pub use letter::{validate_input, validate_target};
pub use state::{GuessOutcome, GuessState, is_solved};
