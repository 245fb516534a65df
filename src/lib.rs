//! Hangman
//!
//! A console word-guessing game: a target word is picked at random and the
//! player guesses one letter at a time until the word is revealed or the
//! strike limit is hit.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::commands::{Game, GameStatus, play_game};
//! use hangman::input::LineInput;
//! use std::io::Cursor;
//!
//! let mut input = LineInput::new(Cursor::new("r\nu\ns\nt\n"), Vec::new());
//! let mut out = Vec::new();
//!
//! let status = play_game(Game::new("rust"), &mut input, &mut out).unwrap();
//! assert_eq!(status, GameStatus::Won);
//! assert!(String::from_utf8(out).unwrap().ends_with("You win! The word was rust\n"));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Player input
pub mod input;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::HangmanError;
