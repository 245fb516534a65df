//! Terminal output formatting
//!
//! Plain-text rendering of game progress and the final result.

pub mod display;
pub mod formatters;

pub use display::{write_outcome, write_status};
