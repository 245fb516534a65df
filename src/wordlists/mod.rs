//! Word bank for hangman
//!
//! An embedded list of candidate target words plus random selection over it.

mod embedded;
mod selection;

pub use embedded::{WORDS, WORDS_COUNT};
pub use selection::{FixedFractions, FractionSource, RngFractions, randomly_select_word};
