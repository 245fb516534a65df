//! Random word selection
//!
//! The random source is injected so tests can script the exact fractions
//! drawn.

use rand::Rng;
use std::collections::VecDeque;

/// A source of uniformly distributed fractions in `[0, 1)`
pub trait FractionSource {
    /// Draw the next fraction
    fn next_fraction(&mut self) -> f64;
}

/// Fractions drawn from a `rand` generator
pub struct RngFractions<R: Rng> {
    rng: R,
}

impl<R: Rng> RngFractions<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FractionSource for RngFractions<R> {
    fn next_fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A scripted sequence of fractions, replayed in order
///
/// Once the script is exhausted every further draw returns `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedFractions {
    fractions: VecDeque<f64>,
}

impl FixedFractions {
    #[must_use]
    pub fn new(fractions: impl IntoIterator<Item = f64>) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
        }
    }
}

impl FractionSource for FixedFractions {
    fn next_fraction(&mut self) -> f64 {
        self.fractions.pop_front().unwrap_or(0.0)
    }
}

/// Pick a word uniformly at random
///
/// The drawn fraction maps to index `floor(fraction * words.len())`, clamped
/// to the last index. Returns `None` for an empty list.
///
/// # Examples
/// ```
/// use hangman::wordlists::{FixedFractions, randomly_select_word};
///
/// let words = ["first", "second", "third"];
/// let mut source = FixedFractions::new([0.0, 0.5, 0.9]);
///
/// assert_eq!(randomly_select_word(&words, &mut source), Some("first"));
/// assert_eq!(randomly_select_word(&words, &mut source), Some("second"));
/// assert_eq!(randomly_select_word(&words, &mut source), Some("third"));
/// ```
pub fn randomly_select_word<'a, S: FractionSource + ?Sized>(
    words: &[&'a str],
    source: &mut S,
) -> Option<&'a str> {
    if words.is_empty() {
        return None;
    }

    let fraction = source.next_fraction().clamp(0.0, 1.0);
    let index = ((fraction * words.len() as f64).floor() as usize).min(words.len() - 1);
    Some(words[index])
}
