//! Conversions between a word-in-progress and its display string
//!
//! A word-in-progress is a sequence of single-character slots. Both functions
//! here degrade gracefully: missing or unusable arguments produce empty output
//! instead of an error.

use std::fmt::Display;

/// Marks a letter position that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Concatenate every element of `sequence` in order, without a separator
///
/// Elements may be single characters or longer strings; each is copied
/// verbatim, so case and whitespace are preserved. `None` and an empty slice
/// both produce an empty string.
///
/// # Examples
/// ```
/// use hangman::core::stringify;
///
/// assert_eq!(stringify(Some(&['h', 'i'][..])), "hi");
/// assert_eq!(stringify(Some(&["h", "el", "lo"][..])), "hello");
/// assert_eq!(stringify::<char>(None), "");
/// ```
#[must_use]
pub fn stringify<T: Display>(sequence: Option<&[T]>) -> String {
    sequence
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// A value that may describe a number of blank slots
///
/// Integers convert when they are non-negative and fit in `usize`. A `bool`
/// is never a count.
pub trait BlankLength {
    /// The slot count, or `None` if this value is not a usable count
    fn slot_count(self) -> Option<usize>;
}

macro_rules! impl_blank_length {
    ($($int:ty),*) => {
        $(
            impl BlankLength for $int {
                fn slot_count(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_blank_length!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl BlankLength for bool {
    fn slot_count(self) -> Option<usize> {
        None
    }
}

/// Build a sequence of `length` placeholder slots
///
/// Returns an empty sequence when `length` is `None`, a negative integer, or
/// a `bool`.
#[must_use]
pub fn create_blank_sequence<L: BlankLength>(length: Option<L>) -> Vec<char> {
    length
        .and_then(BlankLength::slot_count)
        .map_or_else(Vec::new, |len| vec![PLACEHOLDER; len])
}
