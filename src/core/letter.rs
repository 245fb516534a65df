//! Validation of a raw guess token

use crate::error::HangmanError;

/// Reduce a raw input token to a single guessed letter
///
/// Only the first character is considered; anything after it is silently
/// dropped. The letter keeps the casing the player typed.
///
/// # Errors
/// Returns [`HangmanError::InvalidInput`] if `raw` is `None`, empty, or starts
/// with anything other than an ASCII letter.
///
/// # Examples
/// ```
/// use hangman::core::validate_input;
///
/// assert_eq!(validate_input(Some("string")).unwrap(), 's');
/// assert!(validate_input(Some(".a")).is_err());
/// ```
pub fn validate_input(raw: Option<&str>) -> Result<char, HangmanError> {
    match raw.and_then(|s| s.chars().next()) {
        Some(letter) if letter.is_ascii_alphabetic() => Ok(letter),
        _ => Err(HangmanError::InvalidInput),
    }
}

/// Check that a target word can be won with [`validate_input`] guesses
///
/// # Errors
/// Returns [`HangmanError::InvalidTarget`] if `target` is empty or contains
/// anything other than ASCII letters.
pub fn validate_target(target: &str) -> Result<(), HangmanError> {
    if target.is_empty() || !target.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(HangmanError::InvalidTarget(target.to_string()));
    }
    Ok(())
}
