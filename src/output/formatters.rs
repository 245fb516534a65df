//! Formatting utilities for terminal output

/// Render a revealed sequence with a space between slots
#[must_use]
pub fn format_revealed(revealed: &[char]) -> String {
    let mut result = String::with_capacity(revealed.len() * 2);

    for (i, &slot) in revealed.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(slot);
    }

    result
}

/// Render the strike tally, e.g. `strikes 2/6`
#[must_use]
pub fn format_strikes(strikes: u32, max_strikes: u32) -> String {
    format!("strikes {strikes}/{max_strikes}")
}

/// Render guessed letters as a comma separated list
#[must_use]
pub fn format_guessed(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
