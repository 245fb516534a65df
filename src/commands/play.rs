//! Interactive hangman game loop
//!
//! Each turn checks for a finished game, then asks for a letter, validates
//! it, and applies it to the guess state.

use crate::core::{
    GuessState, create_blank_sequence, is_solved, stringify, validate_input, validate_target,
};
use crate::error::HangmanError;
use crate::input::InputSource;
use crate::output::{write_outcome, write_status};
use crate::wordlists::{FractionSource, randomly_select_word};
use std::io::Write;
use tracing::{debug, info};

/// Strike limit used when the caller does not choose one
pub const DEFAULT_MAX_STRIKES: u32 = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Settings fixed for the duration of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_strikes: u32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_strikes: u32) -> Self {
        Self { max_strikes }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STRIKES)
    }
}

/// Starting position for a game
///
/// Starts fresh by default; `with_revealed` and `with_strikes` resume from a
/// given position instead.
#[derive(Debug, Clone)]
pub struct Game {
    target: String,
    revealed: Option<Vec<char>>,
    strikes: u32,
    config: GameConfig,
}

impl Game {
    /// A fresh game on `target`
    ///
    /// The target is checked when the game is played: it must be one or more
    /// ASCII letters, or [`play_game`] fails with
    /// [`HangmanError::InvalidTarget`].
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            revealed: None,
            strikes: 0,
            config: GameConfig::default(),
        }
    }

    /// Start a fresh game on a randomly selected word
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn random<S: FractionSource + ?Sized>(words: &[&str], source: &mut S) -> Option<Self> {
        randomly_select_word(words, source).map(Self::new)
    }

    #[must_use]
    pub fn with_revealed(mut self, revealed: Vec<char>) -> Self {
        self.revealed = Some(revealed);
        self
    }

    #[must_use]
    pub fn with_strikes(mut self, strikes: u32) -> Self {
        self.strikes = strikes;
        self
    }

    #[must_use]
    pub fn with_max_strikes(mut self, max_strikes: u32) -> Self {
        self.config.max_strikes = max_strikes;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    fn into_state(self) -> Result<GuessState, HangmanError> {
        validate_target(&self.target)?;
        let revealed = self
            .revealed
            .unwrap_or_else(|| create_blank_sequence(Some(self.target.chars().count())));
        GuessState::resume(self.target, revealed, self.strikes)
    }
}

fn evaluate(state: &GuessState, max_strikes: u32) -> Result<GameStatus, HangmanError> {
    if is_solved(Some(state.revealed()))? {
        Ok(GameStatus::Won)
    } else if state.strikes() >= max_strikes {
        Ok(GameStatus::Lost)
    } else {
        Ok(GameStatus::InProgress)
    }
}

/// Play `game` to completion
///
/// Progress lines and exactly one final `You win!`/`You lose!` line are
/// written to `out`. Invalid guesses are rejected through `input` and
/// prompted for again without changing the game.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is empty or holds anything but ASCII letters
/// - A pre-seeded revealed sequence does not match the target's length
/// - The input runs out before the game is won or lost
/// - Reading input or writing output fails
pub fn play_game<I, W>(game: Game, input: &mut I, out: &mut W) -> Result<GameStatus, HangmanError>
where
    I: InputSource + ?Sized,
    W: Write,
{
    let max_strikes = game.config.max_strikes;
    let mut state = game.into_state()?;

    info!(
        letters = state.revealed().len(),
        strikes = state.strikes(),
        max_strikes,
        "Starting game"
    );
    debug!(word = state.target(), "Target selected");

    loop {
        let status = evaluate(&state, max_strikes)?;
        if status != GameStatus::InProgress {
            write_outcome(out, status, state.target())?;
            info!(?status, strikes = state.strikes(), "Game over");
            return Ok(status);
        }

        let Some(raw) = input.ask_for_a_letter()? else {
            return Err(HangmanError::InputClosed);
        };

        let letter = match validate_input(Some(&raw)) {
            Ok(letter) => letter,
            Err(err @ HangmanError::InvalidInput) => {
                debug!(input = %raw, "Rejected guess");
                input.reject(&err)?;
                continue;
            }
            Err(err) => return Err(err),
        };

        let outcome = state.apply_guess(letter);
        debug!(
            %letter,
            ?outcome,
            revealed = %stringify(Some(state.revealed())),
            strikes = state.strikes(),
            "Applied guess"
        );
        write_status(out, &state, max_strikes)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineInput;
    use crate::wordlists::FixedFractions;
    use std::io::Cursor;

    struct Played {
        result: Result<GameStatus, HangmanError>,
        output: String,
        prompt: String,
    }

    fn play(game: Game, script: &str) -> Played {
        play_bytes(game, script.as_bytes())
    }

    fn play_bytes(game: Game, script: &[u8]) -> Played {
        let mut input = LineInput::new(Cursor::new(script), Vec::new());
        let mut out = Vec::new();
        let result = play_game(game, &mut input, &mut out);

        Played {
            result,
            output: String::from_utf8(out).unwrap(),
            prompt: String::from_utf8(input.into_prompt()).unwrap(),
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn solved_word_wins_immediately() {
        let played = play(Game::new("abc").with_revealed(chars("abc")), "");

        assert_eq!(played.result.unwrap(), GameStatus::Won);
        assert_eq!(played.output, "You win! The word was abc\n");
        assert!(played.prompt.is_empty(), "Should not ask for a letter");
    }

    #[test]
    fn strikes_at_limit_lose_immediately() {
        let game = Game::new("abc")
            .with_revealed(chars("a_c"))
            .with_max_strikes(5)
            .with_strikes(5);
        let played = play(game, "");

        assert_eq!(played.result.unwrap(), GameStatus::Lost);
        assert_eq!(played.output, "You lose! The word was abc\n");
        assert!(played.prompt.is_empty(), "Should not ask for a letter");
    }

    #[test]
    fn seeded_strikes_without_revealed_sequence() {
        let game = Game::new("abc").with_max_strikes(2).with_strikes(2);
        let played = play(game, "");

        assert_eq!(played.result.unwrap(), GameStatus::Lost);
        assert_eq!(played.output, "You lose! The word was abc\n");
    }

    #[test]
    fn continues_until_word_is_revealed() {
        let played = play(Game::new("abc"), "a\nb\nc\n");

        assert_eq!(played.result.unwrap(), GameStatus::Won);
        assert_eq!(played.prompt.matches("Guess a letter:").count(), 3);
        assert_eq!(played.output.matches("You win! The word was abc").count(), 1);
        assert!(!played.output.contains("You lose!"));
        assert!(played.output.ends_with("You win! The word was abc\n"));
    }

    #[test]
    fn continues_until_strikes_run_out() {
        let played = play(Game::new("abc").with_max_strikes(2), "x\na\ny\n");

        assert_eq!(played.result.unwrap(), GameStatus::Lost);
        assert_eq!(played.prompt.matches("Guess a letter:").count(), 3);
        assert_eq!(played.output.matches("You lose! The word was abc").count(), 1);
        assert!(!played.output.contains("You win!"));
    }

    #[test]
    fn default_limit_is_six_strikes() {
        let played = play(Game::new("abc"), "t\nu\nv\nw\nx\ny\nz\n");

        assert_eq!(played.result.unwrap(), GameStatus::Lost);
        assert_eq!(played.prompt.matches("Guess a letter:").count(), 6);
        assert!(played.output.contains("strikes 6/6"));
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let played = play(Game::new("so"), "2\n\n.a\nstring\no\n");

        assert_eq!(played.result.unwrap(), GameStatus::Won);
        assert_eq!(played.prompt.matches("Invalid input, try again.").count(), 3);
        assert_eq!(played.prompt.matches("Guess a letter:").count(), 5);
        assert!(!played.output.contains("strikes 1/"));
    }

    #[test]
    fn non_utf8_line_is_reprompted() {
        let played = play_bytes(Game::new("abc"), b"\xe9\na\nb\nc\n");

        assert_eq!(played.result.unwrap(), GameStatus::Won);
        assert_eq!(played.prompt.matches("Invalid input, try again.").count(), 1);
        assert_eq!(played.prompt.matches("Guess a letter:").count(), 4);
        assert!(played.output.contains("strikes 0/6"));
    }

    #[test]
    fn unguessable_target_is_rejected_before_prompting() {
        let played = play(Game::new("café"), "c\na\nf\ne\n");

        assert!(matches!(
            played.result,
            Err(HangmanError::InvalidTarget(ref target)) if target == "café"
        ));
        assert!(played.prompt.is_empty());
        assert!(played.output.is_empty());
    }

    #[test]
    fn empty_target_is_rejected() {
        let played = play(Game::new(""), "");
        assert!(matches!(played.result, Err(HangmanError::InvalidTarget(_))));
    }

    #[test]
    fn progress_is_reported_each_turn() {
        let played = play(Game::new("abc"), "b\nz\na\nc\n");

        let lines: Vec<&str> = played.output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "_ b _  [strikes 0/6]  guessed: b",
                "_ b _  [strikes 1/6]  guessed: b, z",
                "a b _  [strikes 1/6]  guessed: a, b, z",
                "a b c  [strikes 1/6]  guessed: a, b, c, z",
                "You win! The word was abc",
            ]
        );
    }

    #[test]
    fn guesses_match_case_insensitively() {
        let played = play(Game::new("Rust"), "R\nu\nS\nT\n");

        assert_eq!(played.result.unwrap(), GameStatus::Won);
        assert!(played.output.contains("R u s t"));
        assert!(played.output.ends_with("You win! The word was Rust\n"));
    }

    #[test]
    fn repeated_correct_letter_is_not_a_strike() {
        let played = play(Game::new("ab").with_max_strikes(1), "a\na\nb\n");
        assert_eq!(played.result.unwrap(), GameStatus::Won);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let played = play(Game::new("abc"), "a\n");

        assert!(matches!(played.result, Err(HangmanError::InputClosed)));
        assert!(!played.output.contains("You win!"));
        assert!(!played.output.contains("You lose!"));
    }

    #[test]
    fn mismatched_seed_is_rejected_before_prompting() {
        let played = play(Game::new("abc").with_revealed(chars("a_")), "a\n");

        assert!(matches!(
            played.result,
            Err(HangmanError::LengthMismatch { .. })
        ));
        assert!(played.prompt.is_empty());
        assert!(played.output.is_empty());
    }

    #[test]
    fn random_game_uses_fraction_source() {
        let words = ["first", "second", "third"];
        let mut source = FixedFractions::new([0.5]);

        let game = Game::random(&words, &mut source).unwrap();
        assert_eq!(game.target(), "second");
        assert_eq!(game.config(), GameConfig::default());
    }

    #[test]
    fn random_game_needs_words() {
        let empty: [&str; 0] = [];
        let mut source = FixedFractions::new([0.5]);
        assert!(Game::random(&empty, &mut source).is_none());
    }

    #[test]
    fn config_applies_strike_limit() {
        let game = Game::new("abc").with_config(GameConfig::new(1));
        let played = play(game, "z\n");

        assert_eq!(played.result.unwrap(), GameStatus::Lost);
    }
}
