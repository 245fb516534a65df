//! Command implementations

pub mod play;

pub use play::{DEFAULT_MAX_STRIKES, Game, GameConfig, GameStatus, play_game};
