use std::fmt::Display;

use thiserror::Error;

/// Inactive describes why the current game can't accept a guess.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Inactive {
    NotStarted,
    Exhausted,
    Won,
}

impl Display for Inactive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inactive::Exhausted => write!(
                f,
                "You've reached the maximum number of guesses - please start a new game"
            ),
            Inactive::NotStarted | Inactive::Won => write!(
                f,
                "You need to start a new game before you start guessing"
            ),
        }
    }
}

/// GameError is returned to the player when a guess is rejected. None of these
/// are fatal: the player can fix the guess or start a new game.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GameError {
    #[error("Please make sure guesses have {expected} letters")]
    InvalidGuessLength { expected: usize },

    #[error("Please make sure guesses are valid words")]
    InvalidGuessWord(String),

    #[error("{0}")]
    GameNotActive(Inactive),

    #[error("Did you mean to query game_id:{active}")]
    GameIdMismatch { active: u32 },
}
