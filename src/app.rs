/// App is the main bot application. It owns the word list and the single active game,
/// and implements the checks a guess goes through before it is scored.
use anyhow::{anyhow, bail, Result};
use log::*;
use mobot::*;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{GameError, Inactive};
use crate::wordle::{Game, GuessResult, WORD_LENGTH};
use crate::words::WordList;

/// App represents the bot state for the wordle bot.
///
/// Every chat shares the same game: starting a new game replaces it for everyone.
/// All reads and writes of the game go through one lock, so a guess and a new game
/// never interleave.
#[derive(Clone, Default, BotState)]
pub struct App {
    pub game_name: String,
    secret_word: Option<String>,
    words: Arc<WordList>,
    game: Arc<RwLock<Option<Game>>>,
}

impl App {
    /// Creates a new App instance.
    pub fn new(game_name: String, words: WordList) -> App {
        App {
            game_name,
            words: Arc::new(words),
            ..Default::default()
        }
    }

    /// Pins the target word used by every new game instead of picking one at random.
    pub fn set_secret_word(&mut self, word: String) -> Result<()> {
        let word = word.trim().to_ascii_lowercase();
        if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("secret word must be {} letters, got '{}'", WORD_LENGTH, word);
        }

        self.secret_word = Some(word);
        Ok(())
    }

    /// Starts a new game, replacing the current one, and returns its id.
    pub async fn start_game(&self) -> Result<u32> {
        let target_word = match &self.secret_word {
            Some(word) => word.clone(),
            None => self
                .words
                .choose()
                .ok_or(anyhow!("no target words found"))?
                .clone(),
        };

        let game = Game::new(target_word)?;
        let game_id = game.game_id();
        info!("Starting new game {}", game_id);
        debug!("Game {} target word: {}", game_id, game.target_word());

        *self.game.write().await = Some(game);
        Ok(game_id)
    }

    /// Returns the id of the current game, if one was started.
    pub async fn game_id(&self) -> Option<u32> {
        self.game.read().await.as_ref().map(Game::game_id)
    }

    /// Returns true if a game was started and it is still accepting guesses.
    pub async fn can_guess(&self) -> bool {
        self.game
            .read()
            .await
            .as_ref()
            .map(Game::can_guess)
            .unwrap_or(false)
    }

    /// Returns true if the word is the right length and in the word list.
    pub fn is_valid_guess(&self, word: &str) -> bool {
        word.chars().count() == WORD_LENGTH && self.words.contains(word)
    }

    /// Plays a turn in the current game. The game id is optional; when given, it must
    /// match the current game.
    pub async fn play_turn(
        &self,
        game_id: Option<u32>,
        word: &str,
    ) -> std::result::Result<GuessResult, GameError> {
        let mut guard = self.game.write().await;

        let game = match guard.as_mut() {
            Some(game) => game,
            None => {
                warn!("Guess '{}' with no active game", word);
                return Err(GameError::GameNotActive(Inactive::NotStarted));
            }
        };

        if let Some(inactive) = game.inactive() {
            warn!("Guess '{}' on finished game {}", word, game.game_id());
            return Err(GameError::GameNotActive(inactive));
        }

        if let Some(game_id) = game_id {
            if game_id != game.game_id() {
                warn!("Guess for game {} but game {} is active", game_id, game.game_id());
                return Err(GameError::GameIdMismatch {
                    active: game.game_id(),
                });
            }
        }

        if !self.is_valid_guess(word) {
            warn!("Invalid guess '{}' for game {}", word, game.game_id());
            if word.chars().count() != WORD_LENGTH {
                return Err(GameError::InvalidGuessLength {
                    expected: WORD_LENGTH,
                });
            }
            return Err(GameError::InvalidGuessWord(word.to_string()));
        }

        let result = game.make_guess(word)?;
        info!(
            "Game {} guess {} '{}': {} ({} remaining)",
            game.game_id(),
            game.num_guesses(),
            word,
            result
                .letters
                .iter()
                .map(|l| l.verdict())
                .collect::<Vec<_>>()
                .join(", "),
            result.guesses_remaining
        );

        Ok(result)
    }
}
