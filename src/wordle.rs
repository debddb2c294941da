/// Wordle is a game where you have to guess a word. The word is chosen by the game, and you
/// have 6 attempts to guess it. After each attempt, the game tells you which letters you
/// guessed correctly, and which letters are in the word but in the wrong position.
///
/// This module implements the game logic: scoring a single guess (`assess`) and the
/// lifecycle of a single game (`Game`).
use std::collections::{BTreeSet, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{GameError, Inactive};

/// Number of letters in every target word and guess.
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game.
pub const MAX_GUESSES: u32 = 6;

/// Game ids are reduced into [0, GAME_ID_SPACE).
pub const GAME_ID_SPACE: u128 = 1_000_000;

/// Shown in `known_letters` for positions that haven't been solved yet.
pub const PLACEHOLDER: char = '*';

/// State represents the current player state of a game.
#[derive(Debug, Eq, PartialEq)]
pub enum State {
    Playing,
    Won,
    Lost,
}

/// Letter represents the position of a single letter in an attempted
/// word. Letters are stored uppercase.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Letter {
    Correct(char),
    CorrectButWrongPosition(char),
    Wrong(char),
}

impl Letter {
    /// `verdict` returns the string reported to the player for this letter.
    pub fn verdict(&self) -> &'static str {
        match self {
            Letter::Correct(_) => "correct",
            Letter::CorrectButWrongPosition(_) => "wrong position",
            Letter::Wrong(_) => "incorrect",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Letter::Correct(_))
    }
}

/// Assessment is the outcome of scoring one guess against the target word.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Assessment {
    /// One Letter per position of the guess.
    pub letters: Vec<Letter>,

    /// Letters this guess proved to be in the word.
    pub present: BTreeSet<char>,

    /// Letters this guess proved not to be in the word at all.
    pub absent: BTreeSet<char>,
}

impl Assessment {
    pub fn is_match(&self) -> bool {
        self.letters.iter().all(Letter::is_correct)
    }
}

/// `assess` compares the given word to the target word, and returns the positional
/// Letter instances along with the letters it proved present or absent. Both words
/// are expected to be lowercase.
///
/// Duplicates are handled as per the rules of Wordle: every exact match claims one
/// copy of its letter first, then the remaining copies are handed out left to right
/// as CorrectButWrongPosition. Occurrences beyond the target's count are Wrong.
pub fn assess(target_word: &str, word: &str) -> Result<Assessment, GameError> {
    let target = target_word.chars().collect::<Vec<_>>();
    let word = word.chars().collect::<Vec<_>>();
    if word.len() != target.len() {
        return Err(GameError::InvalidGuessLength {
            expected: target.len(),
        });
    }

    // Keep track of the number of times each letter appears in the target word.
    let target_letter_count = target.iter().fold(HashMap::new(), |mut acc, c| {
        *acc.entry(*c).or_insert(0) += 1;
        acc
    });

    // Copies of each letter already claimed, starting with the exact matches.
    let mut credited = word
        .iter()
        .zip(&target)
        .filter(|(w, t)| w == t)
        .fold(HashMap::new(), |mut acc, (w, _)| {
            *acc.entry(*w).or_insert(0) += 1;
            acc
        });

    let mut assessment = Assessment::default();
    for (w, t) in word.iter().zip(&target) {
        let c = w.to_ascii_uppercase();
        let frequency = target_letter_count.get(w).copied().unwrap_or(0);

        let letter = if w == t {
            assessment.present.insert(c);
            Letter::Correct(c)
        } else if frequency == 0 {
            assessment.absent.insert(c);
            Letter::Wrong(c)
        } else {
            assessment.present.insert(c);
            let count = credited.entry(*w).or_insert(0);
            if *count < frequency {
                *count += 1;
                Letter::CorrectButWrongPosition(c)
            } else {
                Letter::Wrong(c)
            }
        };

        assessment.letters.push(letter);
    }

    Ok(assessment)
}

/// `game_id` derives the id of a game from its target word: the MD5 digest of the
/// word, read as a big-endian integer, modulo GAME_ID_SPACE. The same word always
/// gives the same id, and different words may collide.
pub fn game_id(target_word: &str) -> u32 {
    let digest = md5::compute(target_word.as_bytes());
    (u128::from_be_bytes(digest.0) % GAME_ID_SPACE) as u32
}

/// GuessResult is everything the player learns from a single guess, including what
/// earlier guesses in the same game already revealed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GuessResult {
    pub letters: Vec<Letter>,
    pub is_match: bool,
    pub incorrectly_guessed_letters: BTreeSet<char>,
    pub known_letters_in_word: BTreeSet<char>,
    pub known_letters: String,
    pub guesses_remaining: u32,

    /// The target word, uppercase. Only set once the player has run out of guesses.
    pub correct_answer: Option<String>,
}

impl Serialize for GuessResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (i, letter) in self.letters.iter().enumerate() {
            map.serialize_entry(&format!("letter{}", i + 1), letter.verdict())?;
        }
        map.serialize_entry(
            "guess_result",
            if self.is_match { "correct" } else { "incorrect" },
        )?;
        map.serialize_entry(
            "incorrectly_guessed_letters",
            &self.incorrectly_guessed_letters,
        )?;
        map.serialize_entry("known_letters_in_word", &self.known_letters_in_word)?;
        map.serialize_entry("known_letters", &self.known_letters)?;
        map.serialize_entry("guesses_remaining", &self.guesses_remaining)?;
        if let Some(answer) = &self.correct_answer {
            map.serialize_entry("correct_answer", answer)?;
        }
        map.end()
    }
}

/// Game represents a single Wordle game and everything the player has learned
/// about the target word so far.
#[derive(Debug, Clone)]
pub struct Game {
    target_word: String,
    game_id: u32,
    num_guesses: u32,
    is_word_guessed: bool,
    known_letters: Vec<Option<char>>,
    known_letters_in_word: BTreeSet<char>,
    incorrectly_guessed_letters: BTreeSet<char>,
}

impl Game {
    /// `new` creates a new game with the given target word.
    pub fn new(target_word: impl Into<String>) -> anyhow::Result<Game> {
        let target_word = target_word.into().to_lowercase();
        if target_word.chars().count() != WORD_LENGTH {
            anyhow::bail!("target_word must be {} letters long", WORD_LENGTH)
        }

        Ok(Game {
            game_id: game_id(&target_word),
            target_word,
            num_guesses: 0,
            is_word_guessed: false,
            known_letters: vec![None; WORD_LENGTH],
            known_letters_in_word: BTreeSet::new(),
            incorrectly_guessed_letters: BTreeSet::new(),
        })
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn num_guesses(&self) -> u32 {
        self.num_guesses
    }

    pub fn guesses_remaining(&self) -> u32 {
        MAX_GUESSES.saturating_sub(self.num_guesses)
    }

    pub fn state(&self) -> State {
        if self.is_word_guessed {
            State::Won
        } else if self.num_guesses >= MAX_GUESSES {
            State::Lost
        } else {
            State::Playing
        }
    }

    /// `can_guess` returns true while the game is still accepting guesses.
    pub fn can_guess(&self) -> bool {
        self.state() == State::Playing
    }

    /// `inactive` returns why the game stopped accepting guesses, if it has. Running
    /// out of guesses takes precedence, so a win on the last guess reports Exhausted.
    pub fn inactive(&self) -> Option<Inactive> {
        if self.num_guesses >= MAX_GUESSES {
            Some(Inactive::Exhausted)
        } else if self.is_word_guessed {
            Some(Inactive::Won)
        } else {
            None
        }
    }

    /// `known_letters` returns the target word with every unsolved position masked.
    pub fn known_letters(&self) -> String {
        self.known_letters
            .iter()
            .map(|l| l.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// `make_guess` plays a turn and returns what the player now knows. Callers must
    /// check `can_guess` and validate the word first; the guess counter is bumped
    /// before the word is scored, so even a rejected word uses up a guess.
    pub fn make_guess(&mut self, word: &str) -> Result<GuessResult, GameError> {
        self.num_guesses += 1;

        let word = word.to_lowercase();
        let assessment = assess(&self.target_word, &word)?;

        for (i, letter) in assessment.letters.iter().enumerate() {
            if let Letter::Correct(c) = letter {
                self.known_letters[i] = Some(*c);
            }
        }
        self.known_letters_in_word.extend(&assessment.present);
        self.incorrectly_guessed_letters.extend(&assessment.absent);

        let is_match = assessment.is_match();
        if is_match {
            self.is_word_guessed = true;
        }

        let correct_answer = if self.num_guesses >= MAX_GUESSES && !is_match {
            Some(self.target_word.to_uppercase())
        } else {
            None
        };

        Ok(GuessResult {
            letters: assessment.letters,
            is_match,
            incorrectly_guessed_letters: self.incorrectly_guessed_letters.clone(),
            known_letters_in_word: self.known_letters_in_word.clone(),
            known_letters: self.known_letters(),
            guesses_remaining: self.guesses_remaining(),
            correct_answer,
        })
    }
}
