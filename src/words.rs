use std::{collections::HashSet, path::Path};

use anyhow::Context;
use log::*;
use rand::seq::SliceRandom;

use crate::wordle::WORD_LENGTH;

/// WordList holds every word a player may guess. Target words are drawn from the
/// same list.
#[derive(Debug, Default)]
pub struct WordList {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordList {
    /// `from_words` builds a list from the given words, lowercasing them and dropping
    /// duplicates and anything that isn't a WORD_LENGTH ASCII word.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::default();
        for word in words {
            let word = word.as_ref().trim().to_ascii_lowercase();
            if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                debug!("Skipping word list entry '{}'", word);
                continue;
            }
            if list.lookup.insert(word.clone()) {
                list.words.push(word);
            }
        }
        list
    }

    // parse reads one word per line, skipping empty lines and lines that start with a '#'.
    pub fn parse(contents: &str) -> WordList {
        WordList::from_words(
            contents
                .lines()
                .filter(|s| !s.trim().starts_with('#'))
                .filter(|s| !s.trim().is_empty()),
        )
    }

    /// `load` reads the word list from a file, one word per line.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<WordList> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .context(format!("Error reading word list {}", path.display()))?;

        let list = WordList::parse(&contents);
        if list.is_empty() {
            anyhow::bail!("no {}-letter words found in {}", WORD_LENGTH, path.display())
        }
        Ok(list)
    }

    /// Returns true if the word (in any case) is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_ascii_lowercase())
    }

    /// Picks a word uniformly at random.
    pub fn choose(&self) -> Option<&String> {
        self.words.choose(&mut rand::thread_rng())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
