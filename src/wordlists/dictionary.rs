//! Set of words accepted as guesses in strict mode

use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words
    ///
    /// Entries are lowercased; entries that are not valid words are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// The embedded allowed list plus every embedded target
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ALLOWED.iter().chain(ANSWERS))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
