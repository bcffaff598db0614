//! Consistent-candidate player

use crate::core::{Word, score};
use crate::session::{GuessRecord, Session, SessionState};
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Plays sessions by guessing a random word consistent with the history
pub struct Autoplayer<'a> {
    words: &'a [Word],
}

impl<'a> Autoplayer<'a> {
    /// Create a player that draws its guesses from `words`
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Words that would have produced every recorded feedback
    #[must_use]
    pub fn candidates(&self, history: &[GuessRecord]) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|record| score(candidate, &record.word) == record.feedback)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[GuessRecord]) -> usize {
        self.candidates(history).len()
    }

    /// Pick the next guess, or None if no candidate remains
    pub fn next_guess(&self, history: &[GuessRecord], rng: &mut dyn RngCore) -> Option<&'a Word> {
        self.candidates(history).choose(rng).copied()
    }

    /// Play a local session until it ends or the player runs out of ideas
    ///
    /// Returns the final state.
    pub fn play(&self, session: &mut Session, rng: &mut dyn RngCore) -> SessionState {
        while *session.state() == SessionState::InProgress {
            let Some(guess) = self.next_guess(session.history(), rng) else {
                break;
            };
            if session.submit(guess.text()).is_err() {
                break;
            }
        }
        session.state().clone()
    }
}
