//! Per-letter keyboard aggregate
//!
//! Remembers the strongest result ever seen for each letter in a session.

use super::feedback::{Feedback, LetterResult};
use super::word::Word;

/// Best known result for each letter a-z
///
/// Entries only strengthen: `Absent` → `Present` → `Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    letters: [Option<LetterResult>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the aggregate
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::{KeyboardState, LetterResult, Word, score};
    ///
    /// let target = Word::new("graph").unwrap();
    /// let mut keyboard = KeyboardState::new();
    ///
    /// let guess = Word::new("train").unwrap();
    /// keyboard.record(&guess, &score(&target, &guess));
    ///
    /// assert_eq!(keyboard.get('r'), Some(LetterResult::Correct));
    /// assert_eq!(keyboard.get('t'), Some(LetterResult::Absent));
    /// assert_eq!(keyboard.get('z'), None);
    /// ```
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.chars().iter().zip(feedback.results()) {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            *slot = Some(slot.map_or(result, |existing| existing.max(result)));
        }
    }

    /// Best result recorded for a letter, if it has been guessed
    ///
    /// Uppercase letters are folded to lowercase; anything else is `None`.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[(letter as u8 - b'a') as usize]
        } else {
            None
        }
    }

    /// Iterate over guessed letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.letters
            .iter()
            .zip('a'..='z')
            .filter_map(|(result, letter)| result.map(|r| (letter, r)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.letters = [None; 26];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn play(keyboard: &mut KeyboardState, target: &str, guess: &str) {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        keyboard.record(&guess, &score(&target, &guess));
    }

    #[test]
    fn starts_empty() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.iter().count(), 0);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "graph", "train");
        assert_eq!(keyboard.get('a'), Some(LetterResult::Correct));

        // 'a' lands out of position here
        play(&mut keyboard, "graph", "alarm");
        assert_eq!(keyboard.get('a'), Some(LetterResult::Correct));
    }

    #[test]
    fn absent_upgrades_to_present_then_correct() {
        let mut keyboard = KeyboardState::new();

        play(&mut keyboard, "debug", "cache");
        assert_eq!(keyboard.get('e'), Some(LetterResult::Present));
        assert_eq!(keyboard.get('c'), Some(LetterResult::Absent));

        play(&mut keyboard, "debug", "beach");
        assert_eq!(keyboard.get('e'), Some(LetterResult::Correct));
        assert_eq!(keyboard.get('b'), Some(LetterResult::Present));
    }

    #[test]
    fn duplicate_letter_keeps_strongest_within_one_guess() {
        let mut keyboard = KeyboardState::new();
        // 'r' is present once and absent once in this guess
        play(&mut keyboard, "query", "array");
        assert_eq!(keyboard.get('r'), Some(LetterResult::Present));
        assert_eq!(keyboard.get('y'), Some(LetterResult::Correct));
    }

    #[test]
    fn get_folds_case_and_ignores_non_letters() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "graph", "graph");
        assert_eq!(keyboard.get('G'), Some(LetterResult::Correct));
        assert_eq!(keyboard.get('1'), None);
    }

    #[test]
    fn iter_is_alphabetical() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "graph", "stack");
        let letters: String = keyboard.iter().map(|(letter, _)| letter).collect();
        assert_eq!(letters, "ackst");
    }

    #[test]
    fn clear_resets_everything() {
        let mut keyboard = KeyboardState::new();
        play(&mut keyboard, "graph", "stack");
        keyboard.clear();
        assert!(keyboard.is_empty());
    }
}
