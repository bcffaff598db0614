//! Word lists and target sources
//!
//! The embedded lists are generated at build time from `data/`. Sessions draw
//! their targets through the [`WordSource`] trait, and fall back to
//! [`FALLBACK_WORDS`] when a source has nothing to give.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use source::{FALLBACK_WORDS, FileSource, FixedWord, ListSource, WordSource, draw_target};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn fallback_words_are_valid() {
        assert!(!FALLBACK_WORDS.is_empty());
        for &word in FALLBACK_WORDS {
            assert!(crate::core::Word::new(word).is_ok(), "bad fallback '{word}'");
        }
    }
}
