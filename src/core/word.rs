//! Word Quest word representation
//!
//! A Word is a validated 5-letter lowercase ASCII word. Targets and guesses
//! share this type, so every scored pair is guaranteed to have equal length.

use std::fmt;
use thiserror::Error;

/// Number of letters in every target and guess
pub const WORD_LEN: usize = 5;

/// Why a guess was refused before scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Finish the word ({WORD_LEN} letters), got {0}")]
    WrongLength(usize),
    #[error("Use only letters A-Z")]
    InvalidCharacters,
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

/// A 5-letter word, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase letters are accepted and stored lowercase, so `"CRANE"` and
    /// `"crane"` are the same word. Length counts characters of the raw input.
    ///
    /// # Errors
    /// Returns `ValidationError::WrongLength` unless the input has exactly 5
    /// characters, and `ValidationError::InvalidCharacters` if any of them is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::Word;
    ///
    /// let word = Word::new("Graph").unwrap();
    /// assert_eq!(word.text(), "graph");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("gr4ph").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(ValidationError::WrongLength(len));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCharacters);
        }

        let text = text.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("stack").unwrap();
        assert_eq!(word.text(), "stack");
        assert_eq!(word.chars(), b"stack");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("GRAPH").unwrap().text(), "graph");
        assert_eq!(Word::new("GrApH").unwrap().text(), "graph");
    }

    #[test]
    fn word_creation_wrong_length() {
        assert_eq!(Word::new("abc"), Err(ValidationError::WrongLength(3)));
        assert_eq!(Word::new("neural"), Err(ValidationError::WrongLength(6)));
        assert_eq!(Word::new(""), Err(ValidationError::WrongLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // 5 characters, 6 bytes
        assert_eq!(
            Word::new("caché"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn letters_that_grow_when_lowercased_are_invalid_not_too_long() {
        // 'İ' lowercases to two characters
        assert_eq!(
            Word::new("\u{130}abcd"),
            Err(ValidationError::InvalidCharacters)
        );
        assert_eq!(Word::new("\u{130}abc"), Err(ValidationError::WrongLength(4)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cach3"), Err(ValidationError::InvalidCharacters));
        assert_eq!(Word::new("cach "), Err(ValidationError::InvalidCharacters));
        assert_eq!(Word::new("cach!"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Cache".parse().unwrap();
        assert_eq!(format!("{word}"), "cache");
    }
}
