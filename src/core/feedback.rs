//! Guess scoring and per-letter feedback
//!
//! Each guess position is classified as one of:
//! - `Correct` (green): the letter sits at this index in the target
//! - `Present` (yellow): the letter appears at some other, unclaimed index
//! - `Absent` (gray): no unclaimed occurrence of the letter remains
//!
//! Scoring is two-pass so that repeated letters are never over-counted.

use super::word::{ValidationError, WORD_LEN, Word};
use std::fmt;
use thiserror::Error;

/// Classification of a single guess position
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// Error from the string-level scoring entry point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("target and guess must both be {WORD_LEN} letters (got {target} and {guess})")]
    LengthMismatch { target: usize, guess: usize },
    #[error("invalid word '{word}': {reason}")]
    InvalidWord {
        word: String,
        reason: ValidationError,
    },
}

/// Feedback for one guess: one result per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LEN]);

impl Feedback {
    /// All greens (exact match)
    pub const PERFECT: Self = Self([LetterResult::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LEN]) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LEN] {
        &self.0
    }

    /// Result at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> LetterResult {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given result
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut results = [LetterResult::Absent; WORD_LEN];
        for (slot, ch) in results.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterResult::Correct,
                'Y' | 'y' | '🟨' => LetterResult::Present,
                '-' | '_' | '⬜' => LetterResult::Absent,
                _ => return None,
            };
        }

        Some(Self(results))
    }

    /// Render as an emoji row, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: every exact position match is `Correct` and claims that
///    target index.
/// 2. Second pass: every other guess position, left to right, claims the
///    first unclaimed target index holding the same letter (`Present`), or
///    is `Absent` when none is left.
///
/// The first pass completes before the second begins, so exact matches
/// always win the claim on a target letter.
///
/// # Examples
/// ```
/// use word_quest::core::{LetterResult::*, Word, score};
///
/// let target = Word::new("array").unwrap();
/// let guess = Word::new("radar").unwrap();
/// let feedback = score(&target, &guess);
///
/// assert_eq!(feedback.results(), &[Present, Present, Absent, Correct, Present]);
/// ```
#[must_use]
pub fn score(target: &Word, guess: &Word) -> Feedback {
    let target = target.chars();
    let guess = guess.chars();

    let mut results = [LetterResult::Absent; WORD_LEN];
    let mut claimed = [false; WORD_LEN];

    // Index needed to compare guess[i], target[i] and set both arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess[i] == target[i] {
            results[i] = LetterResult::Correct;
            claimed[i] = true;
        }
    }

    for i in 0..WORD_LEN {
        if results[i] == LetterResult::Correct {
            continue;
        }
        let slot = (0..WORD_LEN).find(|&k| !claimed[k] && target[k] == guess[i]);
        if let Some(k) = slot {
            results[i] = LetterResult::Present;
            claimed[k] = true;
        }
    }

    Feedback(results)
}

/// Score two raw strings
///
/// # Errors
/// `ScoreError::LengthMismatch` when either input is not 5 characters long,
/// `ScoreError::InvalidWord` when one contains anything but ASCII letters.
pub fn score_str(target: &str, guess: &str) -> Result<Feedback, ScoreError> {
    let target_len = target.chars().count();
    let guess_len = guess.chars().count();
    if target_len != WORD_LEN || guess_len != WORD_LEN {
        return Err(ScoreError::LengthMismatch {
            target: target_len,
            guess: guess_len,
        });
    }

    let parse = |word: &str| {
        Word::new(word).map_err(|reason| ScoreError::InvalidWord {
            word: word.to_string(),
            reason,
        })
    };

    Ok(score(&parse(target)?, &parse(guess)?))
}
