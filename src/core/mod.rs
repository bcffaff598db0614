//! Core domain types for Word Quest
//!
//! This module contains the pure game vocabulary: validated words, the
//! two-pass scorer and the per-letter keyboard aggregate. Nothing here does
//! I/O or holds session state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterResult, ScoreError, score, score_str};
pub use keyboard::KeyboardState;
pub use word::{ValidationError, WORD_LEN, Word};
