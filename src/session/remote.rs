//! Remote scoring contract
//!
//! Sessions can be refereed by an external scoring service instead of a
//! local target. The service answers in the JSON shape of the public
//! Wordle scoring API:
//!
//! ```json
//! { "guess": "crane", "was_correct": false,
//!   "character_info": [ { "char": "c", "scoring": { "in_word": true, "correct_idx": false } } ] }
//! ```
//!
//! [`ApiResponse::feedback`] translates that shape into [`Feedback`].

use crate::core::{Feedback, LetterResult, WORD_LEN, Word, score};
use crate::error::RemoteError;
use serde::{Deserialize, Serialize};

/// Per-letter scoring flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    #[serde(default)]
    pub in_word: bool,
    #[serde(default)]
    pub correct_idx: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(default)]
    pub scoring: Option<Scoring>,
}

/// Body returned by the scoring service for one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub guess: String,
    pub was_correct: bool,
    #[serde(default)]
    pub character_info: Vec<CharacterInfo>,
}

impl ApiResponse {
    /// Parse a response body
    ///
    /// # Errors
    /// `RemoteError::Malformed` if the body is not a valid response object.
    pub fn from_json(body: &str) -> Result<Self, RemoteError> {
        serde_json::from_str(body).map_err(|e| RemoteError::Malformed(e.to_string()))
    }

    /// Serialize to the wire format
    ///
    /// # Errors
    /// `RemoteError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, RemoteError> {
        serde_json::to_string(self).map_err(|e| RemoteError::Malformed(e.to_string()))
    }

    /// Build the response a service would send for a locally scored guess
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Self {
        let character_info = guess
            .text()
            .chars()
            .zip(feedback.results())
            .map(|(ch, result)| CharacterInfo {
                ch,
                scoring: Some(Scoring {
                    in_word: *result != LetterResult::Absent,
                    correct_idx: *result == LetterResult::Correct,
                }),
            })
            .collect();

        Self {
            guess: guess.text().to_string(),
            was_correct: feedback.is_perfect(),
            character_info,
        }
    }

    /// Translate into per-letter results
    ///
    /// `was_correct` forces every position to `Correct`. Otherwise a letter
    /// is `Correct` when it is in the word at the right index, `Present`
    /// when it is only in the word, and `Absent` otherwise.
    ///
    /// # Errors
    /// `RemoteError::Malformed` when a non-winning response does not carry
    /// exactly five letters.
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::LetterResult::*;
    /// use word_quest::session::ApiResponse;
    ///
    /// let body = r#"{"was_correct": false, "character_info": [
    ///     {"char": "s", "scoring": {"in_word": true, "correct_idx": true}},
    ///     {"char": "t", "scoring": {"in_word": true, "correct_idx": false}},
    ///     {"char": "a", "scoring": {"in_word": false, "correct_idx": false}},
    ///     {"char": "c", "scoring": {"in_word": false, "correct_idx": false}},
    ///     {"char": "k"}
    /// ]}"#;
    /// let feedback = ApiResponse::from_json(body).unwrap().feedback().unwrap();
    /// assert_eq!(feedback.results(), &[Correct, Present, Absent, Absent, Absent]);
    /// ```
    pub fn feedback(&self) -> Result<Feedback, RemoteError> {
        if self.was_correct {
            return Ok(Feedback::PERFECT);
        }

        if self.character_info.len() != WORD_LEN {
            return Err(RemoteError::Malformed(format!(
                "expected {WORD_LEN} letters, got {}",
                self.character_info.len()
            )));
        }

        let mut results = [LetterResult::Absent; WORD_LEN];
        for (slot, info) in results.iter_mut().zip(&self.character_info) {
            *slot = match info.scoring {
                Some(Scoring { correct_idx: true, .. }) => LetterResult::Correct,
                Some(Scoring { in_word: true, .. }) => LetterResult::Present,
                _ => LetterResult::Absent,
            };
        }

        Ok(Feedback::new(results))
    }
}

/// A service that scores guesses on behalf of a session
pub trait ScoringService {
    /// Score one guess
    ///
    /// # Errors
    /// `RemoteError` on transport failure or an unusable response.
    fn score_guess(&mut self, guess: &Word) -> Result<ApiResponse, RemoteError>;
}

/// In-process scoring service over a hidden target
///
/// Answers with the same response shape as the public API, so the remote
/// code path can be played without a network.
#[derive(Debug, Clone)]
pub struct LocalApi {
    target: Word,
}

impl LocalApi {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl ScoringService for LocalApi {
    fn score_guess(&mut self, guess: &Word) -> Result<ApiResponse, RemoteError> {
        Ok(ApiResponse::from_feedback(guess, &score(&self.target, guess)))
    }
}

/// Scoring service over a raw transport that returns JSON bodies
///
/// The transport receives the guess and returns the response body, or a
/// transport error message.
pub struct JsonTransport<F> {
    send: F,
}

impl<F> JsonTransport<F>
where
    F: FnMut(&str) -> Result<String, String>,
{
    pub const fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F> ScoringService for JsonTransport<F>
where
    F: FnMut(&str) -> Result<String, String>,
{
    fn score_guess(&mut self, guess: &Word) -> Result<ApiResponse, RemoteError> {
        let body = (self.send)(guess.text()).map_err(RemoteError::Transport)?;
        ApiResponse::from_json(&body)
    }
}
