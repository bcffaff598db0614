//! Error types for Word Quest sessions
//!
//! None of these is fatal: each is scoped to a single operation on a single
//! session, and the session is left unchanged whenever one is returned.

use crate::core::ValidationError;
use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Why a word source could not supply a target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("word list is empty")]
    Empty,
    #[error("cannot read word list {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Failure talking to a remote scoring service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("scoring service unreachable: {0}")]
    Transport(String),
    #[error("malformed scoring response: {0}")]
    Malformed(String),
}

/// Error returned by a session operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess was refused before scoring; fix the input and resubmit
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session is already won or lost; start a new one
    #[error("The game is over. Start a new game to keep playing.")]
    SessionTerminated,

    /// The configured word source failed and the fallback list was used
    #[error("word source unavailable: {0}")]
    WordSourceUnavailable(#[from] WordSourceError),

    /// The remote scorer failed; the same guess may be retried
    #[error("could not score the guess: {0}")]
    RemoteScoringFailure(#[from] RemoteError),

    /// A remote scoring request is outstanding; new guesses are rejected
    #[error("still scoring the previous guess")]
    ScoringInFlight,

    /// Local scoring was requested on a session with no local target
    #[error("this session is scored by a remote service")]
    RemoteScoringRequired,

    /// A remote response arrived that does not belong to the outstanding request
    #[error("no outstanding scoring request matches this response")]
    UnexpectedResolution,
}

impl GameError {
    /// Whether resubmitting (possibly corrected) input can succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::ScoringInFlight | Self::RemoteScoringFailure(_)
        )
    }
}
