//! Guess session state machine
//!
//! A [`Session`] owns one game: the referee (a local target or a remote
//! scoring service), the guess history, the row being typed, the keyboard
//! aggregate and the game state.
//!
//! ```text
//!              submit / resolve_remote(Ok)
//!   InProgress ───────────────────────────► Won | Lost
//!      │   ▲
//!      │   │ resolve_remote (Ok, game continues | Err)
//!      ▼   │
//!   AwaitingRemote
//! ```
//!
//! Every operation either succeeds or leaves the session untouched.

mod remote;

pub use remote::{ApiResponse, CharacterInfo, JsonTransport, LocalApi, Scoring, ScoringService};

use crate::core::{Feedback, KeyboardState, ValidationError, WORD_LEN, Word, score};
use crate::error::{GameError, RemoteError, Result, WordSourceError};
use crate::wordlists::{Dictionary, WordSource, draw_target};
use rand::RngCore;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Guesses allowed per session
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    /// A guess has been sent to the remote scorer and not yet resolved
    AwaitingRemote(Word),
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Where the session's target came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOrigin {
    /// Drawn from the configured word source
    Source,
    /// Supplied directly by the caller
    Fixed,
    /// The word source failed; a built-in fallback word was used
    Fallback { reason: WordSourceError },
    /// No local target: a scoring service referees the game
    Remote,
}

/// Guess acceptance policy
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Reject guesses that are not in the dictionary before scoring
    pub require_known_word: bool,
    /// Dictionary for strict mode; the embedded lists are used when unset
    pub dictionary: Option<Arc<Dictionary>>,
}

impl SessionOptions {
    /// Strict mode over the given dictionary
    #[must_use]
    pub fn strict(dictionary: Dictionary) -> Self {
        Self {
            require_known_word: true,
            dictionary: Some(Arc::new(dictionary)),
        }
    }

    fn check_known(&self, guess: &Word) -> std::result::Result<(), ValidationError> {
        if !self.require_known_word {
            return Ok(());
        }

        static EMBEDDED: OnceLock<Dictionary> = OnceLock::new();
        let dictionary = self
            .dictionary
            .as_deref()
            .unwrap_or_else(|| EMBEDDED.get_or_init(Dictionary::embedded));

        if dictionary.contains(guess) {
            Ok(())
        } else {
            Err(ValidationError::NotInWordList(guess.text().to_string()))
        }
    }
}

/// One scored guess in the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub keyboard: KeyboardState,
    pub state: SessionState,
}

/// Handle for a guess sent to a remote scorer
///
/// Hand it back to [`Session::resolve_remote`] together with the service's
/// answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    ticket: u64,
    guess: Word,
}

impl PendingGuess {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }
}

#[derive(Debug, Clone)]
enum Referee {
    Local(Word),
    Remote,
}

/// A single game of Word Quest
#[derive(Debug, Clone)]
pub struct Session {
    referee: Referee,
    origin: TargetOrigin,
    options: SessionOptions,
    history: Vec<GuessRecord>,
    input: String,
    keyboard: KeyboardState,
    state: SessionState,
    next_ticket: u64,
}

impl Session {
    fn with_referee(referee: Referee, origin: TargetOrigin, options: SessionOptions) -> Self {
        Self {
            referee,
            origin,
            options,
            history: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LEN),
            keyboard: KeyboardState::new(),
            state: SessionState::InProgress,
            next_ticket: 0,
        }
    }

    /// Start a session with a target drawn from `source`
    ///
    /// If the source has no usable word, a built-in fallback word is used
    /// and the failure is kept in [`Session::origin`].
    pub fn start(
        source: &mut dyn WordSource,
        options: SessionOptions,
        rng: &mut dyn RngCore,
    ) -> Self {
        let (target, failure) = draw_target(source, rng);
        let origin = failure.map_or(TargetOrigin::Source, |reason| TargetOrigin::Fallback {
            reason,
        });
        info!(?origin, "new session");
        Self::with_referee(Referee::Local(target), origin, options)
    }

    /// Start a session with a known target
    ///
    /// # Examples
    /// ```
    /// use word_quest::core::Word;
    /// use word_quest::session::{Session, SessionOptions, SessionState};
    ///
    /// let target = Word::new("graph").unwrap();
    /// let mut session = Session::with_target(target, SessionOptions::default());
    /// session.submit("train").unwrap();
    /// let turn = session.submit("graph").unwrap();
    ///
    /// assert!(turn.feedback.is_perfect());
    /// assert_eq!(turn.state, SessionState::Won);
    /// ```
    #[must_use]
    pub fn with_target(target: Word, options: SessionOptions) -> Self {
        Self::with_referee(Referee::Local(target), TargetOrigin::Fixed, options)
    }

    /// Start a session refereed by a scoring service
    #[must_use]
    pub fn remote(options: SessionOptions) -> Self {
        info!("new remote-scored session");
        Self::with_referee(Referee::Remote, TargetOrigin::Remote, options)
    }

    /// Replace this session with a fresh one using the same options
    ///
    /// Remote sessions stay remote; local sessions draw a new target.
    pub fn restart(&mut self, source: &mut dyn WordSource, rng: &mut dyn RngCore) {
        let options = self.options.clone();
        *self = match self.referee {
            Referee::Local(_) => Self::start(source, options, rng),
            Referee::Remote => Self::remote(options),
        };
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn origin(&self) -> &TargetOrigin {
        &self.origin
    }

    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The local target, if this session has one
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        match &self.referee {
            Referee::Local(word) => Some(word),
            Referee::Remote => None,
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self.referee, Referee::Remote)
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input cursor as (row, column)
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.history.len(), self.input.len())
    }

    /// Type one letter into the current row
    ///
    /// Returns false (and changes nothing) if the row is full, the letter is
    /// not A-Z, or the session is not accepting input.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if self.state != SessionState::InProgress
            || self.input.len() >= WORD_LEN
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.input.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) -> bool {
        if self.state != SessionState::InProgress {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the typed row against the local target
    ///
    /// The row is cleared on success and kept on failure.
    ///
    /// # Errors
    /// Same as [`Session::submit`].
    pub fn commit(&mut self) -> Result<Turn> {
        let row = self.input.clone();
        self.submit(&row)
    }

    /// Submit the typed row to a scoring service
    ///
    /// # Errors
    /// Same as [`Session::submit_remote`].
    pub fn commit_remote(&mut self, service: &mut dyn ScoringService) -> Result<Turn> {
        let row = self.input.clone();
        self.submit_remote(&row, service)
    }

    /// Score a guess against the local target
    ///
    /// # Errors
    /// - `SessionTerminated` once the game is won or lost
    /// - `ScoringInFlight` while a remote request is outstanding
    /// - `Validation` for a malformed or (in strict mode) unknown guess
    /// - `RemoteScoringRequired` if the session has no local target
    pub fn submit(&mut self, guess: &str) -> Result<Turn> {
        let guess = self.accept(guess)?;
        let Referee::Local(target) = &self.referee else {
            return Err(GameError::RemoteScoringRequired);
        };

        let feedback = score(target, &guess);
        let won = &guess == target;
        Ok(self.apply(guess, feedback, won))
    }

    /// Validate a guess and mark it as sent to a scoring service
    ///
    /// The session stays in `AwaitingRemote` until
    /// [`Session::resolve_remote`] is called with the returned handle; every
    /// other submission is rejected meanwhile. The service's verdict is
    /// authoritative even if the session also has a local target.
    ///
    /// # Errors
    /// Same preconditions as [`Session::submit`].
    pub fn begin_remote(&mut self, guess: &str) -> Result<PendingGuess> {
        let guess = self.accept(guess)?;
        self.next_ticket += 1;
        self.state = SessionState::AwaitingRemote(guess.clone());
        debug!(%guess, ticket = self.next_ticket, "awaiting remote score");
        Ok(PendingGuess {
            ticket: self.next_ticket,
            guess,
        })
    }

    /// Apply the scoring service's answer for an outstanding guess
    ///
    /// On failure the session returns to `InProgress` without recording the
    /// guess, so the player can resubmit it.
    ///
    /// # Errors
    /// - `UnexpectedResolution` if `pending` is not the outstanding request
    /// - `RemoteScoringFailure` if the service failed or answered for a
    ///   different word or with an unusable body
    pub fn resolve_remote(
        &mut self,
        pending: PendingGuess,
        outcome: std::result::Result<ApiResponse, RemoteError>,
    ) -> Result<Turn> {
        if pending.ticket != self.next_ticket
            || self.state != SessionState::AwaitingRemote(pending.guess.clone())
        {
            return Err(GameError::UnexpectedResolution);
        }

        let feedback = outcome.and_then(|response| {
            if !response.guess.is_empty()
                && !response.guess.eq_ignore_ascii_case(pending.guess.text())
            {
                return Err(RemoteError::Malformed(format!(
                    "response is for '{}', expected '{}'",
                    response.guess, pending.guess
                )));
            }
            Ok((response.feedback()?, response.was_correct))
        });

        match feedback {
            Ok((feedback, was_correct)) => {
                let won = was_correct || feedback.is_perfect();
                Ok(self.apply(pending.guess, feedback, won))
            }
            Err(err) => {
                self.state = SessionState::InProgress;
                debug!(guess = %pending.guess, %err, "remote scoring failed");
                Err(GameError::RemoteScoringFailure(err))
            }
        }
    }

    /// Score a guess through a service in one step
    ///
    /// # Errors
    /// Union of [`Session::begin_remote`] and [`Session::resolve_remote`].
    pub fn submit_remote(&mut self, guess: &str, service: &mut dyn ScoringService) -> Result<Turn> {
        let pending = self.begin_remote(guess)?;
        let outcome = service.score_guess(pending.guess());
        self.resolve_remote(pending, outcome)
    }

    fn accept(&self, guess: &str) -> Result<Word> {
        match self.state {
            SessionState::Won | SessionState::Lost => return Err(GameError::SessionTerminated),
            SessionState::AwaitingRemote(_) => return Err(GameError::ScoringInFlight),
            SessionState::InProgress => {}
        }

        let guess = Word::new(guess)?;
        self.options.check_known(&guess)?;
        Ok(guess)
    }

    fn apply(&mut self, guess: Word, feedback: Feedback, won: bool) -> Turn {
        debug!(%guess, %feedback, row = self.history.len(), "scored guess");

        self.keyboard.record(&guess, &feedback);
        self.history.push(GuessRecord {
            word: guess.clone(),
            feedback,
        });
        self.input.clear();

        self.state = if won {
            SessionState::Won
        } else if self.history.len() >= MAX_GUESSES {
            SessionState::Lost
        } else {
            SessionState::InProgress
        };

        if self.state.is_terminal() {
            info!(state = ?self.state, guesses = self.history.len(), "session finished");
        }

        Turn {
            guess,
            feedback,
            keyboard: self.keyboard,
            state: self.state.clone(),
        }
    }
}
