//! Game setup shared by the terminal front-ends
//!
//! Bundles a word source, session options and RNG so the front-ends can
//! start game after game, and hides whether guesses are scored locally or
//! through the remote scoring path.

use crate::config::{ConfigError, GameConfig};
use crate::core::Word;
use crate::error::Result;
use crate::session::{LocalApi, Session, SessionOptions, TargetOrigin, Turn};
use crate::wordlists::{WordSource, draw_target};
use rand::rngs::StdRng;

/// Factory for games
pub struct GameSetup {
    source: Box<dyn WordSource + Send>,
    options: SessionOptions,
    remote: bool,
    rng: StdRng,
}

impl GameSetup {
    #[must_use]
    pub fn new(
        source: Box<dyn WordSource + Send>,
        options: SessionOptions,
        remote: bool,
        rng: StdRng,
    ) -> Self {
        Self {
            source,
            options,
            remote,
            rng,
        }
    }

    /// # Errors
    /// `ConfigError` if the strict-mode dictionary cannot be loaded.
    pub fn from_config(config: &GameConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(
            config.word_source(),
            config.session_options()?,
            config.remote,
            config.rng(),
        ))
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Start a new game
    ///
    /// In remote mode the target is handed to an in-process scoring service
    /// and the session itself never sees it.
    pub fn new_game(&mut self) -> Game {
        if self.remote {
            let (target, failure) = draw_target(self.source.as_mut(), &mut self.rng);
            Game {
                session: Session::remote(self.options.clone()),
                service: Some(LocalApi::new(target)),
                fallback: failure.map(|reason| TargetOrigin::Fallback { reason }),
            }
        } else {
            let session = Session::start(self.source.as_mut(), self.options.clone(), &mut self.rng);
            let fallback = matches!(session.origin(), TargetOrigin::Fallback { .. })
                .then(|| session.origin().clone());
            Game {
                session,
                service: None,
                fallback,
            }
        }
    }
}

/// One game plus its scorer
pub struct Game {
    pub session: Session,
    service: Option<LocalApi>,
    fallback: Option<TargetOrigin>,
}

impl Game {
    /// Submit a guess with whichever scorer this game uses
    ///
    /// # Errors
    /// See [`Session::submit`] and [`Session::submit_remote`].
    pub fn submit(&mut self, guess: &str) -> Result<Turn> {
        match self.service.as_mut() {
            Some(service) => self.session.submit_remote(guess, service),
            None => self.session.submit(guess),
        }
    }

    /// Submit the typed row
    ///
    /// # Errors
    /// See [`Session::commit`] and [`Session::commit_remote`].
    pub fn commit(&mut self) -> Result<Turn> {
        match self.service.as_mut() {
            Some(service) => self.session.commit_remote(service),
            None => self.session.commit(),
        }
    }

    /// The answer, whoever holds it
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.session
            .target()
            .or_else(|| self.service.as_ref().map(LocalApi::target))
    }

    /// Set when the configured word source failed and a fallback word is in play
    #[must_use]
    pub const fn fallback(&self) -> Option<&TargetOrigin> {
        self.fallback.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;
    use crate::wordlists::{FixedWord, ListSource};
    use rand::SeedableRng;

    fn setup(word: &str, remote: bool) -> GameSetup {
        GameSetup::new(
            Box::new(FixedWord(Word::new(word).unwrap())),
            SessionOptions::default(),
            remote,
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn local_game_scores_locally() {
        let mut game = setup("graph", false).new_game();
        assert!(!game.session.is_remote());
        assert_eq!(game.submit("graph").unwrap().state, SessionState::Won);
        assert_eq!(game.answer().unwrap().text(), "graph");
    }

    #[test]
    fn remote_game_hides_target_from_session() {
        let mut game = setup("graph", true).new_game();
        assert!(game.session.is_remote());
        assert!(game.session.target().is_none());
        assert_eq!(game.answer().unwrap().text(), "graph");

        for letter in "graph".chars() {
            game.session.type_letter(letter);
        }
        assert_eq!(game.commit().unwrap().state, SessionState::Won);
    }

    #[test]
    fn fallback_is_reported() {
        let mut setup = GameSetup::new(
            Box::new(ListSource::default()),
            SessionOptions::default(),
            true,
            StdRng::seed_from_u64(1),
        );
        assert!(setup.new_game().fallback().is_some());
        assert!(setup.is_remote());
    }

    #[test]
    fn from_config_defaults() {
        let mut setup = GameSetup::from_config(&GameConfig::default()).unwrap();
        let game = setup.new_game();
        assert!(game.fallback().is_none());
        assert!(!game.session.is_remote());
    }
}
