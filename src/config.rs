//! Game configuration
//!
//! Loaded from a TOML file; every field is optional and command-line flags
//! override what the file says.
//!
//! ```toml
//! word_list = "words/targets.txt"
//! allowed_list = "words/allowed.txt"
//! require_known_word = true
//! remote = false
//! seed = 42
//! ```

use crate::session::SessionOptions;
use crate::wordlists::{Dictionary, FileSource, ListSource, WordSource, loader::load_from_file};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read allowed word list {path}: {source}")]
    AllowedList {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Target word list file; the embedded list when unset
    pub word_list: Option<PathBuf>,
    /// Dictionary file for strict mode; the embedded lists when unset
    pub allowed_list: Option<PathBuf>,
    /// Reject guesses that are not in the dictionary
    pub require_known_word: bool,
    /// Score guesses through the remote scoring path
    pub remote: bool,
    /// Seed for target selection; entropy from the OS when unset
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse` if
    /// it is not valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` on invalid TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Source of session targets
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource + Send> {
        match &self.word_list {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(ListSource::embedded()),
        }
    }

    /// Guess acceptance policy for new sessions
    ///
    /// # Errors
    /// `ConfigError::AllowedList` if strict mode names an unreadable file.
    pub fn session_options(&self) -> Result<SessionOptions, ConfigError> {
        if !self.require_known_word {
            return Ok(SessionOptions::default());
        }

        let dictionary = match &self.allowed_list {
            Some(path) => {
                let words = load_from_file(path).map_err(|source| ConfigError::AllowedList {
                    path: path.clone(),
                    source,
                })?;
                Dictionary::from_words(words.iter().map(|w| w.text()))
            }
            None => Dictionary::embedded(),
        };

        Ok(SessionOptions {
            require_known_word: true,
            dictionary: Some(Arc::new(dictionary)),
        })
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
