//! Word Quest
//!
//! A five-letter word guessing game: a two-pass scorer, a guess session
//! state machine with local or remote scoring, and terminal front-ends.
//!
//! # Quick Start
//!
//! ```rust
//! use word_quest::core::{LetterResult, Word, score_str};
//! use word_quest::session::{Session, SessionOptions, SessionState};
//!
//! let feedback = score_str("array", "radar").unwrap();
//! assert_eq!(feedback.get(3), LetterResult::Correct);
//!
//! let target = Word::new("graph").unwrap();
//! let mut session = Session::with_target(target, SessionOptions::default());
//! session.submit("train").unwrap();
//! let turn = session.submit("graph").unwrap();
//! assert_eq!(turn.state, SessionState::Won);
//! ```

// Core domain types and scoring
pub mod core;

// Error types
pub mod error;

// Configuration file
pub mod config;

// Guess session state machine
pub mod session;

// Word lists and target sources
pub mod wordlists;

// Autoplayer used by benchmarks and hints
pub mod solver;

// Game factory shared by the front-ends
pub mod game;

// Password Vault mini-game
pub mod vault;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
