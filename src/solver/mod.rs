//! Automatic play
//!
//! A deliberately naive player: it only ever guesses words that are still
//! consistent with the feedback seen so far. Used by the benchmark and for
//! hints in the terminal front-ends.

mod engine;

pub use engine::Autoplayer;
