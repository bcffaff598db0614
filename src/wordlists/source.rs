//! Target word sources
//!
//! A session asks its source for one target when it starts. Sources may
//! fail (empty list, unreadable file); [`draw_target`] then substitutes a
//! word from [`FALLBACK_WORDS`] and reports why.

use super::ANSWERS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::error::WordSourceError;
use rand::RngCore;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Built-in targets used when a word source yields nothing
pub const FALLBACK_WORDS: &[&str] = &[
    "array", "query", "stack", "graph", "cloud", "model", "token", "cache", "debug", "float",
];

/// Supplies one target word per session
pub trait WordSource {
    /// Pick a target for a new session
    ///
    /// # Errors
    /// Returns `WordSourceError` when the source has no usable word.
    fn pick_target(&mut self, rng: &mut dyn RngCore) -> Result<Word, WordSourceError>;
}

/// Uniform random choice from an in-memory list
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    words: Vec<Word>,
}

impl ListSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The embedded target list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordSource for ListSource {
    fn pick_target(&mut self, rng: &mut dyn RngCore) -> Result<Word, WordSourceError> {
        self.words.choose(rng).cloned().ok_or(WordSourceError::Empty)
    }
}

/// Word list read from disk the first time a target is needed
///
/// A failed read is not cached, so a later session retries the file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    words: Option<Vec<Word>>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn pick_target(&mut self, rng: &mut dyn RngCore) -> Result<Word, WordSourceError> {
        if self.words.is_none() {
            let words = load_from_file(&self.path).map_err(|e| WordSourceError::Unreadable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
            self.words = Some(words);
        }

        self.words
            .as_deref()
            .and_then(|words| words.choose(rng))
            .cloned()
            .ok_or(WordSourceError::Empty)
    }
}

/// Always the same target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWord(pub Word);

impl WordSource for FixedWord {
    fn pick_target(&mut self, _rng: &mut dyn RngCore) -> Result<Word, WordSourceError> {
        Ok(self.0.clone())
    }
}

/// Draw a target, substituting a fallback word if the source fails
///
/// The second element carries the source's error when the fallback list was
/// used, so callers can surface it.
pub fn draw_target(
    source: &mut dyn WordSource,
    rng: &mut dyn RngCore,
) -> (Word, Option<WordSourceError>) {
    match source.pick_target(rng) {
        Ok(word) => (word, None),
        Err(reason) => {
            warn!(%reason, "word source unavailable, using built-in fallback list");
            (fallback_word(rng), Some(reason))
        }
    }
}

fn fallback_word(rng: &mut dyn RngCore) -> Word {
    let text = FALLBACK_WORDS
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_WORDS[0]);
    Word::new(text).expect("fallback words are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn list_source_picks_from_list() {
        let mut source = ListSource::new(words_from_slice(&["patch", "scope"]));
        for _ in 0..20 {
            let word = source.pick_target(&mut rng()).unwrap();
            assert!(["patch", "scope"].contains(&word.text()));
        }
    }

    #[test]
    fn list_source_is_roughly_uniform() {
        let mut source = ListSource::new(words_from_slice(&["patch", "scope"]));
        let mut rng = rng();
        let patches = (0..1000)
            .filter(|_| source.pick_target(&mut rng).unwrap().text() == "patch")
            .count();
        assert!((350..650).contains(&patches), "got {patches}");
    }

    #[test]
    fn empty_list_source_errors() {
        let mut source = ListSource::default();
        assert_eq!(
            source.pick_target(&mut rng()),
            Err(WordSourceError::Empty)
        );
    }

    #[test]
    fn embedded_source_is_not_empty() {
        assert_eq!(ListSource::embedded().words().len(), ANSWERS.len());
    }

    #[test]
    fn fixed_word_always_returns_it() {
        let mut source = FixedWord(Word::new("debug").unwrap());
        assert_eq!(source.pick_target(&mut rng()).unwrap().text(), "debug");
    }

    #[test]
    fn file_source_reads_lazily() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tuple").unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.pick_target(&mut rng()).unwrap().text(), "tuple");
    }

    #[test]
    fn file_source_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileSource::new(dir.path().join("nope.txt"));
        assert!(matches!(
            source.pick_target(&mut rng()),
            Err(WordSourceError::Unreadable { .. })
        ));
    }

    #[test]
    fn file_source_without_valid_words_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "neural\n12345").unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(
            source.pick_target(&mut rng()),
            Err(WordSourceError::Empty)
        );
    }

    #[test]
    fn draw_target_falls_back() {
        let (word, reason) = draw_target(&mut ListSource::default(), &mut rng());
        assert!(FALLBACK_WORDS.contains(&word.text()));
        assert_eq!(reason, Some(WordSourceError::Empty));
    }

    #[test]
    fn draw_target_uses_source_when_available() {
        let mut source = FixedWord(Word::new("graph").unwrap());
        let (word, reason) = draw_target(&mut source, &mut rng());
        assert_eq!(word.text(), "graph");
        assert!(reason.is_none());
    }
}
