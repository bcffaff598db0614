//! Word list loading utilities
//!
//! Word list files hold one word per line. Blank lines, `#` comments and
//! entries that are not valid 5-letter words are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_quest::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse the contents of a word list file
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_quest::wordlists::loader::words_from_slice;
/// use word_quest::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
