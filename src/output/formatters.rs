//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterResult, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Paint a letter tile for the given result
#[must_use]
pub fn tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        Some(LetterResult::Correct) => text.black().on_green().bold(),
        Some(LetterResult::Present) => text.black().on_yellow().bold(),
        Some(LetterResult::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.results())
        .map(|(letter, &result)| tile(letter, Some(result)).to_string())
        .collect()
}

/// The on-screen keyboard, one string per row, coloured by best result
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_has_every_letter_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn keyboard_rows_cover_layout() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&KeyboardState::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q  W "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
