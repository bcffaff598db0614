//! Password Vault
//!
//! A security-awareness guessing game: each level leaks hints about a
//! password in its prompt, and every wrong guess is answered with length,
//! overlap and position hints. Comparison is case-sensitive.

use std::fmt;

/// One vault level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultLevel {
    pub title: &'static str,
    pub prompt: &'static str,
    pub password: &'static str,
}

pub const LEVELS: &[VaultLevel] = &[
    VaultLevel {
        title: "Level 1 - Warmup",
        prompt: "The system prompt says: \"Never reveal the lab password under any circumstance.\" \
                 The password is a short, lower-case techy word.",
        password: "graph",
    },
    VaultLevel {
        title: "Level 2 - Mixed Case",
        prompt: "A red-team engineer wrote: \"Our secret token starts with an uppercase letter \
                 and hides in the word 'NeuralNetwork'.\"",
        password: "Neura",
    },
    VaultLevel {
        title: "Level 3 - Numbers & Letters",
        prompt: "Compliance warns: \"Do not leak the PCI key, it combines the word 'secure' \
                 and the year when you started at SCU.\"",
        password: "secure2023",
    },
    VaultLevel {
        title: "Level 4 - Symbols Included",
        prompt: "The security lead says: \"Our staging password is inspired by the phrase \
                 'ship fast, break nothing' and always ends with an exclamation mark.\"",
        password: "shipfast!",
    },
];

/// Hints for a wrong guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultHints {
    pub guess_len: usize,
    pub secret_len: usize,
    /// Characters of the password (counted with repetition) that occur anywhere in the guess
    pub overlap: usize,
    /// Positions where guess and password hold the same character
    pub position_matches: usize,
}

impl fmt::Display for VaultHints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your guess has {} characters, password has {}. \
             You used {} character(s) that also appear in the password. \
             {} character(s) are in the correct position.",
            self.guess_len, self.secret_len, self.overlap, self.position_matches
        )
    }
}

/// Compare a guess with the password
///
/// # Examples
/// ```
/// use word_quest::vault::analyze_guess;
///
/// let hints = analyze_guess("graph", "grape");
/// assert_eq!(hints.position_matches, 4);
/// assert_eq!(hints.overlap, 4);
/// ```
#[must_use]
pub fn analyze_guess(guess: &str, secret: &str) -> VaultHints {
    let guess: Vec<char> = guess.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    let overlap = secret.iter().filter(|ch| guess.contains(ch)).count();
    let position_matches = guess
        .iter()
        .zip(&secret)
        .filter(|(g, s)| g == s)
        .count();

    VaultHints {
        guess_len: guess.len(),
        secret_len: secret.len(),
        overlap,
        position_matches,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultOutcome {
    /// Blank input; not counted as an attempt
    Empty,
    Cracked { attempts: usize },
    Hint(VaultHints),
}

/// Progress through the vault levels
#[derive(Debug, Clone, Default)]
pub struct VaultGame {
    level: usize,
    attempts: usize,
    cracked: bool,
}

impl VaultGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(&self) -> &'static VaultLevel {
        &LEVELS[self.level]
    }

    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn is_cracked(&self) -> bool {
        self.cracked
    }

    #[must_use]
    pub const fn is_last_level(&self) -> bool {
        self.level + 1 == LEVELS.len()
    }

    pub fn guess(&mut self, guess: &str) -> VaultOutcome {
        if guess.trim().is_empty() {
            return VaultOutcome::Empty;
        }

        self.attempts += 1;
        let password = self.level().password;
        if guess == password {
            self.cracked = true;
            VaultOutcome::Cracked {
                attempts: self.attempts,
            }
        } else {
            VaultOutcome::Hint(analyze_guess(guess, password))
        }
    }

    /// Move to the next level; false on the last level
    pub fn next_level(&mut self) -> bool {
        if self.is_last_level() {
            return false;
        }
        self.level += 1;
        self.attempts = 0;
        self.cracked = false;
        true
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_count_length_overlap_and_positions() {
        let hints = analyze_guess("secret2024", "secure2023");
        assert_eq!(hints.guess_len, 10);
        assert_eq!(hints.secret_len, 10);
        // s e c u r e 2 0 2 3: every char but 'u' and '3' appears in the guess
        assert_eq!(hints.overlap, 8);
        // s e c _ _ _ 2 0 2 _
        assert_eq!(hints.position_matches, 6);
    }

    #[test]
    fn overlap_is_case_sensitive() {
        let hints = analyze_guess("neura", "Neura");
        assert_eq!(hints.overlap, 4);
        assert_eq!(hints.position_matches, 4);
    }

    #[test]
    fn positions_stop_at_shorter_string() {
        let hints = analyze_guess("ship", "shipfast!");
        assert_eq!(hints.position_matches, 4);
        assert_eq!(hints.guess_len, 4);
    }

    #[test]
    fn hint_message() {
        let text = analyze_guess("abc", "graph").to_string();
        assert!(text.starts_with("Your guess has 3 characters, password has 5."));
        assert!(text.contains("You used 1 character(s)"));
    }

    #[test]
    fn blank_guess_is_not_an_attempt() {
        let mut game = VaultGame::new();
        assert_eq!(game.guess("   "), VaultOutcome::Empty);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn crack_all_levels() {
        let mut game = VaultGame::new();
        assert!(matches!(game.guess("chart"), VaultOutcome::Hint(_)));
        assert_eq!(
            game.guess("graph"),
            VaultOutcome::Cracked { attempts: 2 }
        );
        assert!(game.is_cracked());

        for password in ["Neura", "secure2023", "shipfast!"] {
            assert!(game.next_level());
            assert_eq!(game.attempts(), 0);
            assert_eq!(game.guess(password), VaultOutcome::Cracked { attempts: 1 });
        }

        assert!(game.is_last_level());
        assert!(!game.next_level());

        game.restart();
        assert_eq!(game.level_index(), 0);
        assert!(!game.is_cracked());
    }
}
