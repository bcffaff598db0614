//! Password Vault command

use crate::output::print_vault_level;
use crate::vault::{VaultGame, VaultOutcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the Password Vault game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_vault() -> Result<()> {
    let mut game = VaultGame::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("\n🔐 Password Vault. Type 'quit' to leave.");
    print_vault_level(&game);

    loop {
        print!("Password guess: ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        // Passwords may contain leading or trailing symbols; only strip the newline
        let guess = line.trim_end_matches(['\r', '\n']);
        if guess == "quit" {
            return Ok(());
        }

        match game.guess(guess) {
            VaultOutcome::Empty => println!("{}", "Enter a guess first.".bright_black()),
            VaultOutcome::Hint(hints) => {
                println!("{hints}");
                println!("{}", format!("Attempts: {}", game.attempts()).bright_black());
            }
            VaultOutcome::Cracked { attempts } => {
                println!(
                    "{}",
                    format!("Correct! You cracked the password in {attempts} attempt(s).")
                        .bright_green()
                        .bold()
                );
                if game.next_level() {
                    print_vault_level(&game);
                } else {
                    println!("\n🏆 Every vault is open. Starting over.");
                    game.restart();
                    print_vault_level(&game);
                }
            }
        }
    }
}
