//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess, see the coloured row and
//! keyboard, repeat.

use crate::error::GameError;
use crate::game::{Game, GameSetup};
use crate::output::{print_board, print_game_over};
use crate::session::TargetOrigin;
use crate::solver::Autoplayer;
use crate::wordlists::ANSWERS;
use crate::wordlists::loader::words_from_slice;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(setup: &mut GameSetup) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Quest - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word. You have 6 tries.");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'hint' for remaining candidates\n");

    let hint_pool = words_from_slice(ANSWERS);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut game = start_game(setup);

    loop {
        let Some(line) = prompt(&mut lines, "Guess")? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = start_game(setup);
                continue;
            }
            "hint" => {
                print_hint(&game, &hint_pool);
                continue;
            }
            _ => {}
        }

        match game.submit(&line) {
            Ok(turn) => {
                print_board(&game.session);
                if turn.state.is_terminal() {
                    print_game_over(&game.session, game.answer());
                    let answer = prompt(&mut lines, "Play again? (yes/no)")?;
                    if answer.as_deref().is_some_and(wants_another_game) {
                        game = start_game(setup);
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Err(GameError::SessionTerminated) => {
                println!("{}", "The game is over. Type 'new' to play again.".yellow());
            }
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }
}

fn start_game(setup: &mut GameSetup) -> Game {
    let game = setup.new_game();
    if let Some(TargetOrigin::Fallback { reason }) = game.fallback() {
        println!(
            "{}",
            format!("Word list unavailable ({reason}); using the built-in list.").yellow()
        );
    }
    println!("\n🔄 New game started!\n");
    game
}

fn print_hint(game: &Game, pool: &[crate::core::Word]) {
    let candidates = Autoplayer::new(pool).candidates(game.session.history());
    println!("{} candidate(s) remain", candidates.len());
    if candidates.len() <= 10 {
        for candidate in candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
    }
}

fn wants_another_game(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "yes" | "y")
}

/// Prompt and read one trimmed line; None at end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_again_ignores_case() {
        for answer in ["yes", "Yes", "Y", "y", "YES"] {
            assert!(wants_another_game(answer), "{answer}");
        }
        for answer in ["no", "N", "", "yess"] {
            assert!(!wants_another_game(answer), "{answer}");
        }
    }
}
