//! Display functions for games and command results

use super::formatters::{create_progress_bar, guess_row, keyboard_rows};
use crate::commands::BenchmarkResult;
use crate::core::{Feedback, Word};
use crate::session::{MAX_GUESSES, Session, SessionState};
use crate::vault::VaultGame;
use colored::Colorize;

/// Print the guesses so far and the keyboard
pub fn print_board(session: &Session) {
    println!();
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            guess_row(&record.word, &record.feedback)
        );
    }
    println!();
    for row in keyboard_rows(session.keyboard()) {
        println!("  {row}");
    }
    println!(
        "\n  {} guess(es) left",
        session.guesses_remaining().to_string().bright_cyan()
    );
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session, answer: Option<&Word>) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match session.state() {
        SessionState::Won => {
            let turns = session.history().len();
            println!(
                "  {}  Solved in {} {}",
                "You got it! 🚀".bright_green().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        SessionState::Lost => {
            println!("  {}", "Out of guesses!".bright_red().bold());
            if let Some(answer) = answer {
                println!(
                    "  The word was {}",
                    answer.text().to_uppercase().bright_yellow().bold()
                );
            }
        }
        SessionState::InProgress | SessionState::AwaitingRemote(_) => {}
    }

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.text().to_uppercase().bright_white().bold(),
            record.feedback
        );
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the result of scoring one guess against one target
pub fn print_score(target: &str, guess: &str, feedback: &Feedback) {
    println!(
        "{} vs {}: {}",
        guess.to_uppercase().bright_white().bold(),
        target.to_uppercase().bright_yellow(),
        feedback
    );
    let names: Vec<&str> = feedback.results().iter().map(|r| r.name()).collect();
    println!("{}", names.join(" ").bright_black());
}

/// Print the current Password Vault level
pub fn print_vault_level(game: &VaultGame) {
    let level = game.level();
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", level.title.bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("{}\n", level.prompt);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow()
    );
    println!("   Losses:           {}", result.losses.to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
