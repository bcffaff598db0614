//! Word Quest - CLI
//!
//! Guess the five-letter word in six tries, in a TUI or a plain terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use word_quest::{
    commands::{run_benchmark, run_simple, run_vault},
    config::GameConfig,
    core::score_str,
    game::GameSetup,
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_score},
    wordlists::{ANSWERS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_quest",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target word list file (one word per line); overrides the config
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Only accept guesses found in the dictionary
    #[arg(long, global = true)]
    strict: bool,

    /// Score guesses through the remote scoring path
    #[arg(long, global = true)]
    remote: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a target and print the feedback
    Score {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Autoplay many games and report statistics
    Bench {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for target selection and guessing
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Password Vault mini-game
    Vault,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Config file plus command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(path) = &cli.wordlist {
        config.word_list = Some(path.clone());
    }
    config.require_known_word |= cli.strict;
    config.remote |= cli.remote;

    debug!(?config, "effective configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("starting word_quest v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let setup = GameSetup::from_config(&config)?;
            run_tui(App::new(setup))
        }
        Commands::Simple => {
            let mut setup = GameSetup::from_config(&config)?;
            run_simple(&mut setup)
        }
        Commands::Score { target, guess } => {
            let feedback = score_str(&target, &guess)?;
            print_score(&target, &guess, &feedback);
            Ok(())
        }
        Commands::Bench { count, seed } => run_bench_command(&config, count, seed),
        Commands::Vault => run_vault(),
    }
}

fn run_bench_command(config: &GameConfig, count: usize, seed: u64) -> Result<()> {
    let targets = match &config.word_list {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };
    anyhow::ensure!(!targets.is_empty(), "word list has no valid words");

    println!(
        "Benchmarking {count} games over {} target words...",
        targets.len()
    );
    let result = run_benchmark(&targets, &targets, count, seed, true);
    print_benchmark_result(&result);
    Ok(())
}
