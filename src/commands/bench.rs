//! Benchmark command
//!
//! Plays many sessions with the autoplayer, in parallel, and collects the
//! guess distribution.

use crate::core::Word;
use crate::session::{Session, SessionOptions, SessionState};
use crate::solver::Autoplayer;
use crate::wordlists::ListSource;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Mean guesses over won games
    pub average_guesses: f64,
    /// Winning guess count → number of games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play `games` sessions with targets drawn from `targets`
///
/// Game `i` uses an RNG seeded with `seed + i`, so a run is reproducible
/// regardless of how rayon schedules it. The autoplayer guesses from
/// `guess_pool`.
#[must_use]
pub fn run_benchmark(
    targets: &[Word],
    guess_pool: &[Word],
    games: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let player = Autoplayer::new(guess_pool);

    let progress = if show_progress {
        ProgressBar::new(games as u64).with_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} games ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        )
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(SessionState, usize)> = (0..games)
        .into_par_iter()
        .progress_with(progress)
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let mut source = ListSource::new(targets.to_vec());
            let mut session = Session::start(&mut source, SessionOptions::default(), &mut rng);
            let state = player.play(&mut session, &mut rng);
            (state, session.history().len())
        })
        .collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut wins = 0;
    let mut winning_guesses = 0;
    for (state, guesses) in &outcomes {
        if *state == SessionState::Won {
            wins += 1;
            winning_guesses += guesses;
            *distribution.entry(*guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_games = outcomes.len();
    info!(total_games, wins, ?duration, "benchmark finished");

    BenchmarkResult {
        total_games,
        wins,
        losses: total_games - wins,
        average_guesses: if wins == 0 {
            0.0
        } else {
            winning_guesses as f64 / wins as f64
        },
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
