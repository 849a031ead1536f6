//! Batch simulation command
//!
//! Runs the solver against every answer (or a limited prefix) with a live
//! progress bar, and returns the aggregate summary plus wall time.

use crate::core::Word;
use crate::error::SolverError;
use crate::game::{GameConfig, SimulationSummary, simulate_games};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Run the simulation with progress reporting.
///
/// # Errors
/// Propagates simulation errors.
///
/// # Panics
/// Panics only if the progress-bar template literal is malformed.
pub fn run_simulation(
    config: &GameConfig,
    allowed: &[Word],
    answers: &[Word],
    limit: Option<usize>,
) -> Result<(SimulationSummary, Duration), SolverError> {
    let games = limit.unwrap_or(answers.len()).min(answers.len());
    println!("🎯 Simulating {games} games...");

    let bar = ProgressBar::new(games as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut finished = 0usize;
    let mut total_rounds = 0usize;

    let summary = simulate_games(config, allowed, answers, limit, |record| {
        finished += 1;
        total_rounds += record.rounds();
        if finished % 10 == 0 {
            let avg = total_rounds as f64 / finished as f64;
            bar.set_message(format!("Avg: {avg:.2}"));
        }
        bar.inc(1);
    })?;

    bar.finish_with_message("Complete");
    Ok((summary, start.elapsed()))
}
