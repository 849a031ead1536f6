//! Batch simulation over a full answer list
//!
//! Plays one game per answer on the precomputed feedback table, sharing a
//! single entropy cache across games (the same candidate sets recur
//! constantly once an opening guess is fixed).

use super::{GameConfig, GameRecord, GameState};
use crate::core::{FeedbackTable, PERFECT_CODE, Pattern, Word};
use crate::error::SolverError;
use crate::solver::{EntropyCache, filter_indices, select_guess_indexed};
use std::collections::HashMap;

/// Aggregate results of a simulation run
#[derive(Debug)]
pub struct SimulationSummary {
    pub records: Vec<GameRecord>,
    /// rounds → number of games solved in exactly that many rounds
    pub distribution: HashMap<usize, usize>,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub worst_rounds: usize,
}

/// Simulate one game per answer (up to `limit`) and aggregate the results.
///
/// The candidate universe is always the full answer list; `limit` only
/// caps how many answers are played. `progress` is called once per
/// finished game so callers can report liveness.
///
/// # Errors
/// Returns `SolverError::UnknownWord` if the configured opening guess is
/// not in `allowed`, and propagates any game-loop error.
pub fn simulate_games(
    config: &GameConfig,
    allowed: &[Word],
    answers: &[Word],
    limit: Option<usize>,
    mut progress: impl FnMut(&GameRecord),
) -> Result<SimulationSummary, SolverError> {
    config.validate()?;

    let opening = config
        .opening_guess
        .as_ref()
        .map(|word| {
            allowed
                .iter()
                .position(|guess| guess == word)
                .ok_or_else(|| SolverError::UnknownWord(word.text().to_string()))
        })
        .transpose()?;

    let table = FeedbackTable::build(allowed, answers);
    let mut cache = EntropyCache::new();

    let count = limit.unwrap_or(answers.len()).min(answers.len());
    let mut records = Vec::with_capacity(count);
    for answer in 0..count {
        let record = play_on_table(config, &table, allowed, answers, answer, opening, &mut cache)?;
        progress(&record);
        records.push(record);
    }

    Ok(summarize(records))
}

#[allow(clippy::too_many_arguments)]
fn play_on_table(
    config: &GameConfig,
    table: &FeedbackTable,
    allowed: &[Word],
    answers: &[Word],
    answer: usize,
    opening: Option<usize>,
    cache: &mut EntropyCache,
) -> Result<GameRecord, SolverError> {
    let mut candidates: Vec<usize> = (0..answers.len()).collect();
    let mut turns = Vec::new();

    for round in 1..=config.max_rounds {
        let guess = if round == 1
            && let Some(opening) = opening
        {
            opening
        } else {
            select_guess_indexed(table, &candidates, cache)?.0
        };

        let code = table.code(guess, answer);
        turns.push((allowed[guess].clone(), Pattern::decode(code)?));

        if code == PERFECT_CODE {
            return Ok(GameRecord {
                answer: answers[answer].clone(),
                turns,
                state: GameState::Solved { rounds: round },
            });
        }

        candidates = filter_indices(table, guess, code, &candidates);
        if candidates.is_empty() {
            // Unreachable when the answer is in its own universe, but a
            // fatal state if it ever happens
            return Err(SolverError::InconsistentFeedback {
                guess: allowed[guess].text().to_string(),
            });
        }
    }

    Ok(GameRecord {
        answer: answers[answer].clone(),
        turns,
        state: GameState::Exhausted,
    })
}

fn summarize(records: Vec<GameRecord>) -> SimulationSummary {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved = 0;
    let mut failed = 0;
    let mut total_rounds = 0;
    let mut worst_rounds = 0;

    for record in &records {
        match record.state {
            GameState::Solved { rounds } => {
                solved += 1;
                total_rounds += rounds;
                worst_rounds = worst_rounds.max(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            GameState::Exhausted => failed += 1,
            GameState::InProgress { .. } => {}
        }
    }

    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    SimulationSummary {
        records,
        distribution,
        solved,
        failed,
        average_rounds,
        worst_rounds,
    }
}
