//! Guess selection
//!
//! Scores every allowed guess in parallel, then picks deterministically:
//! highest entropy wins; an exact tie goes to a guess that is itself a
//! live candidate (it might be the answer); any remaining tie goes to the
//! earliest guess in the allowed list's order.

use super::entropy::{entropy_of_guess, entropy_of_row};
use crate::core::{FeedbackTable, Word};
use crate::error::SolverError;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};

/// Session-scoped cache of selection results
///
/// Keyed by a fingerprint of the candidate set. The cache is owned by the
/// caller and passed in explicitly; one cache spans one solving session
/// over a fixed word universe, and `clear` separates independent sessions.
#[derive(Debug, Default)]
pub struct EntropyCache {
    entries: FxHashMap<u64, (usize, f64)>,
}

impl EntropyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all cached selections (call between sessions)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Select the guess with the highest expected information gain.
///
/// Every word in `allowed` is scored against `candidates`; the returned
/// guess is always a member of `allowed`. The outer scoring loop is
/// data-parallel; the final pick is a sequential scan so ties resolve
/// identically on every run.
///
/// # Errors
/// - `SolverError::EmptyGuessPool` if `allowed` is empty.
/// - `SolverError::EmptyCandidates` if `candidates` is empty - the caller
///   has violated its own invariant, since no reachable game state has
///   zero candidates.
pub fn select_guess<'a>(
    allowed: &'a [Word],
    candidates: &[Word],
    cache: &mut EntropyCache,
) -> Result<(&'a Word, f64), SolverError> {
    if allowed.is_empty() {
        return Err(SolverError::EmptyGuessPool);
    }
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidates);
    }

    let key = fingerprint(candidates.iter().map(Word::text));
    if let Some(&(index, entropy)) = cache.entries.get(&key) {
        return Ok((&allowed[index], entropy));
    }

    let scores: Vec<f64> = allowed
        .par_iter()
        .map(|guess| entropy_of_guess(guess, candidates))
        .collect();

    let members: FxHashSet<&str> = candidates.iter().map(Word::text).collect();
    let (index, entropy) = pick_best(&scores, |i| members.contains(allowed[i].text()));

    cache.entries.insert(key, (index, entropy));
    Ok((&allowed[index], entropy))
}

/// Table-indexed variant of [`select_guess`] for bulk workloads.
///
/// `candidates` are answer-column indices and must be sorted ascending
/// (the game loop keeps them that way; filtering preserves order).
///
/// # Errors
/// Same conditions as [`select_guess`].
pub fn select_guess_indexed(
    table: &FeedbackTable,
    candidates: &[usize],
    cache: &mut EntropyCache,
) -> Result<(usize, f64), SolverError> {
    if table.guess_count() == 0 {
        return Err(SolverError::EmptyGuessPool);
    }
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidates);
    }

    let key = fingerprint(candidates.iter());
    if let Some(&(index, entropy)) = cache.entries.get(&key) {
        return Ok((index, entropy));
    }

    let scores: Vec<f64> = (0..table.guess_count())
        .into_par_iter()
        .map(|guess| entropy_of_row(table, guess, candidates))
        .collect();

    let (index, entropy) = pick_best(&scores, |guess| {
        table
            .answer_of_guess(guess)
            .is_some_and(|answer| candidates.binary_search(&answer).is_ok())
    });

    cache.entries.insert(key, (index, entropy));
    Ok((index, entropy))
}

/// Sequential deterministic pick over precomputed scores.
///
/// Ties break on exact float equality only; near-misses are not treated
/// as ties.
#[allow(clippy::float_cmp)]
fn pick_best(scores: &[f64], is_candidate: impl Fn(usize) -> bool) -> (usize, f64) {
    let mut best = 0;
    let mut best_score = scores[0];
    let mut best_is_candidate = is_candidate(0);

    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > best_score {
            best = index;
            best_score = score;
            best_is_candidate = is_candidate(index);
        } else if score == best_score && !best_is_candidate && is_candidate(index) {
            best = index;
            best_is_candidate = true;
        }
    }

    (best, best_score)
}

fn fingerprint<I, T>(items: I) -> u64
where
    I: IntoIterator<Item = T>,
    T: Hash,
{
    let mut hasher = FxHasher::default();
    for item in items {
        item.hash(&mut hasher);
    }
    hasher.finish()
}
