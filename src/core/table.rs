//! Precomputed guess × answer feedback table
//!
//! One byte per (guess, answer) pair. Built once over fixed word universes
//! so bulk workloads (scoring every guess, simulating every answer) never
//! re-run the two-pass evaluator. Interactive use can skip the table and
//! evaluate on demand.

use super::feedback::Pattern;
use super::word::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Dense feedback-code matrix, guess-major
pub struct FeedbackTable {
    codes: Vec<u8>,
    guess_count: usize,
    answer_count: usize,
    answer_of_guess: Vec<Option<usize>>,
}

impl FeedbackTable {
    /// Build the full table. Rows are independent, so they are computed in
    /// parallel.
    #[must_use]
    pub fn build(guesses: &[Word], answers: &[Word]) -> Self {
        let rows: Vec<Vec<u8>> = guesses
            .par_iter()
            .map(|guess| {
                answers
                    .iter()
                    .map(|answer| Pattern::evaluate(guess, answer).encode())
                    .collect()
            })
            .collect();

        let answer_index: FxHashMap<&str, usize> = answers
            .iter()
            .enumerate()
            .map(|(i, word)| (word.text(), i))
            .collect();
        let answer_of_guess = guesses
            .iter()
            .map(|guess| answer_index.get(guess.text()).copied())
            .collect();

        Self {
            codes: rows.concat(),
            guess_count: guesses.len(),
            answer_count: answers.len(),
            answer_of_guess,
        }
    }

    /// Feedback code for (guess row, answer column)
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn code(&self, guess: usize, answer: usize) -> u8 {
        debug_assert!(answer < self.answer_count);
        self.codes[guess * self.answer_count + answer]
    }

    /// Number of guess rows
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Number of answer columns
    #[inline]
    #[must_use]
    pub const fn answer_count(&self) -> usize {
        self.answer_count
    }

    /// The answer column holding the same word as this guess row, if any.
    /// Used to check whether a guess is itself a live candidate.
    #[inline]
    #[must_use]
    pub fn answer_of_guess(&self, guess: usize) -> Option<usize> {
        self.answer_of_guess[guess]
    }
}
