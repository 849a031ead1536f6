//! Solve a known target word and report the path taken

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::game::{GameConfig, play_game};
use crate::solver::{EntropyCache, entropy_of_guess, filter_candidates};

/// One round of the solution path
pub struct SolveStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess at selection time; `None` once the answer was
    /// already pinned down
    pub entropy: Option<f64>,
}

/// Full solution path for one target
pub struct SolveReport {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

/// Play a game against `target` and annotate every round with candidate
/// counts and entropy.
///
/// # Errors
/// Returns an error if `target` is not a valid word, or if the game loop
/// fails.
pub fn solve_word(
    config: &GameConfig,
    allowed: &[Word],
    answers: &[Word],
    target: &str,
) -> Result<SolveReport, SolverError> {
    let answer = Word::new(target)?;

    let mut cache = EntropyCache::new();
    let record = play_game(config, allowed, answers, &answer, &mut cache)?;

    // Replay the filter to recover per-round candidate counts
    let mut candidates: Vec<Word> = answers.to_vec();
    let mut steps = Vec::with_capacity(record.turns.len());
    for (guess, pattern) in &record.turns {
        let before = candidates.len();
        let entropy = (before > 1).then(|| entropy_of_guess(guess, &candidates));
        candidates = filter_candidates(&candidates, guess, *pattern);

        steps.push(SolveStep {
            word: guess.text().to_string(),
            pattern: *pattern,
            candidates_before: before,
            candidates_after: candidates.len(),
            entropy,
        });
    }

    Ok(SolveReport {
        target: answer.text().to_string(),
        steps,
        solved: record.solved(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::words_from_slice;

    fn lists() -> Vec<Word> {
        words_from_slice(&["slate", "irate", "crate", "grate", "trace"])
    }

    #[test]
    fn solve_reaches_the_target() {
        let list = lists();
        let report = solve_word(&GameConfig::default(), &list, &list, "grate").unwrap();

        assert!(report.solved);
        assert_eq!(report.target, "grate");
        assert_eq!(report.steps.last().unwrap().word, "grate");
        assert!(report.steps.last().unwrap().pattern.is_perfect());
    }

    #[test]
    fn steps_record_monotone_candidate_counts() {
        let list = lists();
        let report = solve_word(&GameConfig::default(), &list, &list, "trace").unwrap();

        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in report.steps.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn entropy_is_reported_while_uncertainty_remains() {
        let list = lists();
        let report = solve_word(&GameConfig::default(), &list, &list, "irate").unwrap();

        let first = &report.steps[0];
        assert!(first.entropy.is_some());
        assert!(first.entropy.unwrap() >= 0.0);
    }

    #[test]
    fn invalid_target_is_rejected() {
        let list = lists();
        assert!(solve_word(&GameConfig::default(), &list, &list, "toolong").is_err());
        assert!(solve_word(&GameConfig::default(), &list, &list, "cr4ne").is_err());
    }
}
