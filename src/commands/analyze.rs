//! Entropy analysis of a single guess

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::entropy_of_guess;

/// Entropy report for one guess against the full answer list
#[derive(Debug)]
pub struct AnalysisReport {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub total_candidates: usize,
}

/// Score one word against the answer list.
///
/// # Errors
/// Returns an error if the word is malformed or not in the allowed list.
pub fn analyze_word(
    word: &str,
    allowed: &[Word],
    answers: &[Word],
) -> Result<AnalysisReport, SolverError> {
    let guess = Word::new(word)?;
    if !allowed.contains(&guess) {
        return Err(SolverError::UnknownWord(guess.text().to_string()));
    }

    let entropy = entropy_of_guess(&guess, answers);
    let expected_reduction = entropy.exp2();

    Ok(AnalysisReport {
        word: guess.text().to_string(),
        entropy,
        expected_reduction,
        expected_remaining: answers.len() as f64 / expected_reduction,
        total_candidates: answers.len(),
    })
}
