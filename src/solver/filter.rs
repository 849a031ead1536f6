//! Candidate elimination
//!
//! After a guess and its observed feedback, only the candidates that would
//! have produced exactly that feedback survive. This is the same evaluator
//! the scorer uses, so filtering and scoring can never disagree.

use crate::core::{FeedbackTable, Pattern, Word};

/// Keep exactly the candidates consistent with `observed`.
///
/// Returns a new vector; the input set is never mutated. An empty result
/// is a legal output here - it signals feedback no remaining candidate can
/// explain (for example, a human mistyping their feedback) and is left to
/// the caller to escalate.
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, observed: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| Pattern::evaluate(guess, candidate) == observed)
        .cloned()
        .collect()
}

/// Table-indexed variant of [`filter_candidates`].
///
/// `candidates` are answer-column indices; relative order is preserved, so
/// a sorted input stays sorted.
#[must_use]
pub fn filter_indices(
    table: &FeedbackTable,
    guess: usize,
    observed: u8,
    candidates: &[usize],
) -> Vec<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&answer| table.code(guess, answer) == observed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackTable;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn keeps_exactly_the_consistent_candidates() {
        let candidates = words(&["slate", "irate", "crate", "bumph"]);
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("irate").unwrap();
        let observed = Pattern::evaluate(&guess, &answer);

        let filtered = filter_candidates(&candidates, &guess, observed);

        assert!(filtered.iter().any(|w| w.text() == "irate"));
        for word in &filtered {
            assert_eq!(Pattern::evaluate(&guess, word), observed);
        }
        for word in &candidates {
            if !filtered.contains(word) {
                assert_ne!(Pattern::evaluate(&guess, word), observed);
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        let guess = Word::new("crane").unwrap();
        let observed = Pattern::evaluate(&guess, &Word::new("grate").unwrap());

        let once = filter_candidates(&candidates, &guess, observed);
        let twice = filter_candidates(&once, &guess, observed);
        assert_eq!(once, twice);
    }

    #[test]
    fn impossible_feedback_yields_empty_set() {
        // Claiming all-correct for a word that is not a candidate
        let candidates = words(&["slate", "irate"]);
        let guess = Word::new("zzzzz").unwrap();

        let filtered = filter_candidates(&candidates, &guess, Pattern::PERFECT);
        assert!(filtered.is_empty());
    }

    #[test]
    fn perfect_feedback_isolates_the_guess() {
        let candidates = words(&["slate", "irate", "crate"]);
        let guess = Word::new("irate").unwrap();

        let filtered = filter_candidates(&candidates, &guess, Pattern::PERFECT);
        assert_eq!(filtered, words(&["irate"]));
    }

    #[test]
    fn input_set_is_untouched() {
        let candidates = words(&["slate", "irate", "crate"]);
        let before = candidates.clone();
        let guess = Word::new("crane").unwrap();
        let observed = Pattern::evaluate(&guess, &Word::new("irate").unwrap());

        let _ = filter_candidates(&candidates, &guess, observed);
        assert_eq!(candidates, before);
    }

    #[test]
    fn indexed_filter_matches_word_filter() {
        let allowed = words(&["crane", "slate"]);
        let answers = words(&["slate", "irate", "crate", "grate"]);
        let table = FeedbackTable::build(&allowed, &answers);
        let all: Vec<usize> = (0..answers.len()).collect();

        let guess = &allowed[0];
        let observed = Pattern::evaluate(guess, &answers[2]);

        let by_word = filter_candidates(&answers, guess, observed);
        let by_index = filter_indices(&table, 0, observed.encode(), &all);

        let from_indices: Vec<Word> =
            by_index.iter().map(|&i| answers[i].clone()).collect();
        assert_eq!(by_word, from_indices);
    }

    #[test]
    fn indexed_filter_preserves_sort_order() {
        let allowed = words(&["zzzzz"]);
        let answers = words(&["slate", "irate", "crate", "grate"]);
        let table = FeedbackTable::build(&allowed, &answers);
        let all: Vec<usize> = (0..answers.len()).collect();

        // zzzzz scores all-absent against everything, so nothing is removed
        let kept = filter_indices(&table, 0, 0, &all);
        assert_eq!(kept, all);
    }
}
