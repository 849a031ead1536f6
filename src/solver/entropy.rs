//! Shannon entropy of the feedback partition a guess induces
//!
//! A guess splits the candidate set into buckets, one per feedback code.
//! Its score is the entropy of the bucket sizes, in bits: the expected
//! information the guess will reveal.

use crate::core::{FeedbackTable, PATTERN_SPACE, Pattern, Word};

/// Expected information gain of `guess` against `candidates`, in bits.
///
/// Returns 0.0 when one or zero candidates remain (nothing left to learn).
/// Always within [0, log2(candidate count)].
///
/// # Examples
/// ```
/// use wordgain::core::Word;
/// use wordgain::solver::entropy_of_guess;
///
/// let guess = Word::new("abcde").unwrap();
/// let candidates = vec![
///     Word::new("abcde").unwrap(),
///     Word::new("edcba").unwrap(),
/// ];
/// // Two equally likely outcomes: exactly one bit
/// let entropy = entropy_of_guess(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn entropy_of_guess(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let mut counts = [0u32; PATTERN_SPACE];
    for candidate in candidates {
        counts[usize::from(Pattern::evaluate(guess, candidate).encode())] += 1;
    }
    entropy_from_counts(&counts, candidates.len())
}

/// Table-indexed variant of [`entropy_of_guess`] for bulk workloads.
///
/// `candidates` are answer-column indices into the table.
#[must_use]
pub fn entropy_of_row(table: &FeedbackTable, guess: usize, candidates: &[usize]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let mut counts = [0u32; PATTERN_SPACE];
    for &answer in candidates {
        counts[usize::from(table.code(guess, answer))] += 1;
    }
    entropy_from_counts(&counts, candidates.len())
}

/// H = Σ (c/n) · log2(n/c) over the non-empty buckets
fn entropy_from_counts(counts: &[u32; PATTERN_SPACE], total: usize) -> f64 {
    let n = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / n;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackTable;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn even_binary_split_is_one_bit() {
        let guess = Word::new("abcde").unwrap();
        let candidates = words(&["abcde", "edcba"]);

        let entropy = entropy_of_guess(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_candidate_is_zero() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(entropy_of_guess(&guess, &words(&["slate"])), 0.0);
        assert_eq!(entropy_of_guess(&guess, &[]), 0.0);
    }

    #[test]
    fn indistinguishable_candidates_are_zero() {
        // zzzzz gives the all-absent pattern for every candidate
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        assert!(entropy_of_guess(&guess, &candidates).abs() < 1e-12);
    }

    #[test]
    fn fully_distinguishing_guess_reaches_log2_n() {
        // Each candidate produces a distinct pattern against "abcde"
        let guess = Word::new("abcde").unwrap();
        let candidates = words(&["abcde", "edcba", "fghij", "abcdf"]);

        let entropy = entropy_of_guess(&guess, &candidates);
        assert!((entropy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_is_bounded_by_log2_of_candidates() {
        let candidates = words(&["slate", "irate", "crate", "grate", "trace"]);
        let bound = (candidates.len() as f64).log2();

        for guess in &candidates {
            let entropy = entropy_of_guess(guess, &candidates);
            assert!(entropy >= 0.0);
            assert!(entropy <= bound + 1e-12);
        }
    }

    #[test]
    fn skewed_partition_scores_below_uniform() {
        // aaaaa separates only the 'a'-containing candidates coarsely
        let candidates = words(&["slate", "irate", "crate", "bumph"]);
        let diverse = Word::new("crate").unwrap();
        let flat = Word::new("zzzzz").unwrap();

        assert!(
            entropy_of_guess(&diverse, &candidates) > entropy_of_guess(&flat, &candidates)
        );
    }

    #[test]
    fn row_path_matches_direct_path() {
        let guesses = words(&["crane", "slate", "aaaaa"]);
        let answers = words(&["slate", "irate", "crate", "grate"]);
        let table = FeedbackTable::build(&guesses, &answers);
        let all: Vec<usize> = (0..answers.len()).collect();

        for (g, guess) in guesses.iter().enumerate() {
            let direct = entropy_of_guess(guess, &answers);
            let indexed = entropy_of_row(&table, g, &all);
            assert!((direct - indexed).abs() < 1e-12);
        }
    }
}
