//! Feedback patterns and their integer codes
//!
//! Comparing a guess against an answer yields one mark per position:
//! - Absent: the letter does not occur (or all occurrences are used up)
//! - Present: the letter occurs elsewhere in the answer
//! - Correct: the letter is in the right position
//!
//! A full pattern is five marks, in bijection with an integer code in
//! [0, 243) via base-3 encoding with position 0 as the most significant
//! digit. The code form is what gets stored and compared in bulk.

use super::word::{WORD_LEN, Word};
use crate::error::SolverError;
use std::fmt;

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_SPACE: usize = 243;

/// Code of the all-Correct pattern
pub const PERFECT_CODE: u8 = (PATTERN_SPACE - 1) as u8;

/// Per-position verdict for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter does not occur in the answer
    Absent,
    /// Letter occurs in the answer, but not at this position
    Present,
    /// Letter is at this exact position
    Correct,
}

impl Mark {
    /// Base-3 digit for this mark (the external 0/1/2 contract)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

}

/// Feedback for one guess: five marks, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: [Mark; WORD_LEN],
}

impl Pattern {
    /// All correct (the solved pattern)
    pub const PERFECT: Self = Self {
        marks: [Mark::Correct; WORD_LEN],
    };

    /// Build a pattern directly from marks
    #[must_use]
    pub const fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        Self { marks }
    }

    /// Evaluate the feedback when `guess` is played and `answer` is the
    /// target.
    ///
    /// Two passes, so repeated letters are never over-counted: the first
    /// pass marks exact matches and consumes those letters from the
    /// answer's multiset, the second marks Present only while unconsumed
    /// occurrences remain.
    ///
    /// # Examples
    /// ```
    /// use wordgain::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// // c(absent) r(absent) a(correct) n(absent) e(correct)
    /// assert_eq!(Pattern::evaluate(&guess, &answer).encode(), 20);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available = answer.letter_counts();

        // First pass: exact matches consume their letter
        // Allow: index needed to compare guess[i] with answer[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letters()[i] == answer.letters()[i] {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&guess.letters()[i]) {
                    *count -= 1;
                }
            }
        }

        // Second pass: misplaced letters, while occurrences remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Absent {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    marks[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self { marks }
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// Whether every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Encode as a base-3 integer, position 0 as the most significant
    /// digit.
    #[must_use]
    pub fn encode(&self) -> u8 {
        self.marks
            .iter()
            .fold(0u8, |code, mark| code * 3 + mark.digit())
    }

    /// Decode a base-3 code back into a pattern.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidPatternCode` for codes outside
    /// [0, [`PATTERN_SPACE`]).
    pub fn decode(code: u8) -> Result<Self, SolverError> {
        if usize::from(code) >= PATTERN_SPACE {
            return Err(SolverError::InvalidPatternCode(u16::from(code)));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        let mut rest = code;
        for mark in marks.iter_mut().rev() {
            *mark = match rest % 3 {
                0 => Mark::Absent,
                1 => Mark::Present,
                _ => Mark::Correct,
            };
            rest /= 3;
        }
        Ok(Self { marks })
    }

    /// Parse a feedback string.
    ///
    /// Accepts one character per position:
    /// - `0` / `-` / `_` / ⬜ / ⬛ for absent
    /// - `1` / `y` / 🟨 for present
    /// - `2` / `g` / 🟩 for correct
    ///
    /// The digit form is the contract interactive collaborators use.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedbackString` on wrong length or an
    /// unrecognized character.
    ///
    /// # Examples
    /// ```
    /// use wordgain::core::Pattern;
    ///
    /// let p1 = Pattern::parse("01202").unwrap();
    /// let p2 = Pattern::parse("-yg_g").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(SolverError::InvalidFeedbackString(s.to_string()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                '0' | '-' | '_' | '⬜' | '⬛' => Mark::Absent,
                '1' | 'y' | 'Y' | '🟨' => Mark::Present,
                '2' | 'g' | 'G' | '🟩' => Mark::Correct,
                _ => return Err(SolverError::InvalidFeedbackString(s.to_string())),
            };
        }
        Ok(Self { marks })
    }

    /// Render as colored emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Absent => '⬜',
                Mark::Present => '🟨',
                Mark::Correct => '🟩',
            })
            .collect()
    }
}

/// Displays as the five-digit 0/1/2 form
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.encode(), PERFECT_CODE);
        assert_eq!(PERFECT_CODE, 242);
    }

    #[test]
    fn word_matches_itself_exactly() {
        for text in ["crane", "slate", "aaaaa", "zzzzz", "ababa"] {
            let w = word(text);
            assert_eq!(Pattern::evaluate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        let pattern = Pattern::evaluate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.encode(), 0);
        assert_eq!(pattern.marks(), &[Absent; 5]);
    }

    #[test]
    fn shifted_anagram_is_all_present() {
        // Every letter exists in the answer, none in position
        let pattern = Pattern::evaluate(&word("abcde"), &word("eabcd"));
        assert_eq!(pattern.marks(), &[Present; 5]);
    }

    #[test]
    fn classic_example_crane_vs_slate() {
        let pattern = Pattern::evaluate(&word("crane"), &word("slate"));
        assert_eq!(pattern.marks(), &[Absent, Absent, Correct, Absent, Correct]);
        // 0,0,2,0,2 base-3, position 0 most significant
        assert_eq!(pattern.encode(), 20);
    }

    #[test]
    fn repeated_letters_both_sides_never_overcount() {
        // aabbb vs ababa: answer has a,a,a,b,b available.
        // Pass 1: positions 0 and 3 are exact matches.
        // Pass 2: the second 'a' and first free 'b' are present; the final
        // 'b' finds no occurrence left and stays absent.
        let pattern = Pattern::evaluate(&word("aabbb"), &word("ababa"));
        assert_eq!(
            pattern.marks(),
            &[Correct, Present, Present, Correct, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_bounded_by_answer_count() {
        // speed vs erase: one 's', two 'e's available, no 'p' or 'd'
        let pattern = Pattern::evaluate(&word("speed"), &word("erase"));
        assert_eq!(
            pattern.marks(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn marks_per_letter_never_exceed_answer_occurrences() {
        let words = ["aabbb", "ababa", "abcde", "eabcd", "speed", "erase"];
        for guess in words.map(word) {
            for answer in words.map(word) {
                let pattern = Pattern::evaluate(&guess, &answer);
                for letter in b'a'..=b'z' {
                    let marked = guess
                        .letters()
                        .iter()
                        .zip(pattern.marks())
                        .filter(|&(&l, &m)| l == letter && m != Absent)
                        .count();
                    let in_answer =
                        answer.letters().iter().filter(|&&l| l == letter).count();
                    assert!(marked <= in_answer);
                }
            }
        }
    }

    #[test]
    fn codec_round_trips_every_code() {
        for code in 0..PATTERN_SPACE {
            let code = code as u8;
            let pattern = Pattern::decode(code).unwrap();
            assert_eq!(pattern.encode(), code);
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert!(matches!(
            Pattern::decode(243),
            Err(SolverError::InvalidPatternCode(243))
        ));
        assert!(Pattern::decode(255).is_err());
    }

    #[test]
    fn position_zero_is_most_significant() {
        // Correct at position 0 only: 2*81 = 162
        let pattern =
            Pattern::from_marks([Correct, Absent, Absent, Absent, Absent]);
        assert_eq!(pattern.encode(), 162);

        // Correct at position 4 only: 2
        let pattern =
            Pattern::from_marks([Absent, Absent, Absent, Absent, Correct]);
        assert_eq!(pattern.encode(), 2);
    }

    #[test]
    fn parse_digit_and_letter_forms() {
        let digits = Pattern::parse("01202").unwrap();
        let letters = Pattern::parse("-yg_g").unwrap();
        let emoji = Pattern::parse("⬜🟨🟩⬜🟩").unwrap();
        assert_eq!(digits, letters);
        assert_eq!(digits, emoji);
        assert_eq!(
            digits.marks(),
            &[Absent, Present, Correct, Absent, Correct]
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Pattern::parse("0120").is_err()); // Too short
        assert!(Pattern::parse("012022").is_err()); // Too long
        assert!(Pattern::parse("0120x").is_err()); // Bad character
        assert!(Pattern::parse("01203").is_err()); // Digit out of range
        assert!(Pattern::parse("").is_err());
    }

    #[test]
    fn display_is_the_digit_form() {
        let pattern = Pattern::parse("22222").unwrap();
        assert_eq!(pattern.to_string(), "22222");
        let pattern = Pattern::evaluate(&word("crane"), &word("slate"));
        assert_eq!(pattern.to_string(), "00202");
    }

    #[test]
    fn emoji_rendering() {
        let pattern = Pattern::parse("01202").unwrap();
        assert_eq!(pattern.to_emoji(), "⬜🟨🟩⬜🟩");
    }
}
