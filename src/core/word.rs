//! Validated word representation
//!
//! A `Word` is exactly five lowercase ASCII letters. All validation happens
//! at construction, so the feedback evaluator never re-checks its inputs.

use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A fixed-length lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

impl Word {
    /// Create a new `Word` from a string, normalizing case.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidCharacter` if any character falls
    /// outside a-z (after lowercasing), or `SolverError::InvalidLength` if
    /// the word is not exactly [`WORD_LEN`] letters.
    ///
    /// # Examples
    /// ```
    /// use wordgain::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length
    /// validation.
    pub fn new(text: impl Into<String>) -> Result<Self, SolverError> {
        let text: String = text.into().to_lowercase();

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(SolverError::InvalidCharacter(bad));
        }

        // All chars are ASCII at this point, so byte length == letter count
        if text.len() != WORD_LEN {
            return Err(SolverError::InvalidLength {
                expected: WORD_LEN,
                got: text.len(),
            });
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Count of each letter in the word, used as the consumable multiset
    /// during feedback evaluation.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
