//! Solver error types
//!
//! Every variant is a data or logic error. Nothing here is transient, so
//! errors are propagated to the caller immediately with no retry or
//! fallback. `InconsistentFeedback` is the one variant that indicts the
//! external feedback source rather than the caller.

use std::fmt;

/// Errors surfaced by the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Word with the wrong number of letters
    InvalidLength { expected: usize, got: usize },
    /// Word containing a character outside a-z
    InvalidCharacter(char),
    /// Feedback code outside the valid range
    InvalidPatternCode(u16),
    /// Feedback string that is not one value per letter in {0, 1, 2}
    InvalidFeedbackString(String),
    /// Word not present in the allowed-guess list
    UnknownWord(String),
    /// Guess selection invoked with no allowed words
    EmptyGuessPool,
    /// Guess selection invoked with an already-empty candidate set (a
    /// caller bug: no valid game state reaches this)
    EmptyCandidates,
    /// Observed feedback eliminated every remaining candidate
    InconsistentFeedback { guess: String },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Word must contain only lowercase ASCII letters, got '{ch}'")
            }
            Self::InvalidPatternCode(code) => {
                write!(f, "Feedback code {code} is out of range")
            }
            Self::InvalidFeedbackString(s) => {
                write!(f, "Invalid feedback string: {s}")
            }
            Self::UnknownWord(word) => {
                write!(f, "Word '{word}' is not in the allowed list")
            }
            Self::EmptyGuessPool => write!(f, "No allowed guess words provided"),
            Self::EmptyCandidates => {
                write!(f, "Guess selection called with an empty candidate set")
            }
            Self::InconsistentFeedback { guess } => {
                write!(
                    f,
                    "Feedback for '{guess}' eliminated every remaining candidate; \
                     an earlier feedback entry must be wrong"
                )
            }
        }
    }
}

impl std::error::Error for SolverError {}
