//! Core domain types: words, feedback patterns, and the precomputed
//! feedback table.

mod feedback;
mod table;
mod word;

pub use feedback::{Mark, PATTERN_SPACE, PERFECT_CODE, Pattern};
pub use table::FeedbackTable;
pub use word::{WORD_LEN, Word};
