//! Solving algorithms: entropy scoring, guess selection, and candidate
//! filtering.

mod entropy;
mod filter;
mod select;

pub use entropy::{entropy_of_guess, entropy_of_row};
pub use filter::{filter_candidates, filter_indices};
pub use select::{EntropyCache, select_guess, select_guess_indexed};
