//! Wordgain
//!
//! An entropy-driven Wordle solver. Every round it picks the guess whose
//! feedback pattern splits the remaining candidates into the most even
//! partition, measured in bits of Shannon entropy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgain::core::{Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let pattern = Pattern::evaluate(&guess, &answer);
//! assert_eq!(pattern.encode(), 20);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game loop and simulation
pub mod game;

// Word list loading
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Error types
pub mod error;
