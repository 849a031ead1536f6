//! Command implementations

pub mod analyze;
pub mod assist;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisReport, analyze_word};
pub use assist::run_assist;
pub use simulate::run_simulation;
pub use solve::{SolveReport, SolveStep, solve_word};
