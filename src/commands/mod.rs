//! Command implementations

pub mod advise;
pub mod analyze;
pub mod rank;
pub mod solve;

pub use advise::run_advise;
pub use analyze::{AnalysisResult, analyze_word};
pub use rank::{RankedGuess, rank_openers};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_target};
