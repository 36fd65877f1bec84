//! Recommendation and filtering algorithms
//!
//! Pure functions over immutable word slices, plus the [`Advisor`] that owns
//! the one mutable candidate-set slot for a session.

mod advisor;
pub mod entropy;
mod filter;
pub mod frequency;

pub use advisor::{Advisor, FeedbackOutcome, Recommendation};
pub use entropy::{CancelToken, best_entropy_guess, entropy_of_guess};
pub use filter::{filter_candidates, is_consistent};
pub use frequency::{PositionFrequencies, best_likelihood_guess, likelihood_score};

use std::fmt;

/// Error type for scoring operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// A ranking was requested over an empty word set; there is no maximum
    EmptyPool,
    /// The scan was aborted through its cancellation token
    Cancelled,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "cannot rank an empty word pool"),
            Self::Cancelled => write!(f, "scan cancelled"),
        }
    }
}

impl std::error::Error for SolverError {}
