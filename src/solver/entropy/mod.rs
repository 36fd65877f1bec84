//! Shannon-entropy guess scoring
//!
//! Ranks prospective guesses by the expected information (bits) their
//! feedback would reveal about the current candidate set.

mod calculator;
mod selector;

pub use calculator::{entropy_of_guess, shannon_entropy};
pub use selector::{CancelToken, FULL_POOL_THRESHOLD, best_entropy_guess, best_entropy_guess_cancellable};
