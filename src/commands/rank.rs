//! Opener ranking command
//!
//! Scores every allowed word against the full answer pool and reports the
//! highest-information openers.

use crate::solver::entropy_of_guess;
use crate::wordlists::WordPools;
use indicatif::{ProgressBar, ProgressStyle};

/// One entry in the opener ranking
#[derive(Debug, Clone)]
pub struct RankedGuess {
    pub word: String,
    pub entropy: f64,
    pub is_possible_answer: bool,
}

/// Rank the allowed pool by entropy against the answer pool
///
/// Returns the top `count` guesses, best first. Ties order the same way the
/// selector breaks them: possible answers first, then pool order.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
#[must_use]
pub fn rank_openers(pools: &WordPools, count: usize) -> Vec<RankedGuess> {
    let pb = ProgressBar::new(pools.allowed.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scoring openers");

    let mut ranked: Vec<RankedGuess> = pools
        .allowed
        .iter()
        .map(|guess| {
            let entry = RankedGuess {
                word: guess.text().to_string(),
                entropy: entropy_of_guess(guess, &pools.answers),
                is_possible_answer: pools.answers.contains(guess),
            };
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_and_clear();

    // Stable sort: equal keys keep pool order, so earliest wins ties
    ranked.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then(b.is_possible_answer.cmp(&a.is_possible_answer))
    });
    ranked.truncate(count);
    ranked
}
