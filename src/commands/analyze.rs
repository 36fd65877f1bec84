//! Word analysis command
//!
//! Scores a single word against the answer pool with both recommenders.

use crate::core::Word;
use crate::solver::{PositionFrequencies, entropy_of_guess, likelihood_score};
use crate::wordlists::WordPools;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub likelihood: f64,
    pub is_possible_answer: bool,
    pub total_candidates: usize,
}

/// Analyze the entropy and likelihood of a word against the answer pool
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the allowed pool
pub fn analyze_word(word: &str, pools: &WordPools) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !pools.allowed.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let entropy = entropy_of_guess(&word_obj, &pools.answers);
    let table = PositionFrequencies::build(&pools.answers);
    let likelihood = likelihood_score(&word_obj, &table);

    let total_candidates = pools.answers.len();
    let expected_reduction = entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy,
        expected_reduction,
        expected_remaining,
        likelihood,
        is_possible_answer: pools.answers.contains(&word_obj),
        total_candidates,
    })
}
