//! Self-play command
//!
//! Replays the advisor against a known target word and records the path it
//! takes, one recommendation per turn.

use crate::core::{Pattern, Word};
use crate::solver::{Advisor, FeedbackOutcome};
use crate::wordlists::WordPools;

/// Configuration for a self-play run
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 6,
        }
    }
}

/// A single turn in the solution path
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Result of a self-play run
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
}

/// Play the advisor's max-info recommendation against `target` until solved
/// or out of turns
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the answer pool
/// - The advisor runs out of candidates mid-game
pub fn solve_target(config: SolveConfig, pools: &WordPools) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !pools.answers.contains(&target) {
        return Err(format!("Target '{}' not in answer pool", config.target));
    }

    let mut advisor = Advisor::new(pools.clone());
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = advisor.candidates().len();

        let recommendation = advisor.recommend().map_err(|e| e.to_string())?;
        let (guess, entropy) = recommendation.max_info;

        let pattern = Pattern::calculate(&guess, &target);
        let outcome = advisor.apply_feedback(&guess, pattern);
        let candidates_after = advisor.candidates().len();

        steps.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
        });

        match outcome {
            FeedbackOutcome::Solved { .. } => {
                return Ok(SolveResult {
                    success: true,
                    steps,
                    target: config.target,
                });
            }
            FeedbackOutcome::Contradiction => {
                // Unreachable with a validated target; surface it rather than loop
                return Err("candidate set emptied during self-play".to_string());
            }
            FeedbackOutcome::Narrowed { .. } => {}
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        target: config.target,
    })
}
