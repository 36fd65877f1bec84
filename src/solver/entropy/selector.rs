//! Best-guess selection by entropy
//!
//! Scans a guess pool for the highest expected information gain against the
//! current candidate set. The scan is embarrassingly parallel, so each guess
//! is scored independently and the winner is picked by an explicit
//! comparator rather than by scan order.

use super::calculator::entropy_of_guess;
use crate::core::Word;
use crate::solver::SolverError;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Candidate-set size above which the scan widens to the full allowed pool
///
/// Large candidate sets are split better by guesses that need not be possible
/// solutions; near the end, guessing a word that could itself be the answer
/// is preferable.
pub const FULL_POOL_THRESHOLD: usize = 30;

/// Shared flag for cooperatively aborting a long scan
///
/// Checked between guesses; cancellation is a responsiveness feature, not a
/// correctness requirement.
///
/// # Examples
/// ```
/// use wordle_advisor::solver::CancelToken;
///
/// let token = CancelToken::new();
/// assert!(!token.is_cancelled());
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone of this token observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::Relaxed);
    }

    /// Check whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::Relaxed)
    }
}

/// A scored entry in the guess pool
#[derive(Debug, Clone, Copy)]
struct ScoredGuess {
    index: usize,
    entropy: f64,
    in_candidates: bool,
}

/// Preference order between two scored guesses; `Greater` means better
///
/// Keys, in order: entropy (bitwise comparison, so membership only ever
/// decides between exactly equal entropies), then membership in the
/// candidate set, then earliest pool position. The final key makes the
/// parallel reduction independent of worker arrival order.
fn rank(a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    a.entropy
        .total_cmp(&b.entropy)
        .then(a.in_candidates.cmp(&b.in_candidates))
        .then(b.index.cmp(&a.index))
}

/// Select the guess with the greatest expected information gain
///
/// Searches the full `allowed` pool when more than [`FULL_POOL_THRESHOLD`]
/// candidates remain, otherwise restricts the search to the candidates
/// themselves. Ties on entropy go to a guess that is itself a possible
/// solution, then to the earliest word in pool order.
///
/// # Errors
/// Returns [`SolverError::EmptyPool`] when the candidate set or the chosen
/// pool is empty.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::best_entropy_guess;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let (best, bits) = best_entropy_guess(&candidates, &candidates).unwrap();
/// assert!(candidates.contains(best));
/// assert!(bits >= 0.0);
/// ```
pub fn best_entropy_guess<'a>(
    candidates: &'a [Word],
    allowed: &'a [Word],
) -> Result<(&'a Word, f64), SolverError> {
    best_entropy_guess_cancellable(candidates, allowed, &CancelToken::new())
}

/// [`best_entropy_guess`] with cooperative cancellation
///
/// # Errors
/// Returns [`SolverError::EmptyPool`] when the candidate set or the chosen
/// pool is empty, and [`SolverError::Cancelled`] when the token fires before
/// the scan finishes.
pub fn best_entropy_guess_cancellable<'a>(
    candidates: &'a [Word],
    allowed: &'a [Word],
    token: &CancelToken,
) -> Result<(&'a Word, f64), SolverError> {
    let pool: &'a [Word] = if candidates.len() > FULL_POOL_THRESHOLD {
        allowed
    } else {
        candidates
    };

    if candidates.is_empty() || pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }

    let candidate_texts: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    let scored = pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            if token.is_cancelled() {
                return Err(SolverError::Cancelled);
            }
            Ok(ScoredGuess {
                index,
                entropy: entropy_of_guess(guess, candidates),
                in_candidates: candidate_texts.contains(guess.text()),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let best = scored
        .iter()
        .max_by(|a, b| rank(a, b))
        .expect("pool verified non-empty");

    Ok((&pool[best.index], best.entropy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    /// Distinct structurally-valid words for size-boundary tests
    fn synthetic_words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| {
                let first = b'a' + (i % 26) as u8;
                let second = b'a' + (i / 26) as u8;
                let text = String::from_utf8(vec![first, second, b'x', b'y', b'x']).unwrap();
                Word::new(text).unwrap()
            })
            .collect()
    }

    #[test]
    fn rank_prefers_higher_entropy() {
        let better = ScoredGuess {
            index: 9,
            entropy: 2.5,
            in_candidates: false,
        };
        let worse = ScoredGuess {
            index: 0,
            entropy: 2.0,
            in_candidates: true,
        };

        assert_eq!(rank(&better, &worse), Ordering::Greater);
        assert_eq!(rank(&worse, &better), Ordering::Less);
    }

    #[test]
    fn rank_breaks_exact_ties_by_candidate_membership() {
        let member = ScoredGuess {
            index: 7,
            entropy: 1.5,
            in_candidates: true,
        };
        let outsider = ScoredGuess {
            index: 0,
            entropy: 1.5,
            in_candidates: false,
        };

        assert_eq!(rank(&member, &outsider), Ordering::Greater);
    }

    #[test]
    fn rank_breaks_full_ties_by_pool_position() {
        let earlier = ScoredGuess {
            index: 2,
            entropy: 1.5,
            in_candidates: true,
        };
        let later = ScoredGuess {
            index: 5,
            entropy: 1.5,
            in_candidates: true,
        };

        assert_eq!(rank(&earlier, &later), Ordering::Greater);
    }

    #[test]
    fn searches_allowed_pool_above_threshold() {
        // 31 candidates: the scan must use `allowed`, which is disjoint here,
        // so the winner can only come from it
        let candidates = synthetic_words(FULL_POOL_THRESHOLD + 1);
        let allowed = words(&["zzzzz"]);

        let (best, _) = best_entropy_guess(&candidates, &allowed).unwrap();
        assert_eq!(best.text(), "zzzzz");
    }

    #[test]
    fn searches_candidates_at_threshold() {
        // Exactly 30 candidates: the scan must ignore `allowed`
        let candidates = synthetic_words(FULL_POOL_THRESHOLD);
        let allowed = words(&["zzzzz"]);

        let (best, _) = best_entropy_guess(&candidates, &allowed).unwrap();
        assert!(candidates.contains(best));
    }

    #[test]
    fn selects_most_informative_guess() {
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let (best, bits) = best_entropy_guess(&candidates, &candidates).unwrap();

        assert!(candidates.contains(best));
        assert!(bits > 0.0);
        assert!(bits <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn single_candidate_has_zero_entropy() {
        let candidates = words(&["crane"]);

        let (best, bits) = best_entropy_guess(&candidates, &candidates).unwrap();

        assert_eq!(best.text(), "crane");
        assert!(bits.abs() < f64::EPSILON);
    }

    #[test]
    fn result_is_deterministic_across_runs() {
        let candidates = synthetic_words(25);

        let first = best_entropy_guess(&candidates, &candidates).unwrap();
        let second = best_entropy_guess(&candidates, &candidates).unwrap();

        assert_eq!(first.0.text(), second.0.text());
        assert!((first.1 - second.1).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_inputs_are_an_error() {
        let empty: Vec<Word> = Vec::new();
        let result = best_entropy_guess(&empty, &empty);
        assert!(matches!(result, Err(SolverError::EmptyPool)));
    }

    #[test]
    fn cancelled_token_aborts_the_scan() {
        let candidates = synthetic_words(40);
        let token = CancelToken::new();
        token.cancel();

        let result = best_entropy_guess_cancellable(&candidates, &candidates, &token);
        assert!(matches!(result, Err(SolverError::Cancelled)));
    }

    #[test]
    fn fresh_token_does_not_interfere() {
        let candidates = words(&["slate", "crate"]);
        let token = CancelToken::new();

        let result = best_entropy_guess_cancellable(&candidates, &candidates, &token);
        assert!(result.is_ok());
    }
}
