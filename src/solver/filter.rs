//! Candidate filtering against observed feedback
//!
//! A candidate survives a (guess, pattern) observation exactly when guessing
//! against it would have produced that pattern.

use crate::core::{Pattern, Word};

/// Check whether a candidate is consistent with one observation
#[inline]
#[must_use]
pub fn is_consistent(guess: &Word, pattern: Pattern, candidate: &Word) -> bool {
    Pattern::calculate(guess, candidate) == pattern
}

/// Filter a candidate set down to the words consistent with an observation
///
/// The result preserves the input order (stable filter, never re-sorted);
/// display and first-remaining semantics depend on it. An empty result is a
/// valid outcome: it means the observed feedback contradicts the candidate
/// pool, and the caller decides what to do about it.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::filter_candidates;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
///     Word::new("grape").unwrap(),
/// ];
/// let guess = Word::new("crane").unwrap();
/// let pattern = Pattern::from_str("-CC-C").unwrap(); // crane vs grape
///
/// let remaining = filter_candidates(&candidates, &guess, pattern);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "grape");
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|candidate| is_consistent(guess, pattern, candidate))
        .cloned()
        .collect()
}
