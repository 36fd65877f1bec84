//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and a candidate set, computes the expected information gain,
//! assuming the true solution is uniformly distributed over the candidates.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Calculate the expected information gain of a guess, in bits
///
/// Buckets the candidates by the pattern they would produce against the
/// guess, then takes the Shannon entropy of the bucket distribution.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy_of_guess;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = entropy_of_guess(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn entropy_of_guess(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let buckets = bucket_by_pattern(guess, candidates);
    shannon_entropy(&buckets)
}

/// Count candidates per feedback pattern they produce with the guess
fn bucket_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for solution in candidates {
        let pattern = Pattern::calculate(guess, solution);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern-count distribution
///
/// # Properties
/// - 0.0 exactly when one nonempty bucket holds everything
/// - Maximized for a uniform distribution
/// - Always in [0, log₂(n)] for n nonempty buckets
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
