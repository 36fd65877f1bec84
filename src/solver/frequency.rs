//! Positional letter-frequency scoring
//!
//! A cheap heuristic for "which candidate looks most like a typical answer":
//! score a word by how often its letters occur at their positions across the
//! candidate set, with a small bonus for distinct letters.

use super::SolverError;
use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};

/// Bonus per distinct letter, mildly favoring letter diversity on ties
const DISTINCT_LETTER_BONUS: f64 = 0.1;

/// Per-position letter occurrence counts over a word set
///
/// Rebuilt fresh for each scoring call; the candidate set changes between
/// turns, so there is nothing worth maintaining incrementally.
#[derive(Debug, Clone)]
pub struct PositionFrequencies {
    counts: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
}

impl PositionFrequencies {
    /// Count letter occurrences at each position across `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::PositionFrequencies;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
    /// let table = PositionFrequencies::build(&words);
    ///
    /// assert_eq!(table.count(0, b'c'), 2);
    /// assert_eq!(table.count(3, b'n'), 1);
    /// assert_eq!(table.count(3, b't'), 1);
    /// ```
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut counts = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][letter_index(letter)] += 1;
            }
        }

        Self { counts }
    }

    /// Occurrences of `letter` at `position` across the counted set
    ///
    /// # Panics
    /// Panics if position >= 5 or `letter` is not a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][letter_index(letter)]
    }
}

/// Likelihood score of a word under a frequency table
///
/// Sum of per-position counts plus [`DISTINCT_LETTER_BONUS`] per distinct
/// letter. A tie-break heuristic, not a probability.
#[must_use]
pub fn likelihood_score(word: &Word, table: &PositionFrequencies) -> f64 {
    let positional: u32 = word
        .chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table.count(position, letter))
        .sum();

    f64::from(positional) + DISTINCT_LETTER_BONUS * word.distinct_letters() as f64
}

/// Pick the candidate with the greatest likelihood score
///
/// The table is built from `candidates` itself. The scan keeps the running
/// best only on a strictly greater score, so ties resolve to the earliest
/// word in input order.
///
/// # Errors
/// Returns [`SolverError::EmptyPool`] when `candidates` is empty - an empty
/// set has no maximum.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::best_likelihood_guess;
///
/// let candidates = vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
/// ];
/// let (best, score) = best_likelihood_guess(&candidates).unwrap();
/// assert!(score > 0.0);
/// assert!(candidates.contains(best));
/// ```
pub fn best_likelihood_guess(candidates: &[Word]) -> Result<(&Word, f64), SolverError> {
    let table = PositionFrequencies::build(candidates);

    let mut best: Option<(&Word, f64)> = None;
    for word in candidates {
        let score = likelihood_score(word, &table);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }

    best.ok_or(SolverError::EmptyPool)
}
