//! Session state for an advising run
//!
//! The [`Advisor`] owns the word pools and the single mutable candidate-set
//! slot. Scoring reads it; applying feedback replaces it wholesale with the
//! filter result. It is never edited in place and never re-expanded.

use super::entropy::best_entropy_guess;
use super::filter::filter_candidates;
use super::frequency::best_likelihood_guess;
use super::SolverError;
use crate::core::{Pattern, Word};
use crate::wordlists::WordPools;

/// Both recommendations for the current turn
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Guess maximizing expected information gain, with its entropy in bits
    pub max_info: (Word, f64),
    /// Candidate maximizing the positional-frequency likelihood score
    pub most_likely: (Word, f64),
}

/// Result of applying one round of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// All-correct feedback; the session is over
    Solved { turn: u32 },
    /// Candidates narrowed (or held); play continues on the next turn
    Narrowed { remaining: usize },
    /// No candidate is consistent with the feedback given so far
    Contradiction,
}

/// Coordinates one advising session over loaded word pools
pub struct Advisor {
    answers: Vec<Word>,
    allowed: Vec<Word>,
    candidates: Vec<Word>,
    turn: u32,
    solved: bool,
}

impl Advisor {
    /// Start a session with the full answer pool as candidates
    #[must_use]
    pub fn new(pools: WordPools) -> Self {
        let WordPools { answers, allowed } = pools;
        let candidates = answers.clone();

        Self {
            answers,
            allowed,
            candidates,
            turn: 1,
            solved: false,
        }
    }

    /// Current turn number, starting at 1
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether all-correct feedback has been applied
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Words still consistent with every applied observation, in load order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The full guessable pool
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// The original answer pool the session started from
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Compute both recommendations for the current candidate set
    ///
    /// Read-only; the candidate set is not touched.
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyPool`] when no candidates remain.
    pub fn recommend(&self) -> Result<Recommendation, SolverError> {
        let (info_word, bits) = best_entropy_guess(&self.candidates, &self.allowed)?;
        let (likely_word, score) = best_likelihood_guess(&self.candidates)?;

        Ok(Recommendation {
            max_info: (info_word.clone(), bits),
            most_likely: (likely_word.clone(), score),
        })
    }

    /// Apply one observed (guess, pattern) pair
    ///
    /// The candidate slot is replaced with the filter result in every case.
    /// The turn counter advances only for an accepted, non-terminal round:
    /// neither a solve nor a contradiction starts a new turn.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: Pattern) -> FeedbackOutcome {
        self.candidates = filter_candidates(&self.candidates, guess, pattern);

        if pattern.is_perfect() {
            self.solved = true;
            return FeedbackOutcome::Solved { turn: self.turn };
        }

        if self.candidates.is_empty() {
            return FeedbackOutcome::Contradiction;
        }

        self.turn += 1;
        FeedbackOutcome::Narrowed {
            remaining: self.candidates.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pools(texts: &[&str]) -> WordPools {
        let answers: Vec<Word> = texts.iter().map(|t| word(t)).collect();
        let allowed = answers.clone();
        WordPools { answers, allowed }
    }

    #[test]
    fn new_session_starts_with_full_answer_pool() {
        let advisor = Advisor::new(pools(&["crane", "slate", "grape"]));

        assert_eq!(advisor.turn(), 1);
        assert!(!advisor.is_solved());
        assert_eq!(advisor.candidates(), advisor.answers());
    }

    #[test]
    fn feedback_narrows_and_advances_the_turn() {
        let mut advisor = Advisor::new(pools(&["crane", "slate", "grape"]));

        let guess = word("crane");
        let pattern = Pattern::calculate(&guess, &word("grape"));
        let outcome = advisor.apply_feedback(&guess, pattern);

        assert_eq!(outcome, FeedbackOutcome::Narrowed { remaining: 1 });
        assert_eq!(advisor.turn(), 2);
        assert_eq!(advisor.candidates(), &[word("grape")]);
    }

    #[test]
    fn candidates_never_grow() {
        let mut advisor = Advisor::new(pools(&["crane", "slate", "grape", "crate"]));
        let mut previous = advisor.candidates().len();

        for guess_text in ["slate", "crane"] {
            let guess = word(guess_text);
            let pattern = Pattern::calculate(&guess, &word("crate"));
            advisor.apply_feedback(&guess, pattern);

            assert!(advisor.candidates().len() <= previous);
            previous = advisor.candidates().len();
        }
    }

    #[test]
    fn perfect_feedback_solves_without_advancing_turn() {
        let mut advisor = Advisor::new(pools(&["crane", "slate"]));

        let outcome = advisor.apply_feedback(&word("slate"), Pattern::PERFECT);

        assert_eq!(outcome, FeedbackOutcome::Solved { turn: 1 });
        assert!(advisor.is_solved());
        assert_eq!(advisor.turn(), 1);
        // The candidate slot holds exactly the solved word
        assert_eq!(advisor.candidates(), &[word("slate")]);
    }

    #[test]
    fn contradictory_feedback_empties_the_slot() {
        let mut advisor = Advisor::new(pools(&["crane", "slate"]));

        // All-yellow ZZZZZ is impossible against this pool
        let outcome = advisor.apply_feedback(&word("zzzzz"), Pattern::from_str("PPPPP").unwrap());

        assert_eq!(outcome, FeedbackOutcome::Contradiction);
        assert!(advisor.candidates().is_empty());
        assert_eq!(advisor.turn(), 1);
    }

    #[test]
    fn recommend_is_read_only() {
        let advisor = Advisor::new(pools(&["crane", "slate", "grape"]));

        let before = advisor.candidates().to_vec();
        let recommendation = advisor.recommend().unwrap();

        assert_eq!(advisor.candidates(), before);
        assert!(advisor.candidates().contains(&recommendation.most_likely.0));
    }

    #[test]
    fn recommend_on_empty_slot_is_an_error() {
        let mut advisor = Advisor::new(pools(&["crane", "slate"]));
        advisor.apply_feedback(&word("zzzzz"), Pattern::from_str("PPPPP").unwrap());

        assert!(matches!(
            advisor.recommend(),
            Err(SolverError::EmptyPool)
        ));
    }
}
