//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the per-position feedback for one guess against one solution:
//! - `Absent`: letter not in the solution (gray)
//! - `Present`: letter in the solution, wrong position (yellow)
//! - `Correct`: letter in the correct position (green)
//!
//! Patterns are produced by [`Pattern::calculate`] or parsed from user input;
//! they are never assembled ad hoc anywhere else.

use super::word::letter_index;
use super::{ALPHABET_SIZE, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the solution (gray)
    Absent,
    /// Letter in the solution but in the wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl Feedback {
    /// Parse from a character
    ///
    /// Accepts `C`/`P`/`N`, the common `G`/`Y`/`-`/`_` spelling, and emoji squares.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'c' | 'g' | '🟩' => Some(Self::Correct),
            'p' | 'y' | '🟨' => Some(Self::Present),
            'n' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Render as an emoji square
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Exactly one [`Feedback`] symbol per letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Get the per-position feedback symbols
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `solution` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens); every other solution letter
    ///    goes into a remaining-count pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) while the pool
    ///    still holds the letter, decrementing as it goes
    ///
    /// A letter never collects more Present + Correct marks than its count in
    /// the solution, and Correct always takes priority over Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &solution);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(pattern, Pattern::from_str("--g-g").unwrap());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut remaining = [0u8; ALPHABET_SIZE];

        // First pass: mark greens; everything else stays claimable as yellow
        // Allow: index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == solution.char_at(i) {
                result[i] = Feedback::Correct;
            } else {
                remaining[letter_index(solution.char_at(i))] += 1;
            }
        }

        // Second pass: mark yellows from the remaining pool
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != Feedback::Correct {
                let idx = letter_index(guess.char_at(i));
                if remaining[idx] > 0 {
                    result[i] = Feedback::Present;
                    remaining[idx] -= 1;
                }
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Parse a pattern from a string like "CPNCN", "GY-GY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts per position:
    /// - 'C'/'c'/'G'/'g'/🟩 for green
    /// - 'P'/'p'/'Y'/'y'/🟨 for yellow
    /// - 'N'/'n'/'-'/'_'/⬜/⬛ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("CP-CP").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::Absent; WORD_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            result[i] = Feedback::from_char(ch)?;
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p = Pattern::from_str("CP-CP").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_correct(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));

        assert_eq!(pattern, Pattern::from_str("-----").unwrap());
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_self_match_is_perfect() {
        for w in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(w);
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_duplicate_letters_capped_by_remaining() {
        // SASSY vs CLASS: the middle S is exact, leaving one claimable S.
        // S(yellow) A(yellow) S(gray) S(green) Y(gray)
        let pattern = Pattern::calculate(&word("sassy"), &word("class"));
        assert_eq!(pattern, Pattern::from_str("PP-C-").unwrap());
    }

    #[test]
    fn pattern_duplicate_letters_yellow_only() {
        // SPEED vs ERASE: both E's are yellow (ERASE has 2 E's), S is yellow
        let pattern = Pattern::calculate(&word("speed"), &word("erase"));

        assert_eq!(pattern, Pattern::from_str("P-PP-").unwrap());
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 3);
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let pattern = Pattern::calculate(&word("robot"), &word("floor"));

        assert_eq!(pattern, Pattern::from_str("PP-C-").unwrap());
        assert_eq!(pattern.count_correct(), 1);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn pattern_alert_vs_level() {
        // No exact matches; L and E each claimed once from the pool
        let pattern = Pattern::calculate(&word("alert"), &word("level"));
        assert_eq!(pattern, Pattern::from_str("-PP--").unwrap());
    }

    #[test]
    fn pattern_crane_vs_grape() {
        // R, A, E exact; C and N absent
        let pattern = Pattern::calculate(&word("crane"), &word("grape"));
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Absent,
                Feedback::Correct,
            ]
        );
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("CPC--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("CPCCPN").is_none()); // Too long (6 chars)
        assert!(Pattern::from_str("CPC").is_none()); // Too short
        assert!(Pattern::from_str("CXCCP").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_real_wordle_example() {
        // Classic example: CRANE vs SLATE
        let pattern = Pattern::calculate(&word("crane"), &word("slate"));

        // C(gray) R(gray) A(green) N(gray) E(green) - SLATE has no R
        assert_eq!(pattern, Pattern::from_str("--C-C").unwrap());
        assert_eq!(pattern.count_correct(), 2); // A and E
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_display_is_emoji() {
        let pattern = Pattern::from_str("C-PC-").unwrap();
        assert_eq!(format!("{pattern}"), "🟩⬜🟨🟩⬜");
    }
}
