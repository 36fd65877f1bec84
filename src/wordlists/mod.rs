//! Word pools and where they come from
//!
//! A session needs two pools: the answer pool (possible solutions, candidate
//! order comes from here) and the allowed pool (everything playable as a
//! guess). Their origin is a [`WordSource`] configuration value resolved once
//! before any solving starts.

pub mod loader;

use crate::core::Word;
use loader::{dedup_words, load_from_file, words_from_slice};
use std::io;
use std::path::{Path, PathBuf};

/// Built-in word list used when no files are available
///
/// Small enough to embed, large enough to try the advisor immediately.
pub const FALLBACK: &[&str] = &[
    "arise", "adieu", "alone", "angle", "apple", "baker", "basic", "beach", "beast", "belly",
    "brave", "candy", "cater", "chair", "crane", "cream", "crown", "eagle", "fancy", "flame",
    "glare", "grain", "grape", "graph", "great", "heart", "linen", "magma", "major", "maple",
    "ocean", "plant", "pride", "primo", "quiet", "raise", "ratio", "slate", "stare", "trace",
];

/// The two pools a session runs over
///
/// `answers` keeps load order (candidate-set order derives from it);
/// `allowed` is the deduplicated, sorted union of both lists, so every
/// answer is always playable.
#[derive(Debug, Clone)]
pub struct WordPools {
    pub answers: Vec<Word>,
    pub allowed: Vec<Word>,
}

/// Where word lists come from, decided once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A single file serving as both answer and allowed list
    Combined(PathBuf),
    /// Separate answer and allowed files; either may be absent
    Split {
        answers: Option<PathBuf>,
        allowed: Option<PathBuf>,
    },
    /// The embedded [`FALLBACK`] list
    Fallback,
}

impl WordSource {
    /// Probe a directory for word list files
    ///
    /// Checks `words.txt` first (combined), then `answers.txt` /
    /// `allowed.txt`, and falls back to the embedded list when none exist.
    #[must_use]
    pub fn detect(dir: &Path) -> Self {
        let combined = dir.join("words.txt");
        if combined.exists() {
            return Self::Combined(combined);
        }

        let answers = dir.join("answers.txt");
        let allowed = dir.join("allowed.txt");
        let answers = answers.exists().then_some(answers);
        let allowed = allowed.exists().then_some(allowed);

        if answers.is_some() || allowed.is_some() {
            return Self::Split { answers, allowed };
        }

        Self::Fallback
    }

    /// Load and condition the pools this source describes
    ///
    /// Invalid lines are skipped during loading. The answer list is
    /// deduplicated in load order; the allowed list becomes the sorted,
    /// deduplicated union of both lists. An empty answer list falls back to
    /// the allowed list, so candidates always exist when any words loaded.
    ///
    /// # Errors
    /// Returns an I/O error if a named file cannot be read, or
    /// `InvalidData` if no valid words survive loading.
    pub fn resolve(&self) -> io::Result<WordPools> {
        let (answers, allowed) = match self {
            Self::Combined(path) => {
                let words = load_from_file(path)?;
                (words.clone(), words)
            }
            Self::Split { answers, allowed } => {
                let answers = match answers {
                    Some(path) => load_from_file(path)?,
                    None => Vec::new(),
                };
                let allowed = match allowed {
                    Some(path) => load_from_file(path)?,
                    None => Vec::new(),
                };
                (answers, allowed)
            }
            Self::Fallback => {
                let words = words_from_slice(FALLBACK);
                (words.clone(), words)
            }
        };

        let pools = condition_pools(answers, allowed);
        if pools.answers.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "no valid words loaded from the configured source",
            ));
        }

        Ok(pools)
    }
}

/// Apply the pool invariants: deduplicated answers, sorted allowed union,
/// answers defaulting to the allowed list when empty
fn condition_pools(answers: Vec<Word>, allowed: Vec<Word>) -> WordPools {
    let answers = dedup_words(answers);

    let mut union: Vec<Word> = allowed;
    union.extend(answers.iter().cloned());
    union.sort_by(|a, b| a.text().cmp(b.text()));
    union.dedup();

    let answers = if answers.is_empty() {
        union.clone()
    } else {
        answers
    };

    WordPools {
        answers,
        allowed: union,
    }
}
