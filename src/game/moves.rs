//! Move Set
//!
//! The ordered, duplicate-free list of move labels a round is played with.
//! Index `i` is the label's position; the human sees it as `i + 1`.

use std::collections::BTreeSet;
use std::ops::Index;

use crate::config::ConfigError;

/// Smallest playable number of moves.
pub const MIN_MOVES: usize = 3;

/// Validated move labels.
///
/// Always odd in length, at least [`MIN_MOVES`] long, and free of
/// duplicates (byte-exact comparison).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate `labels` and build the set.
    ///
    /// Checks run in order: count, parity, uniqueness.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let count = labels.len();

        if count < MIN_MOVES {
            return Err(ConfigError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(ConfigError::EvenMoveCount { count });
        }

        let mut seen = BTreeSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateMove {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Number of moves (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true for a validated set; provided for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at zero-based `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Iterate labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Zero-based index of `label`, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl Index<usize> for MoveSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.labels[index]
    }
}
