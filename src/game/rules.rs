//! Rule Matrix
//!
//! Circular domination relation for N moves (N odd, N >= 3).
//!
//! Moves sit on a cycle. Each move beats the (N-1)/2 moves before it and
//! loses to the (N-1)/2 moves after it:
//!
//! ```text
//!   defeats(i) = { (i - j) mod N : j = 1 ..= (N-1)/2 }
//! ```
//!
//! For `[Rock, Paper, Scissors]` this gives Rock > Scissors, Paper > Rock,
//! Scissors > Paper. The relation is a circulant tournament: irreflexive,
//! antisymmetric, and total over distinct pairs.

use std::collections::BTreeSet;
use thiserror::Error;

use super::moves::MIN_MOVES;

/// Move count the matrix cannot be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    /// N is below three or even.
    #[error("invalid move count {0}: need an odd number of at least 3")]
    InvalidMoveCount(usize),
}

/// Immutable "who beats whom" table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatrix {
    /// `defeats[i]` holds every index move `i` beats.
    defeats: Vec<BTreeSet<usize>>,
}

impl RuleMatrix {
    /// Build the relation for `move_count` moves.
    pub fn build(move_count: usize) -> Result<Self, RuleError> {
        if move_count < MIN_MOVES || move_count % 2 == 0 {
            return Err(RuleError::InvalidMoveCount(move_count));
        }

        let half = (move_count - 1) / 2;
        let defeats = (0..move_count)
            .map(|i| {
                (1..=half)
                    .map(|j| (i + move_count - j) % move_count)
                    .collect()
            })
            .collect();

        Ok(Self { defeats })
    }

    /// Number of moves (N).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.defeats.len()
    }

    /// Does move `i` beat move `j`?
    ///
    /// False for `i == j` and for out-of-range indices.
    #[inline]
    pub fn beats(&self, i: usize, j: usize) -> bool {
        self.defeats.get(i).is_some_and(|set| set.contains(&j))
    }

    /// Indices move `i` beats, in ascending order.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn defeats(&self, i: usize) -> &BTreeSet<usize> {
        &self.defeats[i]
    }

    /// Indices that beat move `i`, in ascending order.
    pub fn defeated_by(&self, i: usize) -> BTreeSet<usize> {
        (0..self.move_count()).filter(|&j| self.beats(j, i)).collect()
    }
}
