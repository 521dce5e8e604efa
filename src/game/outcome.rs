//! Outcome Resolution

use serde::{Deserialize, Serialize};

use super::rules::RuleMatrix;

/// Result of a round from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both chose the same move.
    Draw,
    /// Human's move beats the automated move.
    HumanWins,
    /// Automated move beats the human's move.
    HumanLoses,
}

impl Outcome {
    /// Cell text for the rules table (row player's view).
    pub fn table_label(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::HumanWins => "Win",
            Self::HumanLoses => "Lose",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draw => write!(f, "It's a draw!"),
            Self::HumanWins => write!(f, "You win!"),
            Self::HumanLoses => write!(f, "You lose!"),
        }
    }
}

/// Decide the round given both zero-based move indices.
///
/// Indices must already be range-checked against `matrix`.
#[inline]
pub fn resolve(human: usize, automated: usize, matrix: &RuleMatrix) -> Outcome {
    if human == automated {
        Outcome::Draw
    } else if matrix.beats(human, automated) {
        Outcome::HumanWins
    } else {
        Outcome::HumanLoses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_move_draws() {
        for n in [3, 5, 7, 9] {
            let matrix = RuleMatrix::build(n).unwrap();
            for i in 0..n {
                assert_eq!(resolve(i, i, &matrix), Outcome::Draw);
            }
        }
    }

    #[test]
    fn test_follows_matrix() {
        for n in [3, 5, 7, 9, 11] {
            let matrix = RuleMatrix::build(n).unwrap();
            for i in 0..n {
                for j in (0..n).filter(|&j| j != i) {
                    let expected = if matrix.beats(i, j) {
                        Outcome::HumanWins
                    } else {
                        Outcome::HumanLoses
                    };
                    assert_eq!(resolve(i, j, &matrix), expected);
                }
            }
        }
    }

    #[test]
    fn test_rock_beats_scissors() {
        let matrix = RuleMatrix::build(3).unwrap();
        assert_eq!(resolve(0, 2, &matrix), Outcome::HumanWins);
        assert_eq!(resolve(0, 1, &matrix), Outcome::HumanLoses);
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&Outcome::HumanWins).unwrap();
        assert_eq!(json, "\"human_wins\"");
    }
}
