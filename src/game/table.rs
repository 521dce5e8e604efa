//! Help Table
//!
//! Renders the rule matrix as an N x N grid. Cell (row, col) reads
//! "Draw", "Win" or "Lose" for the row move played against the column move.

use std::fmt;

use super::moves::MoveSet;
use super::outcome::resolve;
use super::rules::RuleMatrix;

/// Header of the label column.
const CORNER: &str = "Move";

/// Grid of outcome labels, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RulesTable {
    /// Build the table for `moves` under `matrix`.
    ///
    /// `matrix` must have been built for `moves.len()` moves.
    pub fn new(moves: &MoveSet, matrix: &RuleMatrix) -> Self {
        debug_assert_eq!(moves.len(), matrix.move_count());

        let header = std::iter::once(CORNER.to_string())
            .chain(moves.iter().map(str::to_string))
            .collect();

        let rows = moves
            .iter()
            .enumerate()
            .map(|(row, label)| {
                std::iter::once(label.to_string())
                    .chain((0..moves.len()).map(|col| resolve(row, col, matrix).table_label().to_string()))
                    .collect()
            })
            .collect();

        Self { header, rows }
    }

    /// Text of cell (row, col), excluding the label column.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col + 1).map(String::as_str)
    }

    fn column_widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(c, head)| {
                self.rows
                    .iter()
                    .map(|r| r[c].chars().count())
                    .chain(std::iter::once(head.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", "-".repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (cell, w) in cells.iter().zip(widths) {
        let pad = w - cell.chars().count();
        write!(f, "| {}{} ", cell, " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for RulesTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_rule(f, &widths)?;
        write_row(f, &self.header, &widths)?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        write_rule(f, &widths)
    }
}
