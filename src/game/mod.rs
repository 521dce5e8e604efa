//! Game logic.
//!
//! Pure rule engine plus the single-round state machine. Nothing here
//! touches the terminal; the `console` module supplies I/O.

pub mod moves;
pub mod rules;
pub mod outcome;
pub mod table;
pub mod round;

pub use moves::{MoveSet, MIN_MOVES};
pub use rules::{RuleError, RuleMatrix};
pub use outcome::{resolve, Outcome};
pub use table::RulesTable;
pub use round::{
    parse_input, HumanInput, InvalidChoice, Prompt,
    RoundCoordinator, RoundDisclosure, RoundError, RoundState, Step,
};
