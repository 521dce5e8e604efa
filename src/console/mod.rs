//! Console front end.
//!
//! Line-oriented terminal I/O around the round state machine.

pub mod presenter;
pub mod driver;

pub use presenter::{ConsolePresenter, Presenter};
pub use driver::{play_round, run, DriverError, RoundEnd};
