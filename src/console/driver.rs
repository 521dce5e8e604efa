//! Prompt Loop
//!
//! Runs a round against a line-oriented input stream. The loop suspends in
//! exactly one place: awaiting the next input line. There is no timeout;
//! the exit token (or end of input) is the only way out short of a choice.

use rand::RngCore;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::config::RoundConfig;
use crate::game::{MoveSet, RoundCoordinator, RoundDisclosure, RoundError, RoundState, Step};

use super::presenter::Presenter;

/// Driver failures. Always fatal.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The round rejected its setup or could not commit.
    #[error(transparent)]
    Round(#[from] RoundError),

    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnd {
    /// Human chose a move; everything was disclosed.
    Resolved(RoundDisclosure),
    /// Human left; nothing was disclosed.
    Aborted,
}

/// Validate `labels`, then play one round.
pub async fn run<R, I, P>(
    labels: Vec<String>,
    rng: R,
    config: RoundConfig,
    input: I,
    presenter: &mut P,
) -> Result<RoundEnd, DriverError>
where
    R: RngCore,
    I: AsyncBufRead + Unpin,
    P: Presenter,
{
    let moves = MoveSet::new(labels).map_err(RoundError::from)?;
    let mut round = RoundCoordinator::new(moves, rng, config)?;
    play_round(&mut round, input, presenter).await
}

/// Play `round` to a terminal state.
///
/// Commits first if the round is still `Initialized`.
pub async fn play_round<R, I, P>(
    round: &mut RoundCoordinator<R>,
    mut input: I,
    presenter: &mut P,
) -> Result<RoundEnd, DriverError>
where
    R: RngCore,
    I: AsyncBufRead + Unpin,
    P: Presenter,
{
    if round.state() == RoundState::Initialized {
        round.commit()?;
    }

    let prompt = round.open_prompt()?;
    presenter.prompt(&prompt)?;

    let mut line = Vec::new();
    loop {
        presenter.ask()?;

        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            warn!("input closed before a move was chosen");
            round.abort();
            presenter.aborted()?;
            return Ok(RoundEnd::Aborted);
        }
        debug!(len = line.len(), "input line received");

        match round.submit_bytes(&line)? {
            Step::Help(table) => presenter.help(&table)?,
            Step::Invalid(error) => presenter.invalid(&error)?,
            Step::Resolved(disclosure) => {
                presenter.resolved(&disclosure)?;
                return Ok(RoundEnd::Resolved(disclosure));
            }
            Step::Aborted => {
                presenter.aborted()?;
                return Ok(RoundEnd::Aborted);
            }
        }
    }
}
