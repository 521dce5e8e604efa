//! Fair RPS
//!
//! Plays one committed round against the computer.
//!
//! ```text
//! fair-rps Rock Paper Scissors Lizard Spock
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rand::rngs::OsRng;
use tokio::io::BufReader;
use tracing::info;

use fair_rps::{
    config::RoundConfig,
    console::{run, ConsolePresenter, DriverError, RoundEnd},
    game::RoundError,
    VERSION,
};

/// Provably fair rock-paper-scissors with any odd number of moves
#[derive(Parser, Debug)]
#[command(name = "fair-rps", version, long_about = None)]
struct Cli {
    /// Move labels in cycle order (odd count, at least 3, all distinct).
    /// Each move beats the half of the moves listed before it, wrapping around.
    moves: Vec<String>,

    /// Print the final disclosure as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    fair_rps::init_tracing().context("failed to set tracing subscriber")?;

    let cli = Cli::parse();
    info!("Fair RPS v{}", VERSION);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut presenter = ConsolePresenter::new(std::io::stdout()).with_json(cli.json);

    let result = run(cli.moves, OsRng, RoundConfig::from_env(), stdin, &mut presenter).await;
    let status = exit_status(result, &mut std::io::stderr())?;
    Ok(ExitCode::from(status))
}

/// Map a finished round to a process exit status.
///
/// Rejected setup prints a diagnostic to `err` and yields 1. Other driver
/// failures propagate.
fn exit_status(result: Result<RoundEnd, DriverError>, err: &mut impl Write) -> anyhow::Result<u8> {
    match result {
        Ok(RoundEnd::Resolved(disclosure)) => {
            info!(outcome = ?disclosure.outcome, "round complete");
            Ok(0)
        }
        Ok(RoundEnd::Aborted) => Ok(0),
        Err(DriverError::Round(RoundError::Config(config))) => {
            writeln!(err, "Invalid input. {}", config)?;
            writeln!(err, "Example: fair-rps Rock Paper Scissors")?;
            Ok(1)
        }
        Err(other) => Err(other).context("round failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_rps::config::ConfigError;

    #[test]
    fn test_rejected_moves_exit_with_diagnostic() {
        let mut err = Vec::new();
        let result = Err(DriverError::Round(RoundError::Config(ConfigError::EvenMoveCount { count: 4 })));

        assert_eq!(exit_status(result, &mut err).unwrap(), 1);

        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Invalid input. Please provide an odd number of moves (got 4)\n"));
        assert!(text.contains("Example: fair-rps"));
    }

    #[test]
    fn test_finished_rounds_exit_cleanly() {
        let mut err = Vec::new();
        assert_eq!(exit_status(Ok(RoundEnd::Aborted), &mut err).unwrap(), 0);
        assert!(err.is_empty());
    }

    #[test]
    fn test_io_failure_propagates() {
        let mut err = Vec::new();
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        assert!(exit_status(Err(DriverError::Io(io)), &mut err).is_err());
        assert!(err.is_empty());
    }
}
