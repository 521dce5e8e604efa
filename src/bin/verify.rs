//! Commitment Verifier
//!
//! Checks a disclosed key against the digest shown before the move.
//!
//! ```text
//! fair-rps-verify --key <KEY> --digest <HMAC> Scissors
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use fair_rps::proof::verify_hex;

/// Verify a fair-rps commitment after the round
#[derive(Parser, Debug)]
#[command(name = "fair-rps-verify", version, long_about = None)]
struct Args {
    /// Disclosed HMAC key (64 hex characters)
    #[arg(short, long)]
    key: String,

    /// HMAC shown before the move (64 hex characters)
    #[arg(short, long)]
    digest: String,

    /// Computer move label as disclosed
    #[arg(value_name = "MOVE")]
    move_label: String,
}

fn main() -> anyhow::Result<ExitCode> {
    fair_rps::init_tracing().context("failed to set tracing subscriber")?;

    let args = Args::parse();
    debug!(move_label = %args.move_label, "verifying commitment");

    let valid = verify_hex(&args.key, &args.move_label, &args.digest)
        .context("could not read key or digest")?;

    if valid {
        println!("VALID");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("INVALID");
        Ok(ExitCode::FAILURE)
    }
}
