//! # Fair RPS
//!
//! Provably fair rock-paper-scissors generalised to any odd number of moves.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                                │
//! │  ├── rng.rs      - Seedable Xorshift128+, unbiased sampling  │
//! │  └── hash.rs     - 256-bit values and hex encoding           │
//! │                                                              │
//! │  game/           - Rule engine (pure)                        │
//! │  ├── moves.rs    - Validated move labels                     │
//! │  ├── rules.rs    - Circulant "who beats whom" matrix         │
//! │  ├── outcome.rs  - Draw / win / lose resolution              │
//! │  ├── table.rs    - Rules table for the help screen           │
//! │  └── round.rs    - Round state machine and disclosure        │
//! │                                                              │
//! │  proof/          - Fairness                                  │
//! │  └── commitment.rs - HMAC-SHA3-256 move commitment           │
//! │                                                              │
//! │  console/        - Terminal I/O                              │
//! │  ├── presenter.rs- Output protocol                           │
//! │  └── driver.rs   - Async prompt loop                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The automated move is fixed, and its keyed digest shown, before the human
//! is asked. The key is only disclosed once the human has chosen, so:
//! - the human learns nothing about the automated move in advance
//! - the automated move cannot be swapped afterwards without the digest
//!   failing to verify

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod core;
pub mod game;
pub mod proof;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

// Re-export commonly used types
pub use config::{ConfigError, RoundConfig};
pub use core::rng::DeterministicRng;
pub use game::{MoveSet, Outcome, RoundCoordinator, RoundDisclosure, RoundState, RuleMatrix};
pub use proof::{CommitmentScheme, SecretKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`. Logs go to stderr so stdout carries only the
/// game protocol.
pub fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
