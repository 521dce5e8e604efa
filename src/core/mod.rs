//! Core primitives.
//!
//! Entropy sources and digest encoding shared by the rule engine and the
//! commitment protocol.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::{DeterministicRng, uniform_index};
pub use hash::{Digest256, HexError, parse_hex256, to_hex};
