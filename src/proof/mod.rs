//! Fairness Proof
//!
//! The automated chooser commits to its move with a keyed digest before the
//! human picks, and discloses the key afterwards:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - HMAC-SHA3-256 move commitment + verify   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;

// Re-export key types
pub use commitment::{
    commit, verify, verify_hex,
    Commitment, CommitmentError, CommitmentScheme, SecretKey, KEY_LEN,
};
