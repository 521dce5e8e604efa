//! Move Commitment Protocol
//!
//! Commit to the automated move before the human chooses.
//! Reveal the key after the human has committed so anyone can verify.
//!
//! ```text
//!   generate_key ──► commit(key, move) ──► digest published
//!                                               │
//!                        human chooses ◄────────┘
//!                                               │
//!   verify(key, move, digest) ◄── key revealed ◄┘
//! ```
//!
//! The digest is HMAC-SHA3-256 keyed by 32 random bytes over the move
//! label. Without the key the digest says nothing about the move; once the
//! key is published, a different move label cannot reproduce it.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha3::Sha3_256;
use thiserror::Error;

use crate::core::hash::{parse_hex256, to_hex, Digest256, HexError};
use crate::core::rng::uniform_index;

/// Keyed digest construction used for every commitment.
type HmacSha3 = Hmac<Sha3_256>;

/// Length of the commitment key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Errors raised by the commitment protocol.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// The injected entropy source could not supply bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    /// A key or digest could not be decoded.
    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] HexError),
}

/// Secret commitment key.
///
/// `Debug` never prints the bytes; the only way to disclose a key is
/// [`SecretKey::to_hex`], which the round calls on reveal.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a key from its hex disclosure.
    pub fn from_hex(input: &str) -> Result<Self, CommitmentError> {
        Ok(Self(parse_hex256(input)?))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex disclosure of the key.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// A key and the digest it produced for one move label.
///
/// Only the digest may be shown before reveal.
#[derive(Debug, Clone)]
pub struct Commitment {
    key: SecretKey,
    digest: Digest256,
}

impl Commitment {
    /// Digest published before the human moves.
    pub fn digest(&self) -> &Digest256 {
        &self.digest
    }

    /// Hex form of the published digest.
    pub fn digest_hex(&self) -> String {
        to_hex(&self.digest)
    }

    /// Consume the commitment and hand out its key for disclosure.
    pub fn reveal(self) -> SecretKey {
        self.key
    }
}

/// Commitment scheme bound to an entropy source.
///
/// The source is injected at construction: `OsRng` in production,
/// a seeded [`DeterministicRng`](crate::core::rng::DeterministicRng) in tests.
#[derive(Debug)]
pub struct CommitmentScheme<R> {
    rng: R,
}

impl<R: RngCore> CommitmentScheme<R> {
    /// Create a scheme drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a fresh 256-bit key.
    pub fn generate_key(&mut self) -> Result<SecretKey, CommitmentError> {
        let mut bytes = [0u8; KEY_LEN];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(CommitmentError::EntropyUnavailable)?;
        Ok(SecretKey(bytes))
    }

    /// Draw a uniform index in `[0, bound)` from the same source.
    pub fn draw_index(&mut self, bound: usize) -> Result<usize, CommitmentError> {
        uniform_index(&mut self.rng, bound).map_err(CommitmentError::EntropyUnavailable)
    }

    /// Generate a key and commit to `move_label` under it.
    pub fn commit_move(&mut self, move_label: &str) -> Result<Commitment, CommitmentError> {
        let key = self.generate_key()?;
        let digest = commit(&key, move_label);
        Ok(Commitment { key, digest })
    }
}

/// Compute the keyed digest of `move_label` under `key`.
pub fn commit(key: &SecretKey, move_label: &str) -> Digest256 {
    new_mac(key, move_label).finalize().into_bytes().into()
}

/// Check that `digest` is the commitment of `move_label` under `key`.
///
/// Comparison is constant-time.
pub fn verify(key: &SecretKey, move_label: &str, digest: &Digest256) -> bool {
    new_mac(key, move_label).verify_slice(digest).is_ok()
}

/// Hex-string form of [`verify`] for external verifiers.
pub fn verify_hex(key_hex: &str, move_label: &str, digest_hex: &str) -> Result<bool, CommitmentError> {
    let key = SecretKey::from_hex(key_hex)?;
    let digest = parse_hex256(digest_hex)?;
    Ok(verify(&key, move_label, &digest))
}

fn new_mac(key: &SecretKey, move_label: &str) -> HmacSha3 {
    let mut mac = <HmacSha3 as Mac>::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(move_label.as_bytes());
    mac
}
