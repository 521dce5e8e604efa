//! Digest Encoding
//!
//! 256-bit values (commitment digests and keys) travel between the engine
//! and a verifier as lowercase hex strings.

use thiserror::Error;

/// Hash output type (256 bits / 32 bytes)
pub type Digest256 = [u8; 32];

/// Failure to read a 256-bit value from hex.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// Input is not 64 hex characters long.
    #[error("expected 64 hex characters, got {0}")]
    WrongLength(usize),

    /// Input contains a non-hex character.
    #[error("invalid hex: {0}")]
    Malformed(#[from] hex::FromHexError),
}

/// Encode a 256-bit value as lowercase hex.
#[inline]
pub fn to_hex(value: &Digest256) -> String {
    hex::encode(value)
}

/// Decode a 256-bit value from hex, ignoring surrounding whitespace.
pub fn parse_hex256(input: &str) -> Result<Digest256, HexError> {
    let trimmed = input.trim();
    if trimmed.len() != 64 {
        return Err(HexError::WrongLength(trimmed.len()));
    }

    let mut out = [0u8; 32];
    hex::decode_to_slice(trimmed, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_fixed_width() {
        let mut value = [0u8; 32];
        value[0] = 0xAB;
        value[31] = 0x01;

        let encoded = to_hex(&value);
        assert_eq!(encoded.len(), 64);
        assert!(encoded.starts_with("ab"));
        assert!(encoded.ends_with("01"));
    }

    #[test]
    fn test_parse_accepts_uppercase_and_padding() {
        let text = format!("  {}\n", "FF".repeat(32));
        assert_eq!(parse_hex256(&text).unwrap(), [0xFF; 32]);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(parse_hex256("abcd"), Err(HexError::WrongLength(4)));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let text = "zz".repeat(32);
        assert!(matches!(parse_hex256(&text), Err(HexError::Malformed(_))));
    }
}
