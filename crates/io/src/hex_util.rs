//! Hex, byte-order and base64 text utilities.
//!
//! 20- and 32-byte identifiers are little-endian on the wire but rendered
//! big-endian in text, so byte reversal shows up at every API boundary.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::{IoError, IoResult};

/// Encodes bytes as lowercase hex.
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes a hex string, accepting an optional `0x` prefix.
///
/// Rejects odd-length input and non-hex characters.
pub fn decode_hex(input: &str) -> IoResult<Vec<u8>> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if stripped.len() % 2 != 0 {
        return Err(IoError::Format(format!(
            "odd-length hex string ({} chars)",
            stripped.len()
        )));
    }
    hex::decode(stripped).map_err(|e| IoError::Format(format!("invalid hex: {e}")))
}

/// Returns the input with byte order reversed.
pub fn reverse(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}

/// Reverses the byte order of a hex string.
///
/// Converts between wire (little-endian) and display (big-endian) forms of
/// fixed-width identifiers. Odd-length input is rejected.
pub fn reverse_hex(input: &str) -> IoResult<String> {
    let bytes = decode_hex(input)?;
    Ok(encode_hex(&reverse(&bytes)))
}

/// Re-encodes a hex string as standard base64.
pub fn hex_to_base64(input: &str) -> IoResult<String> {
    Ok(BASE64.encode(decode_hex(input)?))
}

/// Re-encodes a standard base64 string as hex.
pub fn base64_to_hex(input: &str) -> IoResult<String> {
    let bytes = BASE64
        .decode(input)
        .map_err(|e| IoError::Format(format!("invalid base64: {e}")))?;
    Ok(encode_hex(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_hex() {
        assert_eq!(
            reverse_hex("000102030405060708090a0b0c0d0e0f").unwrap(),
            "0f0e0d0c0b0a09080706050403020100"
        );
    }

    #[test]
    fn test_reverse_hex_rejects_odd_length() {
        assert!(matches!(reverse_hex("abc"), Err(IoError::Format(_))));
    }

    #[test]
    fn test_decode_hex_prefix_and_errors() {
        assert_eq!(decode_hex("0xff00").unwrap(), vec![0xFF, 0x00]);
        assert!(matches!(decode_hex("zz"), Err(IoError::Format(_))));
    }

    #[test]
    fn test_hex_base64_roundtrip() {
        assert_eq!(hex_to_base64("4e454f").unwrap(), "TkVP");
        assert_eq!(base64_to_hex("TkVP").unwrap(), "4e454f");
    }
}
