//! Base58Check encoding, the text form of keys and addresses.

use crate::hash::checksum;
use crate::{CryptoError, CryptoResult};

/// Encodes `data || checksum(data)` in base58.
pub fn base58check_encode(data: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(data.len() + 4);
    buffer.extend_from_slice(data);
    buffer.extend_from_slice(&checksum(data));
    bs58::encode(buffer).into_string()
}

/// Decodes a base58check string, verifying and stripping the checksum.
pub fn base58check_decode(input: &str) -> CryptoResult<Vec<u8>> {
    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| CryptoError::InvalidEncoding(format!("invalid base58: {e}")))?;
    if bytes.len() < 5 {
        return Err(CryptoError::InvalidEncoding(
            "base58check payload too short".to_string(),
        ));
    }
    let (payload, check) = bytes.split_at(bytes.len() - 4);
    if checksum(payload) != check {
        return Err(CryptoError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
