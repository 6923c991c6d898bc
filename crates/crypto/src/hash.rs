//! Hash functions used throughout the wire and signing layers.
//!
//! All functions are pure and deterministic over byte strings.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes `RIPEMD160(SHA256(x))`, the 20-byte script-hash digest.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Computes `SHA256(SHA256(x))`, used for transaction ids and checksums.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First 4 bytes of `hash256`, the Base58Check checksum.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let digest = hash256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_sha256() {
        assert_eq!(
            sha256(b"hello world"),
            hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
        );
    }

    #[test]
    fn test_ripemd160() {
        assert_eq!(
            ripemd160(b"hello world"),
            hex!("98c615784ccb5fe5936fbc0cbe9dfdb408d92f0f")
        );
    }

    #[test]
    fn test_hash160_composition() {
        let data = b"composition";
        assert_eq!(hash160(data), ripemd160(&sha256(data)));
    }

    #[test]
    fn test_hash256_composition() {
        let data = b"composition";
        assert_eq!(hash256(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_checksum_prefix() {
        let data = b"checksum input";
        assert_eq!(checksum(data), hash256(data)[..4]);
    }
}
