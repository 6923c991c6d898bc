//! ECDSA signing and verification over the two supported curves.
//!
//! secp256r1 (P-256) is the ledger's native curve; secp256k1 is supported as
//! the alternate. Signatures are fixed-width 64-byte `r || s` values,
//! produced with RFC 6979 deterministic nonces and normalized to low-S so
//! identical inputs always yield identical bytes.

use k256::ecdsa::{
    Signature as K256Signature, SigningKey as K256SigningKey, VerifyingKey as K256VerifyingKey,
};
use p256::ecdsa::{
    Signature as P256Signature, SigningKey as P256SigningKey, VerifyingKey as P256VerifyingKey,
};
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use rand::rngs::OsRng;

use crate::{CryptoError, CryptoResult};

/// Private key scalar width in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Compressed SEC1 public key width in bytes.
pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;
/// Fixed `r || s` signature width in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// The named elliptic curve a key lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// secp256r1 (P-256), the default curve.
    Secp256r1,
    /// secp256k1, the alternate curve.
    Secp256k1,
}

impl Default for Curve {
    fn default() -> Self {
        Curve::Secp256r1
    }
}

/// Signs a 32-byte digest, returning the 64-byte `r || s` signature.
pub fn sign(digest: &[u8], private_key: &[u8], curve: Curve) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
    match curve {
        Curve::Secp256r1 => {
            let key = P256SigningKey::from_slice(private_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256r1 private key: {e}")))?;
            let signature: P256Signature = key
                .sign_prehash(digest)
                .map_err(|e| CryptoError::InvalidSignature(format!("signing failed: {e}")))?;
            let signature = signature.normalize_s().unwrap_or(signature);
            Ok(signature.to_bytes().into())
        }
        Curve::Secp256k1 => {
            let key = K256SigningKey::from_slice(private_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256k1 private key: {e}")))?;
            let signature: K256Signature = key
                .sign_prehash(digest)
                .map_err(|e| CryptoError::InvalidSignature(format!("signing failed: {e}")))?;
            let signature = signature.normalize_s().unwrap_or(signature);
            Ok(signature.to_bytes().into())
        }
    }
}

/// Verifies a 64-byte `r || s` signature over a 32-byte digest.
///
/// Returns `Ok(false)` for a well-formed signature that does not verify;
/// malformed keys or signatures are errors.
pub fn verify(
    digest: &[u8],
    signature: &[u8],
    public_key: &[u8],
    curve: Curve,
) -> CryptoResult<bool> {
    match curve {
        Curve::Secp256r1 => {
            let key = P256VerifyingKey::from_sec1_bytes(public_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256r1 public key: {e}")))?;
            let signature = P256Signature::from_slice(signature)
                .map_err(|e| CryptoError::InvalidSignature(format!("{e}")))?;
            Ok(key.verify_prehash(digest, &signature).is_ok())
        }
        Curve::Secp256k1 => {
            let key = K256VerifyingKey::from_sec1_bytes(public_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256k1 public key: {e}")))?;
            let signature = K256Signature::from_slice(signature)
                .map_err(|e| CryptoError::InvalidSignature(format!("{e}")))?;
            Ok(key.verify_prehash(digest, &signature).is_ok())
        }
    }
}

/// Derives the SEC1-encoded public key for a private key.
///
/// Compressed keys are 33 bytes (02/03 prefix), uncompressed 65 (04 prefix).
pub fn derive_public_key(
    private_key: &[u8],
    compressed: bool,
    curve: Curve,
) -> CryptoResult<Vec<u8>> {
    match curve {
        Curve::Secp256r1 => {
            let key = P256SigningKey::from_slice(private_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256r1 private key: {e}")))?;
            Ok(key
                .verifying_key()
                .to_encoded_point(compressed)
                .as_bytes()
                .to_vec())
        }
        Curve::Secp256k1 => {
            let key = K256SigningKey::from_slice(private_key)
                .map_err(|e| CryptoError::InvalidKey(format!("secp256k1 private key: {e}")))?;
            Ok(key
                .verifying_key()
                .to_encoded_point(compressed)
                .as_bytes()
                .to_vec())
        }
    }
}

/// Generates a fresh private key using the OS RNG.
pub fn generate_private_key(curve: Curve) -> [u8; PRIVATE_KEY_SIZE] {
    match curve {
        Curve::Secp256r1 => P256SigningKey::random(&mut OsRng).to_bytes().into(),
        Curve::Secp256k1 => K256SigningKey::random(&mut OsRng).to_bytes().into(),
    }
}

/// Checks whether the bytes form a valid non-zero scalar on the curve.
pub fn validate_private_key(private_key: &[u8], curve: Curve) -> bool {
    match curve {
        Curve::Secp256r1 => P256SigningKey::from_slice(private_key).is_ok(),
        Curve::Secp256k1 => K256SigningKey::from_slice(private_key).is_ok(),
    }
}
