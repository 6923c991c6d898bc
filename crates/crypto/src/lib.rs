//! Cryptographic primitives for neoforge: hashing, ECDSA over the two
//! supported curves, and Base58Check text encoding.

mod base58;
mod ecdsa;
mod error;
pub mod hash;

pub use base58::{base58check_decode, base58check_encode};
pub use ecdsa::{
    derive_public_key, generate_private_key, sign, validate_private_key, verify, Curve,
    PRIVATE_KEY_SIZE, PUBLIC_KEY_COMPRESSED_SIZE, SIGNATURE_SIZE,
};
pub use error::{CryptoError, CryptoResult};
