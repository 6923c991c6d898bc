//! Typed failures of the construction-and-signing pipeline.
//!
//! All variants are local, synchronous results surfaced to the caller;
//! nothing here is retried or swallowed. Variants carry the structured
//! payload a caller needs to react (e.g. the suggested corrected fee).

use thiserror::Error;

use crate::fixed8::Fixed8;
use crate::uint160::UInt160;
use crate::uint256::UInt256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed or truncated bytes, non-hex input.
    #[error(transparent)]
    Io(#[from] neoforge_io::IoError),

    #[error(transparent)]
    Crypto(#[from] neoforge_crypto::CryptoError),

    /// Structurally invalid data outside the codec layer.
    #[error("format error: {0}")]
    Format(String),

    /// Input selection cannot cover the required amount.
    #[error("insufficient funds for asset {asset}: required {required}, available {available}")]
    InsufficientFunds {
        asset: UInt256,
        required: Fixed8,
        available: Fixed8,
    },

    /// An intent names an asset with no balance group.
    #[error("unknown asset {0}")]
    UnknownAsset(UInt256),

    /// Multi-sig threshold unmet.
    #[error("insufficient signatures: threshold {required}, supplied {supplied}")]
    InsufficientSignatures { required: usize, supplied: usize },

    /// Witness script hash not among declared signers, a duplicate witness,
    /// or a signer left without a witness.
    #[error("signer mismatch for {script_hash}: {detail}")]
    SignerMismatch {
        script_hash: UInt160,
        detail: String,
    },

    /// Signature verification failed.
    #[error("invalid signature")]
    InvalidSignature,

    /// Assigned fee below the computed minimum.
    #[error("fee too low: assigned {assigned}, required {required}")]
    FeeTooLow { assigned: Fixed8, required: Fixed8 },

    /// `validUntilBlock` outside `(currentHeight, currentHeight + MAX_LIFESPAN)`.
    #[error("validUntilBlock {valid_until_block} out of range at height {current_height}; suggested {suggestion}")]
    ExpiredValidUntilBlock {
        valid_until_block: u32,
        current_height: u32,
        suggestion: u32,
    },

    /// Builder invariant violated.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Arithmetic overflow on a fixed-point amount.
    #[error("fixed-point overflow in {0}")]
    Overflow(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;
