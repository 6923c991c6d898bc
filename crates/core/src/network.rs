//! Immutable per-network parameters.
//!
//! A [`NetworkConfig`] is constructed once and threaded explicitly through
//! signing and validation; nothing in this crate consults ambient state.

use serde::{Deserialize, Serialize};

use neoforge_crypto::Curve;

use crate::fixed8::Fixed8;
use crate::uint256::UInt256;

/// Widest allowed gap between a transaction's `validUntilBlock` and the
/// current height, in blocks.
pub const MAX_VALID_UNTIL_BLOCK_INCREMENT: u32 = 2_102_400;

/// Default address version byte.
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

/// Raw fee units charged per serialized byte.
pub const DEFAULT_FEE_PER_BYTE: i64 = 1_000;

/// Governance asset id, wire (little-endian) order.
pub const GOVERNANCE_ASSET_ID: UInt256 = UInt256::from_bytes([
    0x9b, 0x7c, 0xff, 0xda, 0xa6, 0x74, 0xbe, 0xae, 0x0f, 0x93, 0x0e, 0xbe, 0x60, 0x85, 0xaf,
    0x90, 0x93, 0xe5, 0xfe, 0x56, 0xb3, 0x4a, 0x5c, 0x22, 0x0c, 0xcd, 0xcf, 0x6e, 0xfc, 0x33,
    0x6f, 0xc5,
]);

/// Utility (fee) asset id, wire (little-endian) order.
pub const FEE_ASSET_ID: UInt256 = UInt256::from_bytes([
    0xe7, 0x2d, 0x28, 0x69, 0x79, 0xee, 0x6c, 0xb1, 0xb7, 0xe6, 0x5d, 0xfd, 0xdf, 0xb2, 0xe3,
    0x84, 0x10, 0x0b, 0x8d, 0x14, 0x8e, 0x77, 0x58, 0xde, 0x42, 0xe4, 0x16, 0x8b, 0x71, 0x79,
    0x2c, 0x60,
]);

/// Static parameters of one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network magic, mixed into every signing digest.
    pub magic: u32,
    /// Version byte prefixed to script hashes when forming addresses.
    pub address_version: u8,
    /// Curve used for keys and signatures on this network.
    #[serde(skip, default)]
    pub curve: Curve,
    /// Maximum `validUntilBlock - currentHeight` gap accepted.
    pub max_valid_until_block_increment: u32,
    /// Raw fee units per serialized transaction byte.
    pub fee_per_byte: i64,
    /// Asset fees are denominated in.
    pub fee_asset: UInt256,
    /// Indivisible governance asset.
    pub governance_asset: UInt256,
}

impl NetworkConfig {
    pub fn mainnet() -> Self {
        NetworkConfig {
            magic: 860_833_102,
            ..Self::privnet(860_833_102)
        }
    }

    pub fn testnet() -> Self {
        NetworkConfig {
            magic: 894_710_606,
            ..Self::privnet(894_710_606)
        }
    }

    /// A private network with default parameters and the given magic.
    pub fn privnet(magic: u32) -> Self {
        NetworkConfig {
            magic,
            address_version: DEFAULT_ADDRESS_VERSION,
            curve: Curve::Secp256r1,
            max_valid_until_block_increment: MAX_VALID_UNTIL_BLOCK_INCREMENT,
            fee_per_byte: DEFAULT_FEE_PER_BYTE,
            fee_asset: FEE_ASSET_ID,
            governance_asset: GOVERNANCE_ASSET_ID,
        }
    }
}
