//! Umbrella crate re-exporting the neoforge SDK.
//!
//! - [`io`]: wire codec primitives (little-endian integers, varints, hex).
//! - [`crypto`]: hashing, ECDSA over secp256r1/secp256k1, Base58Check.
//! - [`core`]: the transaction construction-and-signing engine.
//! - [`rpc`]: the JSON-RPC collaborator client.
//!
//! ```no_run
//! use neoforge::core::{sign_transaction, NetworkConfig, Signer, TransactionBuilder};
//! use neoforge::core::script::token::FungibleToken;
//! use neoforge::core::{Fixed8, KeyPair, UInt160};
//! use neoforge_crypto::Curve;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NetworkConfig::testnet();
//! let key = KeyPair::generate(Curve::Secp256r1)?;
//! let token = FungibleToken::new(
//!     UInt160::from_hex("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9")?,
//! );
//! let to = UInt160::from_hex("1df91d6b7085db7c5aaf09f19eeec1ca3c0db2c6")?;
//!
//! let mut tx = TransactionBuilder::new()
//!     .script(token.transfer_script(key.script_hash(), to, Fixed8::from_units(10)?))
//!     .signer(Signer::called_by_entry(key.script_hash()))
//!     .valid_until_block(1_000_000)
//!     .build()?;
//! sign_transaction(&mut tx, &key, &config)?;
//! let raw = tx.to_hex()?;
//! # let _ = raw;
//! # Ok(())
//! # }
//! ```

pub use neoforge_core as core;
pub use neoforge_crypto as crypto;
pub use neoforge_io as io;
pub use neoforge_rpc as rpc;
