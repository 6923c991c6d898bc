//! Accounts: script hashes with optional spending conditions.

use neoforge_crypto::{base58check_decode, base58check_encode};

use crate::error::{CoreError, CoreResult};
use crate::tx::Signer;
use crate::uint160::UInt160;

use super::verification;

/// An on-chain identity. Watch-only accounts carry just the script hash;
/// signing accounts also know their verification script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    script_hash: UInt160,
    verification_script: Option<Vec<u8>>,
}

impl Account {
    /// A single-sig account for one compressed public key.
    pub fn from_public_key(public_key: &[u8]) -> CoreResult<Self> {
        let script = verification::single_sig_script(public_key)?;
        Ok(Account {
            script_hash: UInt160::from_script(&script),
            verification_script: Some(script),
        })
    }

    /// An `m`-of-`n` multi-sig account. Key order is identity-bearing.
    pub fn multi_sig(threshold: usize, public_keys: &[Vec<u8>]) -> CoreResult<Self> {
        let script = verification::multi_sig_script(threshold, public_keys)?;
        Ok(Account {
            script_hash: UInt160::from_script(&script),
            verification_script: Some(script),
        })
    }

    /// A watch-only account with no known spending condition.
    pub fn watch_only(script_hash: UInt160) -> Self {
        Account {
            script_hash,
            verification_script: None,
        }
    }

    /// Resolves an address back to a watch-only account.
    pub fn from_address(address: &str, address_version: u8) -> CoreResult<Self> {
        let payload = base58check_decode(address)?;
        if payload.len() != 21 || payload[0] != address_version {
            return Err(CoreError::Format(format!(
                "malformed address: {address:?}"
            )));
        }
        Ok(Account::watch_only(UInt160::from_slice(&payload[1..])?))
    }

    /// `Base58Check(versionByte || scriptHash)`.
    pub fn address(&self, address_version: u8) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(address_version);
        payload.extend_from_slice(self.script_hash.as_bytes());
        base58check_encode(&payload)
    }

    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn verification_script(&self) -> Option<&[u8]> {
        self.verification_script.as_deref()
    }

    /// Whether this account signs with a threshold multi-sig condition.
    pub fn is_multi_sig(&self) -> bool {
        self.verification_script
            .as_deref()
            .is_some_and(verification::is_multi_sig)
    }

    /// A signer entry for this account with entry-scope authorization.
    pub fn signer(&self) -> Signer {
        Signer::called_by_entry(self.script_hash)
    }
}
