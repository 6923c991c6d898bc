//! Interop service name hashing.
//!
//! A syscall operand is the first four bytes of the SHA-256 digest of the
//! service's ASCII name.

use neoforge_crypto::hash::sha256;

/// Interop services the builder and witness layer invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropService {
    /// Dynamic contract invocation.
    SystemContractCall,
    /// Single-signature witness check.
    NeoCryptoCheckSig,
    /// Threshold multi-signature witness check.
    NeoCryptoCheckMultisig,
}

impl InteropService {
    pub const fn name(self) -> &'static str {
        match self {
            InteropService::SystemContractCall => "System.Contract.Call",
            InteropService::NeoCryptoCheckSig => "Neo.Crypto.CheckSig",
            InteropService::NeoCryptoCheckMultisig => "Neo.Crypto.CheckMultisig",
        }
    }

    /// The 4-byte syscall code for this service.
    pub fn code(self) -> [u8; 4] {
        hash_service_name(self.name())
    }
}

/// First four bytes of `sha256(name)`.
pub fn hash_service_name(name: &str) -> [u8; 4] {
    let digest = sha256(name.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_contract_call_code() {
        // Pinned by the contract-invocation golden vector.
        assert_eq!(InteropService::SystemContractCall.code(), hex!("627d5b52"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            InteropService::SystemContractCall.code(),
            InteropService::NeoCryptoCheckSig.code(),
            InteropService::NeoCryptoCheckMultisig.code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
