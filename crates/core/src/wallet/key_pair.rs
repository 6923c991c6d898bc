//! Private/public key pairs and their text encodings.

use std::fmt;

use neoforge_crypto::{
    base58check_decode, base58check_encode, derive_public_key, generate_private_key, sign,
    verify, Curve, PRIVATE_KEY_SIZE, SIGNATURE_SIZE,
};

use crate::error::{CoreError, CoreResult};
use crate::uint160::UInt160;

use super::verification;

/// Version byte prefixing a WIF-encoded private key.
const WIF_VERSION: u8 = 0x80;
/// Trailing flag marking the key as belonging to a compressed public key.
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// A private key with its derived compressed public key and script hash.
#[derive(Clone)]
pub struct KeyPair {
    private_key: [u8; PRIVATE_KEY_SIZE],
    public_key: Vec<u8>,
    script_hash: UInt160,
    curve: Curve,
}

impl KeyPair {
    /// Wraps a raw private key, deriving the public half.
    pub fn new(private_key: [u8; PRIVATE_KEY_SIZE], curve: Curve) -> CoreResult<Self> {
        let public_key = derive_public_key(&private_key, true, curve)?;
        let script_hash = UInt160::from_script(&verification::single_sig_script(&public_key)?);
        Ok(KeyPair {
            private_key,
            public_key,
            script_hash,
            curve,
        })
    }

    pub fn generate(curve: Curve) -> CoreResult<Self> {
        KeyPair::new(generate_private_key(curve), curve)
    }

    pub fn from_hex(s: &str, curve: Curve) -> CoreResult<Self> {
        let bytes = neoforge_io::decode_hex(s)?;
        let private_key: [u8; PRIVATE_KEY_SIZE] = bytes.as_slice().try_into().map_err(|_| {
            CoreError::Format(format!("expected 32-byte private key, got {}", bytes.len()))
        })?;
        KeyPair::new(private_key, curve)
    }

    /// Parses a WIF string: `Base58Check(0x80 || key || optional 0x01)`.
    pub fn from_wif(wif: &str, curve: Curve) -> CoreResult<Self> {
        let payload = base58check_decode(wif)?;
        let valid_version = payload.first() == Some(&WIF_VERSION);
        let valid_length = match payload.len() {
            l if l == 1 + PRIVATE_KEY_SIZE => true,
            l if l == 2 + PRIVATE_KEY_SIZE => {
                payload[1 + PRIVATE_KEY_SIZE] == WIF_COMPRESSED_FLAG
            }
            _ => false,
        };
        if !valid_version || !valid_length {
            return Err(CoreError::Format("malformed WIF payload".to_string()));
        }
        let mut private_key = [0u8; PRIVATE_KEY_SIZE];
        private_key.copy_from_slice(&payload[1..1 + PRIVATE_KEY_SIZE]);
        KeyPair::new(private_key, curve)
    }

    /// Exports the key as compressed-flag WIF.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(2 + PRIVATE_KEY_SIZE);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.private_key);
        payload.push(WIF_COMPRESSED_FLAG);
        base58check_encode(&payload)
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    /// Compressed SEC1 public key, 33 bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Hash of this key's single-sig verification script.
    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn sign(&self, digest: &[u8]) -> CoreResult<[u8; SIGNATURE_SIZE]> {
        Ok(sign(digest, &self.private_key, self.curve)?)
    }

    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> CoreResult<bool> {
        Ok(verify(digest, signature, &self.public_key, self.curve)?)
    }

    /// The single-sig verification script for this key.
    pub fn verification_script(&self) -> CoreResult<Vec<u8>> {
        verification::single_sig_script(&self.public_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(&self.public_key))
            .field("script_hash", &self.script_hash)
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY_HEX: &str =
        "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344";

    #[test]
    fn test_from_hex_derives_compressed_key() {
        let pair = KeyPair::from_hex(PRIVATE_KEY_HEX, Curve::Secp256r1).unwrap();
        assert_eq!(
            hex::encode(pair.public_key()),
            "02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef"
        );
    }

    #[test]
    fn test_wif_roundtrip() {
        let pair = KeyPair::from_hex(PRIVATE_KEY_HEX, Curve::Secp256r1).unwrap();
        let wif = pair.to_wif();
        let restored = KeyPair::from_wif(&wif, Curve::Secp256r1).unwrap();
        assert_eq!(restored.private_key(), pair.private_key());
        assert_eq!(restored.script_hash(), pair.script_hash());
    }

    #[test]
    fn test_wif_rejects_wrong_version() {
        let mut payload = vec![0x17];
        payload.extend_from_slice(&[0x42; 32]);
        payload.push(0x01);
        let bogus = base58check_encode(&payload);
        assert!(KeyPair::from_wif(&bogus, Curve::Secp256r1).is_err());
    }

    #[test]
    fn test_sign_verify() {
        let pair = KeyPair::from_hex(PRIVATE_KEY_HEX, Curve::Secp256r1).unwrap();
        let digest = neoforge_crypto::hash::hash256(b"message");
        let signature = pair.sign(&digest).unwrap();
        assert!(pair.verify(&digest, &signature).unwrap());
        assert!(!pair.verify(&[0u8; 32], &signature).unwrap());
    }

    #[test]
    fn test_debug_hides_private_key() {
        let pair = KeyPair::from_hex(PRIVATE_KEY_HEX, Curve::Secp256r1).unwrap();
        let rendered = format!("{pair:?}");
        assert!(!rendered.contains(PRIVATE_KEY_HEX));
    }
}
