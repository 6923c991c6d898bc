//! Witness assembly: invocation/verification script pairs.

use serde::{Deserialize, Serialize};

use neoforge_io::{helper, BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::script::ScriptBuilder;
use crate::uint160::UInt160;
use crate::wallet::verification;

/// Longest invocation or verification script accepted when decoding.
const MAX_WITNESS_SCRIPT: usize = 0x10000;

/// Proof-of-authorization pair attached to a transaction.
///
/// The invocation script supplies signatures; the verification script
/// defines the spending rule they must satisfy. The witness's identity is
/// `hash160(verification_script)`, which must match a declared signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub invocation_script: Vec<u8>,
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Witness {
            invocation_script,
            verification_script,
        }
    }

    /// The signer identity this witness authorizes.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script)
    }

    /// Builds a single-signature witness from one signature and its key.
    pub fn from_signature(signature: &[u8], public_key: &[u8]) -> CoreResult<Self> {
        let mut invocation = ScriptBuilder::new();
        invocation.emit_push(signature);
        Ok(Witness {
            invocation_script: invocation.into_bytes(),
            verification_script: verification::single_sig_script(public_key)?,
        })
    }

    /// Builds a threshold multi-sig witness.
    ///
    /// The verification script owns the canonical key order; signatures are
    /// matched to its keys and pushed in that same relative order, truncated
    /// at the threshold. Signatures for keys not in the script are ignored.
    /// Fails with `InsufficientSignatures` when fewer than `m` of the
    /// script's keys have a matching signature.
    pub fn multi_sig(
        verification_script: Vec<u8>,
        signatures_by_key: &[(Vec<u8>, Vec<u8>)],
    ) -> CoreResult<Self> {
        let threshold = verification::signing_threshold(&verification_script)?;
        let keys = verification::public_keys(&verification_script)?;

        let mut invocation = ScriptBuilder::new();
        let mut matched = 0usize;
        for key in &keys {
            if matched == threshold {
                break;
            }
            if let Some((_, signature)) = signatures_by_key.iter().find(|(k, _)| k == key) {
                invocation.emit_push(signature);
                matched += 1;
            }
        }
        if matched < threshold {
            return Err(CoreError::InsufficientSignatures {
                required: threshold,
                supplied: matched,
            });
        }
        Ok(Witness {
            invocation_script: invocation.into_bytes(),
            verification_script,
        })
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(&self.invocation_script)
            + helper::get_var_bytes_size(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script);
        writer.write_var_bytes(&self.verification_script);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_WITNESS_SCRIPT)?;
        let verification_script = reader.read_var_bytes(MAX_WITNESS_SCRIPT)?;
        Ok(Witness {
            invocation_script,
            verification_script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::KeyPair;
    use neoforge_io::SerializableExt;

    fn test_keys(n: usize) -> Vec<KeyPair> {
        (0..n)
            .map(|i| {
                let mut private_key = [0x11u8; 32];
                private_key[31] = i as u8 + 1;
                KeyPair::new(private_key, Default::default()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_single_sig_witness_identity() {
        let key = &test_keys(1)[0];
        let signature = key.sign(&[0xAB; 32]).unwrap();
        let witness = Witness::from_signature(&signature, key.public_key()).unwrap();
        assert_eq!(witness.script_hash(), key.script_hash());
        // pushData(64-byte signature)
        assert_eq!(witness.invocation_script[0], 64);
        assert_eq!(witness.invocation_script.len(), 65);
    }

    #[test]
    fn test_multi_sig_two_of_three() {
        let keys = test_keys(3);
        let public_keys: Vec<Vec<u8>> =
            keys.iter().map(|k| k.public_key().to_vec()).collect();
        let script = verification::multi_sig_script(2, &public_keys).unwrap();
        let digest = [0xCD; 32];

        let supplied: Vec<(Vec<u8>, Vec<u8>)> = [&keys[2], &keys[0]]
            .iter()
            .map(|k| (k.public_key().to_vec(), k.sign(&digest).unwrap().to_vec()))
            .collect();
        let witness = Witness::multi_sig(script.clone(), &supplied).unwrap();
        assert_eq!(witness.script_hash(), UInt160::from_script(&script));

        // Signatures appear in key order: keys[0] before keys[2].
        let sig0 = &supplied[1].1;
        let sig2 = &supplied[0].1;
        let pos0 = witness
            .invocation_script
            .windows(sig0.len())
            .position(|w| w == &sig0[..])
            .unwrap();
        let pos2 = witness
            .invocation_script
            .windows(sig2.len())
            .position(|w| w == &sig2[..])
            .unwrap();
        assert!(pos0 < pos2);
    }

    #[test]
    fn test_multi_sig_below_threshold_fails() {
        let keys = test_keys(3);
        let public_keys: Vec<Vec<u8>> =
            keys.iter().map(|k| k.public_key().to_vec()).collect();
        let script = verification::multi_sig_script(2, &public_keys).unwrap();
        let supplied = vec![(
            keys[1].public_key().to_vec(),
            keys[1].sign(&[0u8; 32]).unwrap().to_vec(),
        )];
        assert_eq!(
            Witness::multi_sig(script, &supplied),
            Err(CoreError::InsufficientSignatures {
                required: 2,
                supplied: 1
            })
        );
    }

    #[test]
    fn test_unknown_key_signature_ignored() {
        let keys = test_keys(4);
        let public_keys: Vec<Vec<u8>> =
            keys[..3].iter().map(|k| k.public_key().to_vec()).collect();
        let script = verification::multi_sig_script(2, &public_keys).unwrap();
        let digest = [0x77; 32];
        let supplied: Vec<(Vec<u8>, Vec<u8>)> = vec![
            // keys[3] is not part of the account.
            (
                keys[3].public_key().to_vec(),
                keys[3].sign(&digest).unwrap().to_vec(),
            ),
            (
                keys[0].public_key().to_vec(),
                keys[0].sign(&digest).unwrap().to_vec(),
            ),
        ];
        assert!(matches!(
            Witness::multi_sig(script, &supplied),
            Err(CoreError::InsufficientSignatures { supplied: 1, .. })
        ));
    }

    #[test]
    fn test_serializable_roundtrip() {
        let witness = Witness::new(vec![0x40; 65], vec![0x21; 40]);
        let bytes = witness.to_array().unwrap();
        assert_eq!(bytes.len(), witness.size());
        assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
    }
}
