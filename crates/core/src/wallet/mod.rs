//! Keys, accounts and transaction signing.

mod account;
mod key_pair;
pub mod verification;

pub use account::Account;
pub use key_pair::KeyPair;

use crate::error::CoreResult;
use crate::network::NetworkConfig;
use crate::tx::{Transaction, Witness};

/// Signs the transaction's network-bound digest with one key and attaches
/// the resulting single-sig witness.
pub fn sign_transaction(
    tx: &mut Transaction,
    key: &KeyPair,
    config: &NetworkConfig,
) -> CoreResult<()> {
    let digest = tx.signing_digest(config.magic)?;
    let signature = key.sign(&digest)?;
    let witness = Witness::from_signature(&signature, key.public_key())?;
    tracing::debug!(signer = %key.script_hash(), magic = config.magic, "attaching witness");
    tx.attach_witness(witness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{Signer, TransactionBuilder};
    use neoforge_crypto::Curve;

    #[test]
    fn test_sign_transaction_attaches_verifiable_witness() {
        let key = KeyPair::from_hex(
            "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344",
            Curve::Secp256r1,
        )
        .unwrap();
        let config = NetworkConfig::testnet();
        let mut tx = TransactionBuilder::new()
            .script(vec![0x00, 0xC1])
            .signer(Signer::called_by_entry(key.script_hash()))
            .valid_until_block(100)
            .build()
            .unwrap();

        sign_transaction(&mut tx, &key, &config).unwrap();
        assert!(tx.is_fully_signed());

        let witness = &tx.witnesses()[0];
        assert_eq!(witness.script_hash(), key.script_hash());

        // The pushed signature verifies against the network-bound digest.
        let digest = tx.signing_digest(config.magic).unwrap();
        let signature = &witness.invocation_script[1..65];
        assert!(key.verify(&digest, signature).unwrap());

        // A different magic must not verify.
        let foreign = tx.signing_digest(config.magic + 1).unwrap();
        assert!(!key.verify(&foreign, signature).unwrap());
    }
}
