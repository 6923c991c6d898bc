//! The transaction entity and its wire codec.

use serde::{Deserialize, Serialize};

use neoforge_io::{helper, BinaryWriter, IoResult, MemoryReader, Serializable, SerializableExt};

use neoforge_crypto::hash::hash256;

use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;
use crate::uint256::UInt256;

use super::attribute::{TransactionAttribute, MAX_TRANSACTION_ATTRIBUTES};
use super::input::TransactionInput;
use super::output::TransactionOutput;
use super::signer::Signer;
use super::witness::Witness;

/// Longest invocation payload accepted when decoding.
const MAX_SCRIPT_LENGTH: usize = 0x10000;

/// Most entries accepted for any decoded collection.
const MAX_COLLECTION: usize = 0x10000;

/// An immutable transaction, materialized by
/// [`TransactionBuilder::build`](super::TransactionBuilder::build).
///
/// Wire order: `version | attributes | signers | systemFee | networkFee |
/// validUntilBlock | script | inputs | outputs | witnesses`. Empty
/// collections always serialize as a `0x00` count so the encoding of a
/// transaction is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub(crate) version: u8,
    pub(crate) attributes: Vec<TransactionAttribute>,
    pub(crate) signers: Vec<Signer>,
    pub(crate) system_fee: Fixed8,
    pub(crate) network_fee: Fixed8,
    pub(crate) valid_until_block: u32,
    pub(crate) script: Vec<u8>,
    pub(crate) inputs: Vec<TransactionInput>,
    pub(crate) outputs: Vec<TransactionOutput>,
    pub(crate) witnesses: Vec<Witness>,
}

impl Transaction {
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn attributes(&self) -> &[TransactionAttribute] {
        &self.attributes
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn system_fee(&self) -> Fixed8 {
        self.system_fee
    }

    pub fn network_fee(&self) -> Fixed8 {
        self.network_fee
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    /// Serializes everything up to (excluding) the witnesses.
    pub fn serialize_unsigned(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.write_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    fn write_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        helper::serialize_array(&self.attributes, writer)?;
        helper::serialize_array(&self.signers, writer)?;
        writer.write_i64(self.system_fee.raw());
        writer.write_i64(self.network_fee.raw());
        writer.write_u32(self.valid_until_block);
        writer.write_var_bytes(&self.script);
        helper::serialize_array(&self.inputs, writer)?;
        helper::serialize_array(&self.outputs, writer)?;
        Ok(())
    }

    /// Transaction id: `hash256` of the unsigned body, rendered reversed.
    pub fn hash(&self) -> CoreResult<UInt256> {
        let unsigned = self.serialize_unsigned()?;
        Ok(UInt256::from_bytes(hash256(&unsigned)))
    }

    /// The digest actually signed: `hash256(unsigned || networkMagic)`.
    ///
    /// Folding the magic in pins a signature to one network, so it cannot
    /// be replayed on another.
    pub fn signing_digest(&self, magic: u32) -> CoreResult<[u8; 32]> {
        let mut payload = self.serialize_unsigned()?;
        payload.extend_from_slice(&magic.to_le_bytes());
        Ok(hash256(&payload))
    }

    /// Appends a witness, keyed by its verification-script hash.
    ///
    /// Fails with `SignerMismatch` when the hash matches no declared signer
    /// or that signer already has a witness. Witnesses are kept aligned with
    /// signer order regardless of attachment order.
    pub fn attach_witness(&mut self, witness: Witness) -> CoreResult<()> {
        let hash = witness.script_hash();
        if !self.signers.iter().any(|s| s.account == hash) {
            return Err(CoreError::SignerMismatch {
                script_hash: hash,
                detail: "no declared signer with this script hash".to_string(),
            });
        }
        if self.witnesses.iter().any(|w| w.script_hash() == hash) {
            return Err(CoreError::SignerMismatch {
                script_hash: hash,
                detail: "signer already has a witness".to_string(),
            });
        }
        self.witnesses.push(witness);

        let signers = &self.signers;
        let mut witnesses = std::mem::take(&mut self.witnesses);
        witnesses.sort_by_key(|w| {
            let hash = w.script_hash();
            signers.iter().position(|s| s.account == hash)
        });
        self.witnesses = witnesses;
        Ok(())
    }

    /// Whether every signer has a witness.
    pub fn is_fully_signed(&self) -> bool {
        self.witnesses.len() == self.signers.len()
    }

    /// Hex form of the full signed wire encoding.
    pub fn to_hex(&self) -> CoreResult<String> {
        Ok(hex::encode(self.to_array()?))
    }

    pub fn from_hex(s: &str) -> CoreResult<Self> {
        let bytes = neoforge_io::decode_hex(s)?;
        Ok(Transaction::from_array(&bytes)?)
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        1 + helper::get_array_size(&self.attributes)
            + helper::get_array_size(&self.signers)
            + 8
            + 8
            + 4
            + helper::get_var_bytes_size(&self.script)
            + helper::get_array_size(&self.inputs)
            + helper::get_array_size(&self.outputs)
            + helper::get_array_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.write_unsigned(writer)?;
        helper::serialize_array(&self.witnesses, writer)?;
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let version = reader.read_u8()?;
        let attributes: Vec<TransactionAttribute> =
            helper::deserialize_array(reader, MAX_TRANSACTION_ATTRIBUTES)?;
        let signers: Vec<Signer> = helper::deserialize_array(reader, MAX_COLLECTION)?;
        let system_fee = Fixed8::from_raw(reader.read_i64()?);
        let network_fee = Fixed8::from_raw(reader.read_i64()?);
        let valid_until_block = reader.read_u32()?;
        let script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        let inputs: Vec<TransactionInput> = helper::deserialize_array(reader, MAX_COLLECTION)?;
        let outputs: Vec<TransactionOutput> = helper::deserialize_array(reader, MAX_COLLECTION)?;
        let witnesses: Vec<Witness> = helper::deserialize_array(reader, MAX_COLLECTION)?;
        Ok(Transaction {
            version,
            attributes,
            signers,
            system_fee,
            network_fee,
            valid_until_block,
            script,
            inputs,
            outputs,
            witnesses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::TransactionBuilder;
    use super::*;
    use crate::uint160::UInt160;

    fn sample_transaction() -> Transaction {
        TransactionBuilder::new()
            .script(vec![0x00, 0xC1])
            .signer(Signer::called_by_entry(UInt160::from_script(b"sender")))
            .system_fee(Fixed8::from_raw(100_000_000))
            .network_fee(Fixed8::from_raw(1_230_000))
            .valid_until_block(5_000)
            .build()
            .unwrap()
    }

    #[test]
    fn test_wire_roundtrip() {
        let tx = sample_transaction();
        let bytes = tx.to_array().unwrap();
        assert_eq!(bytes.len(), tx.size());
        assert_eq!(Transaction::from_array(&bytes).unwrap(), tx);
    }

    #[test]
    fn test_empty_collections_emit_zero_count() {
        let tx = sample_transaction();
        let bytes = tx.to_array().unwrap();
        // version, attr count 0, signer count 1, 21-byte signer, fees,
        // vub, script, input count 0, output count 0, witness count 0.
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 0x00);
        assert_eq!(bytes[2], 0x01);
        let after_script = 1 + 1 + 1 + 21 + 8 + 8 + 4 + 1 + tx.script().len();
        assert_eq!(&bytes[after_script..], [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_unsigned_serialization_is_witness_free() {
        let mut tx = sample_transaction();
        let before = tx.serialize_unsigned().unwrap();
        tx.witnesses.push(Witness::new(vec![0x01], vec![0x02]));
        assert_eq!(tx.serialize_unsigned().unwrap(), before);
    }

    #[test]
    fn test_hash_renders_reversed() {
        let tx = sample_transaction();
        let unsigned = tx.serialize_unsigned().unwrap();
        let digest = hash256(&unsigned);
        let mut reversed = digest;
        reversed.reverse();
        assert_eq!(tx.hash().unwrap().to_hex(), hex::encode(reversed));
    }

    #[test]
    fn test_signing_digest_depends_on_magic() {
        let tx = sample_transaction();
        assert_ne!(
            tx.signing_digest(860_833_102).unwrap(),
            tx.signing_digest(894_710_606).unwrap()
        );
    }

    #[test]
    fn test_attach_witness_rejects_stranger_and_duplicate() {
        let mut tx = sample_transaction();
        let stranger = Witness::new(vec![0x40], vec![0xAB, 0xCD]);
        assert!(matches!(
            tx.attach_witness(stranger),
            Err(CoreError::SignerMismatch { .. })
        ));

        // A witness whose verification script hashes to the signer.
        let verification = b"sender".to_vec();
        let witness = Witness::new(vec![0x40], verification.clone());
        tx.attach_witness(witness.clone()).unwrap();
        assert!(tx.is_fully_signed());
        assert!(matches!(
            tx.attach_witness(witness),
            Err(CoreError::SignerMismatch { .. })
        ));
    }
}
