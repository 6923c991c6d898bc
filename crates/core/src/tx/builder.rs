//! Staged construction of an immutable [`Transaction`].

use crate::error::{CoreError, CoreResult};
use crate::fixed8::Fixed8;

use super::attribute::{TransactionAttribute, MAX_TRANSACTION_ATTRIBUTES};
use super::input::TransactionInput;
use super::output::TransactionOutput;
use super::signer::Signer;
use super::transaction::Transaction;

/// Collects transaction fields through consuming chained setters;
/// [`build`](TransactionBuilder::build) is the only point a [`Transaction`]
/// is materialized, and it enforces the structural invariants.
#[derive(Debug, Default, Clone)]
pub struct TransactionBuilder {
    version: u8,
    attributes: Vec<TransactionAttribute>,
    signers: Vec<Signer>,
    system_fee: Fixed8,
    network_fee: Fixed8,
    valid_until_block: u32,
    script: Vec<u8>,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn attribute(mut self, attribute: TransactionAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn signer(mut self, signer: Signer) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn signers(mut self, signers: impl IntoIterator<Item = Signer>) -> Self {
        self.signers.extend(signers);
        self
    }

    pub fn system_fee(mut self, fee: Fixed8) -> Self {
        self.system_fee = fee;
        self
    }

    pub fn network_fee(mut self, fee: Fixed8) -> Self {
        self.network_fee = fee;
        self
    }

    pub fn valid_until_block(mut self, height: u32) -> Self {
        self.valid_until_block = height;
        self
    }

    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.script = script;
        self
    }

    pub fn input(mut self, input: TransactionInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn inputs(mut self, inputs: impl IntoIterator<Item = TransactionInput>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    pub fn output(mut self, output: TransactionOutput) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn outputs(mut self, outputs: impl IntoIterator<Item = TransactionOutput>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// Materializes the transaction, checking structural invariants:
    /// at least one signer with unique script hashes, non-negative fees,
    /// a script unless the transaction is a pure legacy transfer, and the
    /// attribute count cap.
    pub fn build(self) -> CoreResult<Transaction> {
        if self.signers.is_empty() {
            return Err(CoreError::InvalidTransaction(
                "at least one signer is required".to_string(),
            ));
        }
        for (i, signer) in self.signers.iter().enumerate() {
            if self.signers[..i].iter().any(|s| s.account == signer.account) {
                return Err(CoreError::InvalidTransaction(format!(
                    "duplicate signer {}",
                    signer.account
                )));
            }
        }
        if self.system_fee.is_negative() || self.network_fee.is_negative() {
            return Err(CoreError::InvalidTransaction(
                "fees must be non-negative".to_string(),
            ));
        }
        if self.script.is_empty() && self.outputs.is_empty() {
            return Err(CoreError::InvalidTransaction(
                "a script is required unless the transaction is a pure transfer".to_string(),
            ));
        }
        if self.attributes.len() > MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::InvalidTransaction(format!(
                "too many attributes: {} > {MAX_TRANSACTION_ATTRIBUTES}",
                self.attributes.len()
            )));
        }
        Ok(Transaction {
            version: self.version,
            attributes: self.attributes,
            signers: self.signers,
            system_fee: self.system_fee,
            network_fee: self.network_fee,
            valid_until_block: self.valid_until_block,
            script: self.script,
            inputs: self.inputs,
            outputs: self.outputs,
            witnesses: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uint160::UInt160;
    use crate::uint256::UInt256;

    fn signer() -> Signer {
        Signer::called_by_entry(UInt160::from_script(b"owner"))
    }

    #[test]
    fn test_requires_signer() {
        let err = TransactionBuilder::new()
            .script(vec![0x00])
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransaction(_)));
    }

    #[test]
    fn test_rejects_duplicate_signers() {
        let err = TransactionBuilder::new()
            .script(vec![0x00])
            .signer(signer())
            .signer(signer())
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransaction(_)));
    }

    #[test]
    fn test_rejects_negative_fee() {
        let err = TransactionBuilder::new()
            .script(vec![0x00])
            .signer(signer())
            .system_fee(Fixed8::from_raw(-1))
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransaction(_)));
    }

    #[test]
    fn test_empty_script_allowed_for_pure_transfer() {
        let tx = TransactionBuilder::new()
            .signer(signer())
            .output(TransactionOutput::new(
                UInt256::from_bytes([2u8; 32]),
                Fixed8::from_raw(1),
                UInt160::from_script(b"dest"),
            ))
            .build()
            .unwrap();
        assert!(tx.script().is_empty());

        assert!(TransactionBuilder::new().signer(signer()).build().is_err());
    }

    #[test]
    fn test_attribute_cap() {
        let mut builder = TransactionBuilder::new().script(vec![0x00]).signer(signer());
        for _ in 0..=MAX_TRANSACTION_ATTRIBUTES {
            builder = builder.attribute(TransactionAttribute::remark(vec![1]));
        }
        assert!(builder.build().is_err());
    }
}
