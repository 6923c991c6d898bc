//! Legacy UTXO output.

use serde::{Deserialize, Serialize};

use neoforge_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::fixed8::Fixed8;
use crate::uint160::UInt160;
use crate::uint256::UInt256;

/// An `{assetId, value, scriptHash}` output entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub asset_id: UInt256,
    pub value: Fixed8,
    pub script_hash: UInt160,
}

impl TransactionOutput {
    pub fn new(asset_id: UInt256, value: Fixed8, script_hash: UInt160) -> Self {
        TransactionOutput {
            asset_id,
            value,
            script_hash,
        }
    }
}

impl Serializable for TransactionOutput {
    fn size(&self) -> usize {
        self.asset_id.size() + 8 + self.script_hash.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        Serializable::serialize(&self.asset_id, writer)?;
        writer.write_i64(self.value.raw());
        Serializable::serialize(&self.script_hash, writer)?;
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(TransactionOutput {
            asset_id: <UInt256 as Serializable>::deserialize(reader)?,
            value: Fixed8::from_raw(reader.read_i64()?),
            script_hash: <UInt160 as Serializable>::deserialize(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neoforge_io::SerializableExt;

    #[test]
    fn test_roundtrip() {
        let output = TransactionOutput::new(
            UInt256::from_bytes([1u8; 32]),
            Fixed8::from_raw(250_000_000),
            UInt160::from_script(b"recipient"),
        );
        let bytes = output.to_array().unwrap();
        assert_eq!(bytes.len(), 60);
        assert_eq!(TransactionOutput::from_array(&bytes).unwrap(), output);
    }
}
