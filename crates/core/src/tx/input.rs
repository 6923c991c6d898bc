//! Legacy UTXO input reference.

use serde::{Deserialize, Serialize};

use neoforge_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::uint256::UInt256;

/// A `{prevTxId, prevIndex}` reference to a spendable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prev_tx_id: UInt256,
    pub prev_index: u16,
}

impl TransactionInput {
    pub fn new(prev_tx_id: UInt256, prev_index: u16) -> Self {
        TransactionInput {
            prev_tx_id,
            prev_index,
        }
    }
}

impl Serializable for TransactionInput {
    fn size(&self) -> usize {
        self.prev_tx_id.size() + 2
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        Serializable::serialize(&self.prev_tx_id, writer)?;
        writer.write_u16(self.prev_index);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(TransactionInput {
            prev_tx_id: <UInt256 as Serializable>::deserialize(reader)?,
            prev_index: reader.read_u16()?,
        })
    }
}
