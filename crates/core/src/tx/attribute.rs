//! Free-form transaction attributes.

use serde::{Deserialize, Serialize};

use neoforge_io::{helper, BinaryWriter, IoResult, MemoryReader, Serializable};

/// Most attributes a single transaction may carry.
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;

/// Longest attribute payload accepted when decoding.
const MAX_ATTRIBUTE_DATA: usize = 0xFFFF;

/// Well-known attribute usage bytes.
pub mod usage {
    pub const SCRIPT: u8 = 0x20;
    pub const DESCRIPTION_URL: u8 = 0x81;
    pub const DESCRIPTION: u8 = 0x90;
    pub const REMARK: u8 = 0xF0;
}

/// A `{usage, data}` attribute entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttribute {
    pub usage: u8,
    pub data: Vec<u8>,
}

impl TransactionAttribute {
    pub fn new(usage: u8, data: Vec<u8>) -> Self {
        TransactionAttribute { usage, data }
    }

    pub fn remark(data: Vec<u8>) -> Self {
        Self::new(usage::REMARK, data)
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + helper::get_var_bytes_size(&self.data)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.usage);
        writer.write_var_bytes(&self.data);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let usage = reader.read_u8()?;
        let data = reader.read_var_bytes(MAX_ATTRIBUTE_DATA)?;
        Ok(TransactionAttribute { usage, data })
    }
}
