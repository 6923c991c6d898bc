//! 256-bit hash identifier (transaction ids, asset ids).
//!
//! Same convention as [`crate::uint160::UInt160`]: wire order is
//! little-endian, text form is reversed hex.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use neoforge_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};

pub const UINT256_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    pub const ZERO: UInt256 = UInt256([0u8; UINT256_SIZE]);

    /// Wraps bytes already in wire (little-endian) order.
    pub const fn from_bytes(bytes: [u8; UINT256_SIZE]) -> Self {
        UInt256(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; UINT256_SIZE] = slice
            .try_into()
            .map_err(|_| CoreError::Format(format!("expected 32 bytes, got {}", slice.len())))?;
        Ok(UInt256(bytes))
    }

    pub const fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }

    /// Parses the big-endian textual hex form, with or without `0x`.
    pub fn from_hex(s: &str) -> CoreResult<Self> {
        let mut bytes = neoforge_io::decode_hex(s)?;
        if bytes.len() != UINT256_SIZE {
            return Err(CoreError::Format(format!(
                "expected 64 hex chars, got {}",
                s.trim_start_matches("0x").len()
            )));
        }
        bytes.reverse();
        Ok(UInt256(bytes.try_into().unwrap_or([0u8; UINT256_SIZE])))
    }

    /// Big-endian textual hex form, no prefix.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        UInt256::from_hex(s)
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        UINT256_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let bytes = reader.read_bytes(UINT256_SIZE)?;
        let mut array = [0u8; UINT256_SIZE];
        array.copy_from_slice(bytes);
        Ok(UInt256(array))
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        UInt256::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_reverses() {
        let mut wire = [0u8; 32];
        wire[0] = 0xAA;
        let value = UInt256::from_bytes(wire);
        assert!(value.to_hex().ends_with("aa"));
        assert_eq!(UInt256::from_hex(&value.to_hex()).unwrap(), value);
    }

    #[test]
    fn test_serde_as_text() {
        let value = UInt256::from_bytes([7u8; 32]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"{}\"", value.to_hex()));
        assert_eq!(serde_json::from_str::<UInt256>(&json).unwrap(), value);
    }

    #[test]
    fn test_bad_lengths_rejected() {
        assert!(UInt256::from_hex("00ff").is_err());
        assert!(UInt256::from_slice(&[0u8; 31]).is_err());
    }
}
