//! 160-bit script hash identifier.
//!
//! Stored and serialized in wire (little-endian) byte order; the textual
//! form is the byte-reversed (big-endian) hex string, optionally prefixed
//! with `0x`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use neoforge_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};

pub const UINT160_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    pub const ZERO: UInt160 = UInt160([0u8; UINT160_SIZE]);

    /// Wraps bytes already in wire (little-endian) order.
    pub const fn from_bytes(bytes: [u8; UINT160_SIZE]) -> Self {
        UInt160(bytes)
    }

    pub fn from_slice(slice: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; UINT160_SIZE] = slice
            .try_into()
            .map_err(|_| CoreError::Format(format!("expected 20 bytes, got {}", slice.len())))?;
        Ok(UInt160(bytes))
    }

    /// Wire (little-endian) order bytes.
    pub const fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.0
    }

    /// Hashes a verification or invocation script: RIPEMD-160 over SHA-256.
    pub fn from_script(script: &[u8]) -> Self {
        UInt160(neoforge_crypto::hash::hash160(script))
    }

    /// Parses the big-endian textual hex form, with or without `0x`.
    pub fn from_hex(s: &str) -> CoreResult<Self> {
        let mut bytes = neoforge_io::decode_hex(s)?;
        if bytes.len() != UINT160_SIZE {
            return Err(CoreError::Format(format!(
                "expected 40 hex chars, got {}",
                s.trim_start_matches("0x").len()
            )));
        }
        bytes.reverse();
        Ok(UInt160(bytes.try_into().unwrap_or([0u8; UINT160_SIZE])))
    }

    /// Big-endian textual hex form, no prefix.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        UInt160::from_hex(s)
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        UINT160_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let bytes = reader.read_bytes(UINT160_SIZE)?;
        let mut array = [0u8; UINT160_SIZE];
        array.copy_from_slice(bytes);
        Ok(UInt160(array))
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        UInt160::from_hex(&s).map_err(D::Error::custom)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = IoError;

    fn try_from(slice: &[u8]) -> Result<Self, IoError> {
        UInt160::from_slice(slice)
            .map_err(|_| IoError::Format(format!("expected 20 bytes, got {}", slice.len())))
    }
}
