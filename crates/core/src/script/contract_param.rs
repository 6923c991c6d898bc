//! Typed contract-call arguments.

use serde::{Deserialize, Serialize};

use crate::uint160::UInt160;

/// One argument to a contract invocation.
///
/// `Hash160` pushes the hash in wire (little-endian) order; `String`
/// pushes UTF-8 bytes; `Array` packs its items so they pop in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ContractParam {
    Bool(bool),
    Integer(i64),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(UInt160),
    PublicKey(Vec<u8>),
    Array(Vec<ContractParam>),
}

impl From<bool> for ContractParam {
    fn from(value: bool) -> Self {
        ContractParam::Bool(value)
    }
}

impl From<i64> for ContractParam {
    fn from(value: i64) -> Self {
        ContractParam::Integer(value)
    }
}

impl From<&str> for ContractParam {
    fn from(value: &str) -> Self {
        ContractParam::String(value.to_string())
    }
}

impl From<UInt160> for ContractParam {
    fn from(value: UInt160) -> Self {
        ContractParam::Hash160(value)
    }
}

impl From<Vec<u8>> for ContractParam {
    fn from(value: Vec<u8>) -> Self {
        ContractParam::ByteArray(value)
    }
}
