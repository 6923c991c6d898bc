//! Transaction signers and their witness scopes.

use serde::{Deserialize, Serialize};

use neoforge_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::uint160::UInt160;

/// Declared breadth of a signer's authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum WitnessScope {
    /// Witness only, no authorization delegated.
    None = 0x00,
    /// Valid for calls made directly by the entry script.
    CalledByEntry = 0x01,
    /// Valid only for an allow-listed set of contracts.
    CustomContracts = 0x10,
    /// Valid only for contracts in an allow-listed set of groups.
    CustomGroups = 0x20,
    /// Valid everywhere. Exclusive of all other scopes.
    Global = 0x80,
}

/// A combination of [`WitnessScope`] flags, serialized as one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WitnessScopes(u8);

const KNOWN_SCOPE_BITS: u8 = 0xB1;

impl WitnessScopes {
    pub const NONE: WitnessScopes = WitnessScopes(WitnessScope::None as u8);
    pub const CALLED_BY_ENTRY: WitnessScopes = WitnessScopes(WitnessScope::CalledByEntry as u8);
    pub const GLOBAL: WitnessScopes = WitnessScopes(WitnessScope::Global as u8);

    /// Validates the raw byte: only known bits, and `Global` stands alone.
    pub fn from_byte(byte: u8) -> IoResult<Self> {
        if byte & !KNOWN_SCOPE_BITS != 0 {
            return Err(IoError::Format(format!(
                "unknown witness scope bits: {byte:#04x}"
            )));
        }
        if byte & WitnessScope::Global as u8 != 0 && byte != WitnessScope::Global as u8 {
            return Err(IoError::Format(
                "global witness scope cannot combine with others".to_string(),
            ));
        }
        Ok(WitnessScopes(byte))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, scope: WitnessScope) -> bool {
        if self.0 == 0 {
            matches!(scope, WitnessScope::None)
        } else {
            self.0 & scope as u8 != 0
        }
    }

    pub fn with(self, scope: WitnessScope) -> Self {
        WitnessScopes(self.0 | scope as u8)
    }
}

impl From<WitnessScope> for WitnessScopes {
    fn from(scope: WitnessScope) -> Self {
        WitnessScopes(scope as u8)
    }
}

/// A `{scriptHash, scope}` signer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub account: UInt160,
    pub scopes: WitnessScopes,
}

impl Signer {
    pub fn new(account: UInt160, scopes: impl Into<WitnessScopes>) -> Self {
        Signer {
            account,
            scopes: scopes.into(),
        }
    }

    /// The common case: authorization for entry-script calls only.
    pub fn called_by_entry(account: UInt160) -> Self {
        Signer::new(account, WitnessScope::CalledByEntry)
    }

    pub fn global(account: UInt160) -> Self {
        Signer::new(account, WitnessScope::Global)
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        self.account.size() + 1
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        Serializable::serialize(&self.account, writer)?;
        writer.write_u8(self.scopes.bits());
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let account = <UInt160 as Serializable>::deserialize(reader)?;
        let scopes = WitnessScopes::from_byte(reader.read_u8()?)?;
        Ok(Signer { account, scopes })
    }
}
