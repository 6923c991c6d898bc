//! Canned invocation scripts for token contracts.
//!
//! [`TokenContract`] is the capability every deployed contract handle
//! exposes; [`FungibleToken`] layers the standard fungible-token methods
//! (`transfer`, `balanceOf`, `decimals`, `symbol`) on top.

use crate::fixed8::Fixed8;
use crate::uint160::UInt160;

use super::builder::ScriptBuilder;
use super::contract_param::ContractParam;

/// A handle on a deployed contract that can describe calls to itself.
pub trait TokenContract {
    /// The contract's script hash.
    fn script_hash(&self) -> UInt160;

    /// Builds the invocation script for one method call.
    fn call_script(&self, operation: &str, args: &[ContractParam]) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_contract_call(self.script_hash(), operation, args);
        builder.into_bytes()
    }
}

/// A fungible-token contract handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FungibleToken {
    script_hash: UInt160,
}

impl FungibleToken {
    pub fn new(script_hash: UInt160) -> Self {
        FungibleToken { script_hash }
    }

    /// `transfer(from, to, amount)` with the amount in raw units.
    pub fn transfer_script(&self, from: UInt160, to: UInt160, amount: Fixed8) -> Vec<u8> {
        self.call_script(
            "transfer",
            &[
                ContractParam::Hash160(from),
                ContractParam::Hash160(to),
                ContractParam::Integer(amount.raw()),
            ],
        )
    }

    pub fn balance_of_script(&self, owner: UInt160) -> Vec<u8> {
        self.call_script("balanceOf", &[ContractParam::Hash160(owner)])
    }

    pub fn decimals_script(&self) -> Vec<u8> {
        self.call_script("decimals", &[])
    }

    pub fn symbol_script(&self) -> Vec<u8> {
        self.call_script("symbol", &[])
    }
}

impl TokenContract for FungibleToken {
    fn script_hash(&self) -> UInt160 {
        self.script_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_script_shape() {
        let token =
            FungibleToken::new(UInt160::from_hex("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9").unwrap());
        let from = UInt160::from_script(b"from");
        let to = UInt160::from_script(b"to");
        let script = token.transfer_script(from, to, Fixed8::from_raw(1_0000_0000));

        // Ends with the contract hash push and the call syscall.
        let tail_len = 1 + 20 + 5;
        let tail = &script[script.len() - tail_len..];
        assert_eq!(tail[0], 0x14);
        assert_eq!(&tail[1..21], token.script_hash().as_bytes());
        assert_eq!(tail[21], 0x68);

        // Contains the operation name push.
        let op = b"\x08transfer";
        assert!(script.windows(op.len()).any(|w| w == op));
    }

    #[test]
    fn test_parameterless_calls_differ_only_in_name() {
        let token =
            FungibleToken::new(UInt160::from_hex("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9").unwrap());
        let decimals = token.decimals_script();
        let symbol = token.symbol_script();
        assert_ne!(decimals, symbol);
        assert_eq!(&decimals[..2], [0x00, 0xC1]);
        assert_eq!(&symbol[..2], [0x00, 0xC1]);
    }
}
