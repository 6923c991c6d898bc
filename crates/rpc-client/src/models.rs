//! Wire models for the consumed RPC surface.

use std::str::FromStr;

use serde::Deserialize;

use neoforge_core::{Fixed8, UInt256};

use crate::error::{RpcError, RpcResult};

/// Terminal state of a dry-run execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Halt,
    Fault,
}

impl FromStr for VmState {
    type Err = RpcError;

    fn from_str(s: &str) -> RpcResult<Self> {
        // Nodes render e.g. "HALT" or "HALT, BREAK".
        match s.split(',').next().map(str::trim) {
            Some("HALT") => Ok(VmState::Halt),
            Some("FAULT") => Ok(VmState::Fault),
            _ => Err(RpcError::Protocol(format!("unknown vm state: {s:?}"))),
        }
    }
}

/// Result of an `invokescript` dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeResult {
    pub state: VmState,
    pub gas_consumed: Fixed8,
}

impl InvokeResult {
    pub fn halted(&self) -> bool {
        self.state == VmState::Halt
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawInvokeResult {
    pub state: String,
    #[serde(alias = "gasconsumed")]
    pub gas_consumed: String,
}

impl TryFrom<RawInvokeResult> for InvokeResult {
    type Error = RpcError;

    fn try_from(raw: RawInvokeResult) -> RpcResult<Self> {
        Ok(InvokeResult {
            state: raw.state.parse()?,
            gas_consumed: raw
                .gas_consumed
                .parse()
                .map_err(|_| RpcError::Protocol(format!("bad gas value: {:?}", raw.gas_consumed)))?,
        })
    }
}

/// `sendrawtransaction` responses differ by node generation: older nodes
/// answer a bare boolean, newer ones an object carrying the hash.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawSendResult {
    Accepted(bool),
    Detailed { hash: UInt256 },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcEnvelope<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_state_parsing() {
        assert_eq!("HALT".parse::<VmState>().unwrap(), VmState::Halt);
        assert_eq!("HALT, BREAK".parse::<VmState>().unwrap(), VmState::Halt);
        assert_eq!("FAULT".parse::<VmState>().unwrap(), VmState::Fault);
        assert!("NONE".parse::<VmState>().is_err());
    }

    #[test]
    fn test_invoke_result_from_json() {
        let raw: RawInvokeResult =
            serde_json::from_str(r#"{"state":"HALT","gas_consumed":"0.209"}"#).unwrap();
        let result = InvokeResult::try_from(raw).unwrap();
        assert!(result.halted());
        assert_eq!(result.gas_consumed, Fixed8::from_raw(20_900_000));
    }

    #[test]
    fn test_send_result_both_shapes() {
        let old: RawSendResult = serde_json::from_str("true").unwrap();
        assert!(matches!(old, RawSendResult::Accepted(true)));

        let json = format!(r#"{{"hash":"{}"}}"#, UInt256::from_bytes([5u8; 32]).to_hex());
        let new: RawSendResult = serde_json::from_str(&json).unwrap();
        assert!(matches!(new, RawSendResult::Detailed { .. }));
    }
}
