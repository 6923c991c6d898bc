//! Byte-level builder for invocation and verification scripts.

use neoforge_io::BinaryWriter;

use crate::uint160::UInt160;

use super::contract_param::ContractParam;
use super::interop::InteropService;
use super::op_code::OpCode;

/// Longest data push encoded with a bare length byte.
const MAX_DIRECT_PUSH: usize = 0x4B;

/// Accumulates script bytes through chained `emit_*` calls.
///
/// Push emission always picks the shortest encoding: a bare length byte for
/// up to 75 bytes, then `PUSHDATA1`/`PUSHDATA2`/`PUSHDATA4`.
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    writer: BinaryWriter,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single opcode.
    pub fn emit(&mut self, op: OpCode) -> &mut Self {
        self.writer.write_u8(op.into());
        self
    }

    /// Appends raw bytes with no push framing.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.writer.write_bytes(bytes);
        self
    }

    /// Pushes a byte string with minimal framing.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        match data.len() {
            0 => {
                self.emit(OpCode::Push0);
            }
            len @ 1..=MAX_DIRECT_PUSH => {
                self.writer.write_u8(len as u8);
                self.writer.write_bytes(data);
            }
            len if len <= u8::MAX as usize => {
                self.emit(OpCode::PushData1);
                self.writer.write_u8(len as u8);
                self.writer.write_bytes(data);
            }
            len if len <= u16::MAX as usize => {
                self.emit(OpCode::PushData2);
                self.writer.write_u16(len as u16);
                self.writer.write_bytes(data);
            }
            len => {
                self.emit(OpCode::PushData4);
                self.writer.write_u32(len as u32);
                self.writer.write_bytes(data);
            }
        }
        self
    }

    /// Pushes a signed integer: dedicated opcodes for -1..=16, minimal
    /// two's-complement little-endian bytes otherwise.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => self.emit(OpCode::PushM1),
            0 => self.emit(OpCode::Push0),
            1..=16 => {
                self.writer
                    .write_u8(OpCode::Push1 as u8 + (value as u8 - 1));
                self
            }
            _ => {
                let mut bytes = Vec::new();
                let mut v = value;
                loop {
                    bytes.push((v & 0xFF) as u8);
                    v >>= 8;
                    let top = bytes[bytes.len() - 1];
                    if (v == 0 && top & 0x80 == 0) || (v == -1 && top & 0x80 != 0) {
                        break;
                    }
                }
                self.emit_push(&bytes)
            }
        }
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit(OpCode::Push1)
        } else {
            self.emit(OpCode::Push0)
        }
    }

    /// Appends `SYSCALL` with the service's 4-byte code.
    pub fn emit_syscall(&mut self, service: InteropService) -> &mut Self {
        self.emit(OpCode::Syscall);
        self.writer.write_bytes(&service.code());
        self
    }

    /// Pushes one typed parameter.
    pub fn emit_param(&mut self, param: &ContractParam) -> &mut Self {
        match param {
            ContractParam::Bool(b) => self.emit_push_bool(*b),
            ContractParam::Integer(i) => self.emit_push_int(*i),
            ContractParam::ByteArray(bytes) => self.emit_push(bytes),
            ContractParam::String(s) => self.emit_push(s.as_bytes()),
            ContractParam::Hash160(hash) => self.emit_push(hash.as_bytes()),
            ContractParam::PublicKey(key) => self.emit_push(key),
            ContractParam::Array(items) => {
                // Reverse emission so the packed array pops in source order.
                for item in items.iter().rev() {
                    self.emit_param(item);
                }
                self.emit_push_int(items.len() as i64);
                self.emit(OpCode::Pack)
            }
        }
    }

    /// Emits a full dynamic contract invocation: packed arguments, the
    /// operation name, the contract's script hash and the call syscall.
    pub fn emit_contract_call(
        &mut self,
        script_hash: UInt160,
        operation: &str,
        args: &[ContractParam],
    ) -> &mut Self {
        self.emit_param(&ContractParam::Array(args.to_vec()));
        self.emit_push(operation.as_bytes());
        self.emit_push(script_hash.as_bytes());
        self.emit_syscall(InteropService::SystemContractCall)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.writer.to_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.writer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }
}
