//! Instruction opcodes used by the script builder.

/// The subset of execution-engine opcodes the builder emits.
///
/// Values `0x01..=0x4B` are direct pushes (the opcode byte doubles as the
/// byte count) and are emitted raw rather than through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes an empty byte array.
    Push0 = 0x00,
    /// Next byte is the length of the data to push.
    PushData1 = 0x4C,
    /// Next two bytes (LE) are the length of the data to push.
    PushData2 = 0x4D,
    /// Next four bytes (LE) are the length of the data to push.
    PushData4 = 0x4E,
    /// Pushes the integer -1.
    PushM1 = 0x4F,
    /// Pushes the integer 1. `Push1 + (n - 1)` pushes n for n in 1..=16.
    Push1 = 0x51,
    /// Pushes the integer 16.
    Push16 = 0x60,
    /// Invokes the interop service named by the following 4-byte code.
    Syscall = 0x68,
    /// Packs the top `n` stack items into an array.
    Pack = 0xC1,
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}
