//! Invocation-script construction.
//!
//! [`ScriptBuilder`] emits the byte-level push and syscall instructions the
//! execution engine consumes; [`ContractParam`] is the typed argument model
//! layered on top; [`token`] provides canned scripts for fungible-token
//! contracts.

mod builder;
mod contract_param;
mod interop;
mod op_code;
pub mod token;

pub use builder::ScriptBuilder;
pub use contract_param::ContractParam;
pub use interop::InteropService;
pub use op_code::OpCode;
