//! JSON-RPC collaborator client.
//!
//! The construction-and-signing core is transport-free; this crate covers
//! the three calls it consumes from a node (current height, dry-run script
//! execution and raw-transaction submission) plus a cancellable
//! fastest-responder race across candidate endpoints.

mod client;
mod error;
mod models;
mod race;

pub use client::RpcClient;
pub use error::{RpcError, RpcResult};
pub use models::{InvokeResult, VmState};
pub use race::fastest_node;
