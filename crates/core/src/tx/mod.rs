//! Transaction entity graph, wire codec and builder.

mod attribute;
mod builder;
mod input;
mod output;
mod signer;
mod transaction;
mod witness;

pub use attribute::{usage, TransactionAttribute, MAX_TRANSACTION_ATTRIBUTES};
pub use builder::TransactionBuilder;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use signer::{Signer, WitnessScope, WitnessScopes};
pub use transaction::Transaction;
pub use witness::Witness;
