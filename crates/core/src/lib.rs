//! Core transaction construction-and-signing engine.
//!
//! The pipeline: an [`Intent`] becomes an invocation script (via
//! [`script::ScriptBuilder`]) or legacy outputs (via [`selector`]); a
//! [`tx::TransactionBuilder`] materializes an immutable [`tx::Transaction`];
//! the signing digest is derived over the unsigned body plus the network
//! magic; [`wallet`] keys produce signatures; witnesses are assembled and
//! attached in signer order; [`validator`] cross-checks fees, expiry and
//! signer coverage before the caller serializes for submission.
//!
//! All operations here are pure, synchronous and side-effect-free on their
//! inputs; collaborator data (block height, dry-run gas) is passed in.

pub mod error;
pub mod fixed8;
pub mod network;
pub mod script;
pub mod selector;
pub mod tx;
pub mod uint160;
pub mod uint256;
pub mod validator;
pub mod wallet;

pub use error::{CoreError, CoreResult};
pub use fixed8::Fixed8;
pub use network::NetworkConfig;
pub use script::{ContractParam, InteropService, OpCode, ScriptBuilder};
pub use selector::{calculate_inputs, Balance, BalanceEntry, Intent, Selection};
pub use tx::{
    Signer, Transaction, TransactionAttribute, TransactionBuilder, TransactionInput,
    TransactionOutput, Witness, WitnessScope, WitnessScopes,
};
pub use uint160::UInt160;
pub use uint256::UInt256;
pub use validator::{validate_all, validate_signing, Fix, ValidationReport};
pub use wallet::{sign_transaction, Account, KeyPair};
