//! # Ontology Core
//!
//! The small slice of the Ontology protocol the deployment harness needs:
//!
//! - **Address**: program hashes of contracts and accounts, with the base58
//!   and reversed-hex forms the node APIs expect
//! - **Script building**: AVM push/pack/appcall emission for invoke payloads
//! - **Transactions**: deploy and invoke transactions, their wire encoding,
//!   sign content and `SHA256withECDSA` witnesses

pub mod address;
pub mod error;
pub mod io;
pub mod parameter;
pub mod script_builder;
pub mod transaction;

pub use address::{Address, ADDRESS_VERSION};
pub use error::{CoreError, CoreResult};
pub use parameter::Parameter;
pub use script_builder::{OpCode, ScriptBuilder};
pub use transaction::{
    builder::{self as transaction_builder, ContractMetadata},
    DeployCode, InvokeCode, Payload, Transaction, TransactionType, TxSignature,
};
