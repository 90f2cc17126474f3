//! # Ontology Contract Harness
//!
//! Deploys compiled AVM contracts to an Ontology node, waits for them to be
//! mined, runs their initializer and exposes typed clients that drive the
//! deployed contracts from integration tests.
//!
//! ```text
//! ConfigLoader ──► Deployer::deploy ──► DeployedTransaction::deployed
//!   (bytecode,        (sign, submit)        (wait deploy tx, then init tx)
//!    client, signer)
//! ```

pub mod bytecode;
pub mod contracts;
pub mod deployer;
pub mod error;
pub mod loader;
pub mod migrations;
pub mod storage;
pub mod waiter;

mod submit;

pub use bytecode::BytecodeMap;
pub use deployer::{DeployedTransaction, Deployer};
pub use error::{HarnessError, HarnessResult};
pub use loader::ConfigLoader;
pub use migrations::{run_migrations, DeploymentReport, Migration, MigrationStep};
pub use waiter::{wait_for_transaction_receipt, WaitOptions, WaitOutcome};

pub use tokio_util::sync::CancellationToken;
