use std::path::PathBuf;

use ont_config::ConfigError;
use ont_core::CoreError;
use ont_rpc_client::ClientError;
use ont_wallets::WalletError;
use thiserror::Error;

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("node client error: {0}")]
    Client(#[from] ClientError),

    #[error("transaction error: {0}")]
    Core(#[from] CoreError),

    #[error("no bytecode loaded for contract '{0}'")]
    UnknownContract(String),

    #[error("invalid bytecode pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("node rejected transaction {hash}: {desc} ({code})")]
    TransactionRejected {
        hash: String,
        code: i64,
        desc: String,
    },

    #[error("invalid storage value for key {key}: {message}")]
    InvalidStorage { key: String, message: String },

    #[error("invalid migration {path}: {message}")]
    Migration { path: PathBuf, message: String },
}
