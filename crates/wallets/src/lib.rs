//! Ontology Wallets Library
//!
//! This crate turns a configured wallet into something that can sign:
//! - Ontology wallet file model (`scrypt`, `defaultAccountAddress`, `accounts`)
//! - Account selection and encrypted-key decryption
//! - [`Signer`], the address/key pair every transaction is signed with

pub mod scrypt_parameters;
pub mod signer;
pub mod wallet;

pub use scrypt_parameters::ScryptParameters;
pub use signer::Signer;
pub use wallet::{Wallet, WalletAccount};

use thiserror::Error;

/// Result type for wallet operations
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// Wallet-related errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet file not found: {0}")]
    WalletFileNotFound(String),

    #[error("Invalid wallet format: {0}")]
    InvalidWalletFormat(String),

    #[error("Wallet contains no accounts")]
    NoAccounts,

    #[error("Invalid password or corrupted key for account {0}")]
    InvalidPassword(String),

    #[error("Decrypted key belongs to {actual}, expected {expected}")]
    AddressMismatch { expected: String, actual: String },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] ont_core::CoreError),

    #[error("Unsupported scrypt parameters: {0}")]
    InvalidScryptParameters(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
