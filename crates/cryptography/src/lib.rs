//! Ontology Cryptography
//!
//! The primitives needed to hold an Ontology account and sign transactions
//! with it:
//! - SHA-256, RIPEMD-160 and the combined Hash160 / Hash256 digests
//! - Base58Check encoding of versioned payloads
//! - secp256r1 keys and `SHA256withECDSA` signatures
//! - scrypt key derivation and AES-256-GCM key encryption used by wallet files

pub mod aes;
pub mod base58;
pub mod ecdsa;
pub mod hash;
pub mod scrypt;

pub use aes::{decrypt_private_key, encrypt_private_key};
pub use base58::{FromBase58Check, ToBase58Check};
pub use ecdsa::{PrivateKey, PublicKey, KEY_SIZE, SIGNATURE_SIZE};
pub use hash::{hash160, hash256, ripemd160, sha256};
pub use scrypt::{DeriveScryptKey, ScryptParams};

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cryptography errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("scrypt: invalid scrypt params")]
    InvalidScryptParams,

    #[error("scrypt: invalid derived length")]
    InvalidDerivedLength,

    #[error("aes-gcm: {0}")]
    Aead(&'static str),

    #[error("base58check: invalid character")]
    InvalidBase58Char,

    #[error("base58check: invalid length")]
    InvalidBase58Length,

    #[error("base58check: invalid checksum")]
    InvalidChecksum,

    #[error("base58check: expected prefix {expected} but got {actual}")]
    InvalidPrefix { expected: u8, actual: u8 },
}
