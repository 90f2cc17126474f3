//! Ontology addresses.
//!
//! An address is the 20-byte program hash of a verification script. Contracts
//! are addressed by the hash of their AVM code, accounts by the hash of their
//! single-signature script. Nodes key contract storage by the *reversed* hex
//! of those bytes, which this module calls the code hash.

use std::fmt;
use std::str::FromStr;

use ont_cryptography::{hash160, FromBase58Check, PublicKey, ToBase58Check};

use crate::error::{CoreError, CoreResult};
use crate::script_builder::ScriptBuilder;

/// Version byte prepended before base58check encoding.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Size of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> CoreResult<Self> {
        let array: [u8; ADDRESS_SIZE] =
            bytes.try_into().map_err(|_| CoreError::InvalidLength {
                expected: ADDRESS_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Address of a contract, derived from its AVM code.
    pub fn from_vm_code(code: &[u8]) -> Self {
        Self(hash160(code))
    }

    /// Address of a single-signature account.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut builder = ScriptBuilder::new();
        builder.emit_check_sig(public_key);
        Self::from_vm_code(&builder.to_bytes())
    }

    pub fn from_base58(value: &str) -> CoreResult<Self> {
        let bytes = Vec::<u8>::from_base58_check(value, Some(ADDRESS_VERSION))
            .map_err(|err| CoreError::InvalidAddress(format!("{value}: {err}")))?;
        Self::from_slice(&bytes)
    }

    /// Parses the reversed-hex code hash form.
    pub fn from_code_hash(value: &str) -> CoreResult<Self> {
        let mut bytes = hex::decode(value.trim_start_matches("0x"))?;
        bytes.reverse();
        Self::from_slice(&bytes)
    }

    /// Parses the raw (non-reversed) hex form written by [`Address::serialize`].
    pub fn deserialize(value: &str) -> CoreResult<Self> {
        Self::from_slice(&hex::decode(value)?)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        self.0.to_base58_check(Some(ADDRESS_VERSION))
    }

    /// Reversed hex, the form used to address contract storage.
    pub fn to_code_hash(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }

    /// Raw hex of the address bytes.
    pub fn serialize(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
