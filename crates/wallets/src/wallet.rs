//! Ontology wallet files.
//!
//! Accounts store their private key as base64 `ciphertext || tag`, encrypted
//! with AES-256-GCM under a scrypt-derived key. The account's base58 address
//! is the additional authenticated data, so a key copied between accounts
//! fails to decrypt.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ont_core::Address;
use ont_cryptography::decrypt_private_key;
use serde::{Deserialize, Serialize};

use crate::{ScryptParameters, Signer, WalletError, WalletResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub scrypt: ScryptParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_account_address: Option<String>,
    pub accounts: Vec<WalletAccount>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub lock: bool,
    #[serde(default)]
    pub algorithm: String,
    /// Base64 of `ciphertext || tag`.
    pub key: String,
    #[serde(rename = "enc-alg", default)]
    pub enc_alg: String,
    /// Base64 scrypt salt.
    pub salt: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub signature_scheme: String,
}

impl Wallet {
    pub fn from_file(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => {
                WalletError::WalletFileNotFound(path.display().to_string())
            }
            _ => WalletError::Io(err),
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> WalletResult<Self> {
        serde_json::from_str(json).map_err(|err| WalletError::InvalidWalletFormat(err.to_string()))
    }

    /// The account named by `defaultAccountAddress`, or the first account.
    pub fn default_account(&self) -> WalletResult<&WalletAccount> {
        let preferred = self.default_account_address.as_deref().and_then(|address| {
            self.accounts
                .iter()
                .find(|account| account.address == address)
        });
        preferred
            .or_else(|| self.accounts.first())
            .ok_or(WalletError::NoAccounts)
    }

    /// Decrypts `account` and checks the key actually derives its address.
    pub fn decrypt_account(&self, account: &WalletAccount, password: &str) -> WalletResult<Signer> {
        self.scrypt.validate()?;
        let expected = Address::from_base58(&account.address)?;

        let encrypted = STANDARD.decode(&account.key).map_err(|err| {
            WalletError::InvalidWalletFormat(format!("key of {}: {err}", account.address))
        })?;
        let salt = STANDARD.decode(&account.salt).map_err(|err| {
            WalletError::InvalidWalletFormat(format!("salt of {}: {err}", account.address))
        })?;

        let private_key = decrypt_private_key(
            &encrypted,
            &account.address,
            &salt,
            password,
            self.scrypt.into(),
        )
        .map_err(|_| WalletError::InvalidPassword(account.address.clone()))?;

        let signer = Signer::from_private_key(private_key)?;
        signer.ensure_address(&expected)?;
        Ok(signer)
    }

    /// Loads the default account's signing identity.
    pub fn unlock(&self, password: &str) -> WalletResult<Signer> {
        let account = self.default_account()?;
        self.decrypt_account(account, password)
    }
}
