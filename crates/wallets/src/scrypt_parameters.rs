//! Scrypt parameters as they appear in a wallet file.

use ont_cryptography::ScryptParams;
use serde::{Deserialize, Serialize};

use crate::{WalletError, WalletResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParameters {
    /// CPU/memory cost parameter (N).
    pub n: u64,

    /// Block size parameter (r).
    pub r: u32,

    /// Parallelization parameter (p).
    pub p: u32,

    /// Derived key length. Ontology keys need at least 64 bytes: the first 12
    /// are the GCM nonce and the last 32 the AES key.
    #[serde(rename = "dkLen", default = "default_dk_len")]
    pub dk_len: usize,
}

fn default_dk_len() -> usize {
    64
}

impl ScryptParameters {
    pub fn validate(&self) -> WalletResult<()> {
        if !self.n.is_power_of_two() || self.n < 2 {
            return Err(WalletError::InvalidScryptParameters(format!(
                "n must be a power of two greater than 1, got {}",
                self.n
            )));
        }
        if self.r == 0 || self.p == 0 {
            return Err(WalletError::InvalidScryptParameters(
                "r and p must be positive".to_string(),
            ));
        }
        if self.dk_len < 64 {
            return Err(WalletError::InvalidScryptParameters(format!(
                "dkLen must be at least 64, got {}",
                self.dk_len
            )));
        }
        Ok(())
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        ScryptParams::default().into()
    }
}

impl From<ScryptParameters> for ScryptParams {
    fn from(value: ScryptParameters) -> Self {
        ScryptParams {
            n: value.n,
            r: value.r,
            p: value.p,
            dk_len: value.dk_len,
        }
    }
}

impl From<ScryptParams> for ScryptParameters {
    fn from(value: ScryptParams) -> Self {
        Self {
            n: value.n,
            r: value.r,
            p: value.p,
            dk_len: value.dk_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wallet_field_names() {
        let params: ScryptParameters =
            serde_json::from_str(r#"{"n":16384,"r":8,"p":8,"dkLen":64}"#).unwrap();
        assert_eq!(params.n, 16384);
        assert_eq!(params.dk_len, 64);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_unusable_parameters() {
        let mut params = ScryptParameters::default();
        params.n = 1000;
        assert!(params.validate().is_err());

        let mut params = ScryptParameters::default();
        params.dk_len = 32;
        assert!(params.validate().is_err());
    }
}
