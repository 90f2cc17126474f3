//! The identity transactions are paid for and signed with.

use ont_core::Address;
use ont_cryptography::{PrivateKey, PublicKey};

use crate::{WalletError, WalletResult};

#[derive(Debug, Clone)]
pub struct Signer {
    address: Address,
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl Signer {
    /// Builds a signer whose address is derived from `private_key`.
    pub fn from_private_key(private_key: PrivateKey) -> WalletResult<Self> {
        let public_key = private_key
            .public_key()
            .map_err(|err| WalletError::InvalidPrivateKey(err.to_string()))?;
        Ok(Self {
            address: Address::from_public_key(&public_key),
            private_key,
            public_key,
        })
    }

    /// Builds a signer from an inline `address` and hex private key, rejecting
    /// keys that do not belong to the address.
    pub fn from_inline(address: &str, private_key_hex: &str) -> WalletResult<Self> {
        let expected = Address::from_base58(address)?;
        let private_key = PrivateKey::from_hex(private_key_hex)
            .map_err(|err| WalletError::InvalidPrivateKey(err.to_string()))?;
        let signer = Self::from_private_key(private_key)?;
        signer.ensure_address(&expected)?;
        Ok(signer)
    }

    pub(crate) fn ensure_address(&self, expected: &Address) -> WalletResult<()> {
        if &self.address != expected {
            return Err(WalletError::AddressMismatch {
                expected: expected.to_base58(),
                actual: self.address.to_base58(),
            });
        }
        Ok(())
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "1111111111111111111111111111111111111111111111111111111111111111";

    #[test]
    fn inline_signer_matches_its_address() {
        let signer = Signer::from_inline("ASS1bt8QqasfmS2VFVgWaeHxzDi1oc18ya", KEY_HEX).unwrap();
        assert_eq!(
            hex::encode(signer.public_key().to_compressed()),
            "020217e617f0b6443928278f96999e69a23a4f2c152bdf6d6cdf66e5b80282d4ed"
        );
    }

    #[test]
    fn inline_signer_rejects_foreign_address() {
        let err = Signer::from_inline("AXDS6b6ixVSMGuvNSrbTNkcRHGpYmUXuPY", KEY_HEX).unwrap_err();
        assert!(matches!(err, WalletError::AddressMismatch { .. }));
    }

    #[test]
    fn inline_signer_rejects_bad_key() {
        let err = Signer::from_inline("ASS1bt8QqasfmS2VFVgWaeHxzDi1oc18ya", "00").unwrap_err();
        assert!(matches!(err, WalletError::InvalidPrivateKey(_)));
    }
}
