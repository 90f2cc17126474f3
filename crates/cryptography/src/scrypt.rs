//! scrypt key derivation as parameterised by Ontology wallet files.

use std::fmt;

use zeroize::Zeroizing;

use crate::{Error, Result};

/// Cost parameters stored in the `scrypt` section of a wallet file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScryptParams {
    /// CPU/memory cost, a power of two.
    pub n: u64,
    /// Block size.
    pub r: u32,
    /// Parallelism.
    pub p: u32,
    /// Derived key length in bytes.
    pub dk_len: usize,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            n: 4096,
            r: 8,
            p: 8,
            dk_len: 64,
        }
    }
}

impl fmt::Display for ScryptParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScryptParams{{n:{},r:{},p:{},dkLen:{}}}",
            self.n, self.r, self.p, self.dk_len
        )
    }
}

pub trait DeriveScryptKey {
    fn derive_scrypt_key(&self, salt: &[u8], params: ScryptParams)
        -> Result<Zeroizing<Vec<u8>>>;
}

impl<T: AsRef<[u8]> + ?Sized> DeriveScryptKey for T {
    /// n must be a power of two,
    /// dk_len must be in [10, 64].
    fn derive_scrypt_key(
        &self,
        salt: &[u8],
        params: ScryptParams,
    ) -> Result<Zeroizing<Vec<u8>>> {
        if params.n.count_ones() != 1 {
            return Err(Error::InvalidScryptParams);
        }

        let scrypt_params = scrypt::Params::new(
            params.n.ilog2() as u8,
            params.r,
            params.p,
            params.dk_len,
        )
        .map_err(|_| Error::InvalidScryptParams)?;

        let mut derived = Zeroizing::new(vec![0u8; params.dk_len]);
        scrypt::scrypt(self.as_ref(), salt, &scrypt_params, derived.as_mut_slice())
            .map_err(|_| Error::InvalidDerivedLength)?;

        Ok(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> ScryptParams {
        ScryptParams {
            n: 1024,
            r: 8,
            p: 1,
            dk_len: 64,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = "password".derive_scrypt_key(b"salt", light()).unwrap();
        let b = "password".derive_scrypt_key(b"salt", light()).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn salt_changes_output() {
        let a = "password".derive_scrypt_key(b"salt-a", light()).unwrap();
        let b = "password".derive_scrypt_key(b"salt-b", light()).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn rejects_non_power_of_two_cost() {
        let params = ScryptParams {
            n: 1000,
            ..light()
        };
        assert_eq!(
            "password".derive_scrypt_key(b"salt", params).unwrap_err(),
            Error::InvalidScryptParams
        );
    }
}
