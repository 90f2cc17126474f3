//! secp256r1 keys and `SHA256withECDSA` signatures.
//!
//! Ontology accounts are P-256 keys. Public keys travel in their 33 byte
//! compressed SEC1 form and signatures are the fixed 64 byte `r || s`
//! concatenation over the SHA-256 digest of the message.

use std::fmt::{self, Debug, Formatter};

use p256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::{Error, Result};

pub const KEY_SIZE: usize = 32;
pub const COMPRESSED_KEY_SIZE: usize = 33;
pub const SIGNATURE_SIZE: usize = 64;

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != KEY_SIZE {
            return Err(Error::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                slice.len()
            )));
        }
        let mut buf = [0u8; KEY_SIZE];
        buf.copy_from_slice(slice);
        let key = Self {
            key: Zeroizing::new(buf),
        };
        // reject zero and out-of-range scalars up front
        key.signing_key()?;
        Ok(key)
    }

    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = Zeroizing::new(
            hex::decode(hex_str.trim_start_matches("0x"))
                .map_err(|e| Error::InvalidPrivateKey(e.to_string()))?,
        );
        Self::from_slice(&bytes)
    }

    pub fn random() -> Self {
        Self::from_signing_key(&SigningKey::random(&mut OsRng))
    }

    fn from_signing_key(signing_key: &SigningKey) -> Self {
        let mut buf = [0u8; KEY_SIZE];
        buf.copy_from_slice(&signing_key.to_bytes());
        Self {
            key: Zeroizing::new(buf),
        }
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        let signing_key = self.signing_key()?;
        Ok(PublicKey::from_verifying_key(signing_key.verifying_key()))
    }

    /// Signs `message` with SHA-256 + ECDSA (RFC 6979 nonces).
    pub fn sign(&self, message: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        let signing_key = self.signing_key()?;
        let signature: Signature = signing_key.sign(message);
        let mut out = [0u8; SIGNATURE_SIZE];
        out.copy_from_slice(&signature.to_bytes());
        Ok(out)
    }

    fn signing_key(&self) -> Result<SigningKey> {
        SigningKey::from_slice(self.key.as_slice())
            .map_err(|e| Error::InvalidPrivateKey(e.to_string()))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice() == other.key.as_slice()
    }
}

impl Eq for PrivateKey {}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    compressed: [u8; COMPRESSED_KEY_SIZE],
}

impl PublicKey {
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Ok(Self::from_verifying_key(&key))
    }

    fn from_verifying_key(key: &VerifyingKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut compressed = [0u8; COMPRESSED_KEY_SIZE];
        compressed.copy_from_slice(encoded.as_bytes());
        Self { compressed }
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_SIZE] {
        self.compressed
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let key = VerifyingKey::from_sec1_bytes(&self.compressed)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        let signature = Signature::from_slice(signature)
            .map_err(|e| Error::InvalidSignature(e.to_string()))?;
        Ok(key.verify(message, &signature).is_ok())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &hex::encode(self.compressed))
            .finish()
    }
}
