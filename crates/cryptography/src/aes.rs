//! AES-256-GCM protection of private keys stored in wallet files.
//!
//! The scrypt output is split into a 12 byte nonce (`derived[0..12]`) and a
//! 32 byte AES key (`derived[32..64]`). The base58 address of the account is
//! bound as associated data, so a key decrypted against the wrong account or
//! with the wrong password fails authentication.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use zeroize::Zeroizing;

use crate::{
    ecdsa::{PrivateKey, KEY_SIZE},
    scrypt::{DeriveScryptKey, ScryptParams},
    Error, Result,
};

const NONCE_SIZE: usize = 12;
const AES_KEY_OFFSET: usize = 32;
const AES_KEY_SIZE: usize = 32;
const MIN_DERIVED_LEN: usize = AES_KEY_OFFSET + AES_KEY_SIZE;

fn cipher_parts(
    password: &str,
    salt: &[u8],
    params: ScryptParams,
) -> Result<(Aes256Gcm, [u8; NONCE_SIZE])> {
    if params.dk_len < MIN_DERIVED_LEN {
        return Err(Error::InvalidDerivedLength);
    }
    let derived = password.derive_scrypt_key(salt, params)?;

    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&derived[..NONCE_SIZE]);
    let cipher = Aes256Gcm::new_from_slice(&derived[AES_KEY_OFFSET..MIN_DERIVED_LEN])
        .map_err(|_| Error::Aead("invalid key length"))?;
    Ok((cipher, nonce))
}

/// Encrypts `private_key` for storage in a wallet file. The returned bytes are
/// the ciphertext followed by the 16 byte authentication tag.
pub fn encrypt_private_key(
    private_key: &PrivateKey,
    address: &str,
    salt: &[u8],
    password: &str,
    params: ScryptParams,
) -> Result<Vec<u8>> {
    let (cipher, nonce) = cipher_parts(password, salt, params)?;
    cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: private_key.as_be_bytes(),
                aad: address.as_bytes(),
            },
        )
        .map_err(|_| Error::Aead("encryption failed"))
}

/// Decrypts a wallet-file key. Fails when the password or the address does
/// not match the one the key was encrypted with.
pub fn decrypt_private_key(
    encrypted: &[u8],
    address: &str,
    salt: &[u8],
    password: &str,
    params: ScryptParams,
) -> Result<PrivateKey> {
    let (cipher, nonce) = cipher_parts(password, salt, params)?;
    let plain = Zeroizing::new(
        cipher
            .decrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: encrypted,
                    aad: address.as_bytes(),
                },
            )
            .map_err(|_| Error::Aead("authentication failed"))?,
    );
    if plain.len() != KEY_SIZE {
        return Err(Error::InvalidPrivateKey(format!(
            "decrypted key has {} bytes",
            plain.len()
        )));
    }
    PrivateKey::from_slice(&plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ADDRESS: &str = "ASS1bt8QqasfmS2VFVgWaeHxzDi1oc18ya";
    const SALT: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    // base64 "EnaRrNZSoKbHFjtFal4vyEy/Hjusqd5oUYUwmy8eBCbL21PA2PNmxN/4zbeYjZia"
    const ENCRYPTED: [u8; 48] = hex!(
        "127691acd652a0a6c7163b456a5e2fc84cbf1e3baca9de685185309b2f1e0426cbdb53c0d8f366c4dff8cdb7988d989a"
    );

    fn params() -> ScryptParams {
        ScryptParams {
            n: 1024,
            r: 8,
            p: 8,
            dk_len: 64,
        }
    }

    #[test]
    fn decrypts_known_wallet_key() {
        let key = decrypt_private_key(&ENCRYPTED, ADDRESS, &SALT, "passw0rd", params()).unwrap();
        assert_eq!(key.as_be_bytes(), &[0x11; KEY_SIZE]);
    }

    #[test]
    fn wrong_password_fails_authentication() {
        let err = decrypt_private_key(&ENCRYPTED, ADDRESS, &SALT, "password", params()).unwrap_err();
        assert_eq!(err, Error::Aead("authentication failed"));
    }

    #[test]
    fn address_is_bound_as_associated_data() {
        let other = "AXDS6b6ixVSMGuvNSrbTNkcRHGpYmUXuPY";
        assert!(decrypt_private_key(&ENCRYPTED, other, &SALT, "passw0rd", params()).is_err());
    }

    #[test]
    fn encrypt_matches_wallet_format() {
        let key = PrivateKey::from_slice(&[0x11; KEY_SIZE]).unwrap();
        let encrypted = encrypt_private_key(&key, ADDRESS, &SALT, "passw0rd", params()).unwrap();
        assert_eq!(encrypted, ENCRYPTED);
    }

    #[test]
    fn short_derived_key_is_rejected() {
        let short = ScryptParams {
            dk_len: 32,
            ..params()
        };
        assert_eq!(
            decrypt_private_key(&ENCRYPTED, ADDRESS, &SALT, "passw0rd", short).unwrap_err(),
            Error::InvalidDerivedLength
        );
    }
}
