//! Core error types.

use thiserror::Error;

/// Result alias for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Cryptography error: {0}")]
    Cryptography(#[from] ont_cryptography::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: &str) -> CoreResult<Vec<u8>> {
        Ok(hex::decode(value)?)
    }

    #[test]
    fn hex_errors_convert_and_compare() {
        let err = decode("zz").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
        assert_eq!(decode("0a").unwrap(), vec![0x0a]);
        assert!(err.to_string().starts_with("Invalid hex:"));
    }
}
