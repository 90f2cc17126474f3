//! Contract storage layout and value codecs.
//!
//! Keys are ASCII prefixes followed by raw address (or order id) bytes, sent
//! to the node as hex. Integer values are little-endian; a missing key reads
//! as zero.

use num_bigint::{BigInt, BigUint};
use ont_core::Address;
use ont_rpc_client::NodeResponse;
use serde_json::Value;

use crate::error::{HarnessError, HarnessResult};

pub const DEPLOYED_KEY: &str = "DEPLOYED";
pub const OWNER_KEY: &str = "___OWNER";
pub const SUPPLY_KEY: &str = "__SUPPLY";
pub const OWN_PREFIX: &str = "_____own";
pub const ALLOWANCE_PREFIX: &str = "___allow";
pub const PAYMENT_PREFIX: &str = "_____pay";

/// Hex storage key: `prefix` followed by each of `parts`.
pub fn storage_key(prefix: &str, parts: &[&[u8]]) -> String {
    let mut key = prefix.as_bytes().to_vec();
    for part in parts {
        key.extend_from_slice(part);
    }
    hex::encode(key)
}

pub fn balance_key(account: &Address) -> String {
    storage_key(OWN_PREFIX, &[account.as_bytes()])
}

pub fn allowance_key(from: &Address, to: &Address) -> String {
    storage_key(ALLOWANCE_PREFIX, &[from.as_bytes(), to.as_bytes()])
}

pub fn payment_key(order_id: &[u8]) -> String {
    storage_key(PAYMENT_PREFIX, &[order_id])
}

/// Raw bytes stored under a key, `None` when the key is absent.
pub fn stored_bytes(key: &str, response: &NodeResponse) -> HarnessResult<Option<Vec<u8>>> {
    if !response.is_success() {
        return Ok(None);
    }
    match &response.result {
        Value::Null => Ok(None),
        Value::String(value) if value.is_empty() => Ok(None),
        Value::String(value) => hex::decode(value).map(Some).map_err(|err| {
            HarnessError::InvalidStorage {
                key: key.to_string(),
                message: err.to_string(),
            }
        }),
        other => Err(HarnessError::InvalidStorage {
            key: key.to_string(),
            message: format!("expected hex string, got {other}"),
        }),
    }
}

/// Reads a little-endian unsigned integer; absent keys are zero.
pub fn decode_amount(bytes: Option<&[u8]>) -> BigUint {
    bytes.map(BigUint::from_bytes_le).unwrap_or_default()
}

/// Minimal little-endian two's-complement bytes, the AVM's integer form.
pub fn encode_amount(amount: &BigInt) -> Vec<u8> {
    amount.to_signed_bytes_le()
}
