use serde::Serialize;

use super::API_VERSION;

/// Body of `POST /api/v1/transaction`.
#[derive(Debug, Clone, Serialize)]
pub struct RestRequest {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Data")]
    pub data: String,
}

impl RestRequest {
    pub fn send_raw_transaction(tx_hex: &str) -> Self {
        Self {
            action: "sendrawtransaction".to_string(),
            version: API_VERSION.to_string(),
            data: tx_hex.to_string(),
        }
    }
}

/// WebSocket request frame; unused fields are omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WsRequest {
    pub action: String,
    pub version: String,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_exec: Option<String>,
}

impl WsRequest {
    fn new(action: &str, id: u64) -> Self {
        Self {
            action: action.to_string(),
            version: API_VERSION.to_string(),
            id,
            hash: None,
            raw: None,
            key: None,
            data: None,
            pre_exec: None,
        }
    }

    pub fn send_raw_transaction(id: u64, tx_hex: &str) -> Self {
        Self {
            data: Some(tx_hex.to_string()),
            pre_exec: Some("0".to_string()),
            ..Self::new("sendrawtransaction", id)
        }
    }

    pub fn get_transaction(id: u64, tx_hash: &str) -> Self {
        Self {
            hash: Some(tx_hash.to_string()),
            raw: Some("0".to_string()),
            ..Self::new("gettransaction", id)
        }
    }

    pub fn get_storage(id: u64, code_hash: &str, key_hex: &str) -> Self {
        Self {
            hash: Some(code_hash.to_string()),
            key: Some(key_hex.to_string()),
            ..Self::new("getstorage", id)
        }
    }
}
