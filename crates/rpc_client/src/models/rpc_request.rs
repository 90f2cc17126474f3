use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: u64,

    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    pub method: String,

    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(id: u64, method: &str, params: Vec<Value>) -> Self {
        Self {
            id,
            json_rpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }
    }
}
