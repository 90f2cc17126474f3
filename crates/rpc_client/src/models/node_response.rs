use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error code nodes report for a successful call.
pub const SUCCESS: i64 = 0;

/// A node's answer, normalised across transports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResponse {
    /// `0` on success, a node error code otherwise.
    #[serde(default)]
    pub error: i64,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub result: Value,
}

impl NodeResponse {
    pub fn success(result: Value) -> Self {
        Self {
            error: SUCCESS,
            desc: "SUCCESS".to_string(),
            result,
        }
    }

    pub fn failure(error: i64, desc: impl Into<String>) -> Self {
        Self {
            error,
            desc: desc.into(),
            result: Value::String(String::new()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error == SUCCESS
    }

    /// The result as a string, if it is one.
    pub fn result_str(&self) -> Option<&str> {
        self.result.as_str()
    }
}

/// REST replies use capitalised field names.
#[derive(Debug, Deserialize)]
pub(crate) struct RestResponse {
    #[serde(rename = "Error", default)]
    error: i64,
    #[serde(rename = "Desc", default)]
    desc: String,
    #[serde(rename = "Result", default)]
    result: Value,
}

impl From<RestResponse> for NodeResponse {
    fn from(value: RestResponse) -> Self {
        Self {
            error: value.error,
            desc: value.desc,
            result: value.result,
        }
    }
}

/// WebSocket replies are REST replies tagged with the request `Id`.
#[derive(Debug, Deserialize)]
pub(crate) struct WsResponse {
    #[serde(rename = "Id", default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub body: RestResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rpc_shape_parses_directly() {
        let response: NodeResponse = serde_json::from_value(json!({
            "desc": "UNKNOWN TRANSACTION",
            "error": 44001,
            "id": 1,
            "jsonrpc": "2.0",
            "result": ""
        }))
        .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.desc, "UNKNOWN TRANSACTION");
    }

    #[test]
    fn rest_shape_converts() {
        let response: RestResponse = serde_json::from_value(json!({
            "Action": "getstorage",
            "Desc": "SUCCESS",
            "Error": 0,
            "Result": "0a",
            "Version": "1.0.0"
        }))
        .unwrap();
        let response = NodeResponse::from(response);
        assert!(response.is_success());
        assert_eq!(response.result_str(), Some("0a"));
    }

    #[test]
    fn websocket_shape_keeps_id() {
        let response: WsResponse = serde_json::from_value(json!({
            "Action": "gettransaction",
            "Desc": "SUCCESS",
            "Error": 0,
            "Id": 7,
            "Result": {"Hash": "ab"},
            "Version": "1.0.0"
        }))
        .unwrap();
        assert_eq!(response.id, Some(json!(7)));
        assert_eq!(NodeResponse::from(response.body).result["Hash"], "ab");
    }
}
