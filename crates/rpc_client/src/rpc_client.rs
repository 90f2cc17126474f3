//! JSON-RPC 2.0 over HTTP POST.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::models::{NodeResponse, RpcRequest};
use crate::{ClientError, ClientResult, NetworkClient};

pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: Url) -> ClientResult<Self> {
        Ok(Self::with_client(Client::builder().build()?, url))
    }

    /// Creates a client that shares an existing HTTP connection pool.
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
            next_id: AtomicU64::new(1),
        }
    }

    fn as_rpc_request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        RpcRequest::new(self.next_id.fetch_add(1, Ordering::Relaxed), method, params)
    }

    async fn rpc_send(&self, method: &str, params: Vec<Value>) -> ClientResult<NodeResponse> {
        let request = self.as_rpc_request(method, params);
        debug!(target: "ont::rpc", id = request.id, method, "sending request");

        let content = self
            .http_client
            .post(self.base_address.clone())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&content).map_err(|e| {
            ClientError::InvalidResponse(format!("{method}: {e}"))
        })
    }
}

#[async_trait]
impl NetworkClient for RpcClient {
    async fn send_raw_transaction(&self, tx_hex: &str) -> ClientResult<NodeResponse> {
        self.rpc_send("sendrawtransaction", vec![json!(tx_hex)]).await
    }

    async fn get_raw_transaction_json(&self, tx_hash: &str) -> ClientResult<NodeResponse> {
        self.rpc_send("getrawtransaction", vec![json!(tx_hash), json!(1)])
            .await
    }

    async fn get_storage(&self, code_hash: &str, key_hex: &str) -> ClientResult<NodeResponse> {
        self.rpc_send("getstorage", vec![json!(code_hash), json!(key_hex)])
            .await
    }

    fn endpoint(&self) -> &Url {
        &self.base_address
    }
}
