//! Ontology Node Clients
//!
//! One async trait, [`NetworkClient`], with three transports that speak the
//! node's RPC, REST and WebSocket dialects. Every call resolves to the node's
//! answer as a [`NodeResponse`] (which may itself carry a node-side error
//! code) or to a [`ClientError`] when the node could not be reached.

pub mod models;
mod client_error;
mod rest_client;
mod rpc_client;
mod websocket_client;

use std::sync::Arc;

use async_trait::async_trait;
use ont_config::NetworkMethod;
use url::Url;

pub use client_error::{ClientError, ClientResult};
pub use models::NodeResponse;
pub use rest_client::RestClient;
pub use rpc_client::RpcClient;
pub use websocket_client::WebsocketClient;

/// Operations the deployment harness needs from a node.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Submits a signed, hex-encoded transaction.
    async fn send_raw_transaction(&self, tx_hex: &str) -> ClientResult<NodeResponse>;

    /// Looks up a transaction by hash in its JSON form.
    async fn get_raw_transaction_json(&self, tx_hash: &str) -> ClientResult<NodeResponse>;

    /// Reads `key_hex` from the storage of the contract at `code_hash`.
    async fn get_storage(&self, code_hash: &str, key_hex: &str) -> ClientResult<NodeResponse>;

    /// Node address, for logs.
    fn endpoint(&self) -> &Url;
}

/// Builds the client for `method` talking to `host`.
pub fn connect(method: NetworkMethod, host: Url) -> ClientResult<Arc<dyn NetworkClient>> {
    let client: Arc<dyn NetworkClient> = match method {
        NetworkMethod::Rpc => Arc::new(RpcClient::new(host)?),
        NetworkMethod::Rest => Arc::new(RestClient::new(host)?),
        NetworkMethod::Websocket => Arc::new(WebsocketClient::new(host)?),
    };
    Ok(client)
}
