//! WebSocket API.
//!
//! Each call opens its own connection, sends one request frame and reads
//! until the reply carrying the same `Id` arrives. Frames for other ids
//! (subscription pushes, stale replies) are skipped.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, trace};
use url::Url;

use crate::models::{NodeResponse, WsRequest, WsResponse};
use crate::{ClientError, ClientResult, NetworkClient};

pub struct WebsocketClient {
    base_address: Url,
    next_id: AtomicU64,
}

impl WebsocketClient {
    pub fn new(url: Url) -> ClientResult<Self> {
        match url.scheme() {
            "ws" | "wss" => Ok(Self {
                base_address: url,
                next_id: AtomicU64::new(1),
            }),
            other => Err(ClientError::UnsupportedScheme {
                scheme: other.to_string(),
                transport: "websocket",
            }),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send(&self, request: WsRequest) -> ClientResult<NodeResponse> {
        let id = request.id;
        let frame = serde_json::to_string(&request)?;

        let (mut stream, _) = connect_async(self.base_address.as_str()).await?;
        debug!(target: "ont::ws", id, action = %request.action, "sending frame");
        stream.send(Message::Text(frame)).await?;

        while let Some(message) = stream.next().await {
            let text = match message? {
                Message::Text(text) => text,
                Message::Close(_) => break,
                _ => continue,
            };
            let reply: WsResponse = match serde_json::from_str(&text) {
                Ok(reply) => reply,
                Err(e) => {
                    trace!(target: "ont::ws", error = %e, "ignoring unparsable frame");
                    continue;
                }
            };
            if reply.id.as_ref().and_then(Value::as_u64) == Some(id) {
                // best effort, the reply is already in hand
                let _ = stream.close(None).await;
                return Ok(reply.body.into());
            }
        }

        Err(ClientError::ConnectionClosed(id))
    }
}

#[async_trait]
impl NetworkClient for WebsocketClient {
    async fn send_raw_transaction(&self, tx_hex: &str) -> ClientResult<NodeResponse> {
        self.send(WsRequest::send_raw_transaction(self.next_id(), tx_hex))
            .await
    }

    async fn get_raw_transaction_json(&self, tx_hash: &str) -> ClientResult<NodeResponse> {
        self.send(WsRequest::get_transaction(self.next_id(), tx_hash))
            .await
    }

    async fn get_storage(&self, code_hash: &str, key_hex: &str) -> ClientResult<NodeResponse> {
        self.send(WsRequest::get_storage(self.next_id(), code_hash, key_hex))
            .await
    }

    fn endpoint(&self) -> &Url {
        &self.base_address
    }
}
