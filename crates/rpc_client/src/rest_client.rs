//! The node's REST API under `/api/v1`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::models::{NodeResponse, RestRequest, RestResponse};
use crate::{ClientError, ClientResult, NetworkClient};

pub struct RestClient {
    base_address: Url,
    http_client: Client,
}

impl RestClient {
    pub fn new(url: Url) -> ClientResult<Self> {
        Ok(Self::with_client(Client::builder().build()?, url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            base_address: url,
            http_client: client,
        }
    }

    /// `path` is appended to the configured host, keeping any prefix it has.
    fn url_for(&self, path: &str) -> ClientResult<Url> {
        let base = self.base_address.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    async fn parse(response: Response) -> ClientResult<NodeResponse> {
        let content = response.error_for_status()?.text().await?;
        let parsed: RestResponse = serde_json::from_str(&content)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(parsed.into())
    }

    async fn get(&self, path: &str) -> ClientResult<NodeResponse> {
        let url = self.url_for(path)?;
        debug!(target: "ont::rest", %url, "GET");
        Self::parse(self.http_client.get(url).send().await?).await
    }
}

#[async_trait]
impl NetworkClient for RestClient {
    async fn send_raw_transaction(&self, tx_hex: &str) -> ClientResult<NodeResponse> {
        let url = self.url_for("/api/v1/transaction")?;
        debug!(target: "ont::rest", %url, "POST sendrawtransaction");
        let response = self
            .http_client
            .post(url)
            .json(&RestRequest::send_raw_transaction(tx_hex))
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn get_raw_transaction_json(&self, tx_hash: &str) -> ClientResult<NodeResponse> {
        self.get(&format!("/api/v1/transaction/{tx_hash}?raw=0")).await
    }

    async fn get_storage(&self, code_hash: &str, key_hex: &str) -> ClientResult<NodeResponse> {
        self.get(&format!("/api/v1/storage/{code_hash}/{key_hex}"))
            .await
    }

    fn endpoint(&self) -> &Url {
        &self.base_address
    }
}
