//! Scriptable in-memory node shared by the harness integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ont_cryptography::PrivateKey;
use ont_harness::BytecodeMap;
use ont_rpc_client::{ClientError, ClientResult, NetworkClient, NodeResponse};
use ont_wallets::Signer;
use serde_json::json;
use url::Url;

/// Contract code used across tests.
pub const TOKEN_CODE: [u8; 17] = [
    0x00, 0xc5, 0x6b, 0x6c, 0x76, 0x6b, 0x00, 0x52, 0x7a, 0xc4, 0x6c, 0x76, 0x6b, 0x51, 0x52, 0x7a,
    0xc4,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Sent(String),
    Polled(String),
    Storage { code_hash: String, key: String },
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    polls_per_hash: HashMap<String, u32>,
    storage: HashMap<(String, String), String>,
}

/// Transactions confirm on poll number `confirm_on` (1-based) for their
/// hash; `None` means they are never mined.
pub struct MockNode {
    endpoint: Url,
    confirm_on: Option<u32>,
    reject_submissions: bool,
    fail_polls: bool,
    state: Mutex<State>,
}

impl MockNode {
    pub fn confirming_on(poll: u32) -> Arc<Self> {
        Arc::new(Self::build(Some(poll), false, false))
    }

    pub fn never_confirming() -> Arc<Self> {
        Arc::new(Self::build(None, false, false))
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self::build(Some(1), true, false))
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self::build(Some(1), false, true))
    }

    fn build(confirm_on: Option<u32>, reject_submissions: bool, fail_polls: bool) -> Self {
        Self {
            endpoint: Url::parse("http://mock.node:20336").unwrap(),
            confirm_on,
            reject_submissions,
            fail_polls,
            state: Mutex::new(State::default()),
        }
    }

    pub fn set_storage(&self, code_hash: &str, key: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .storage
            .insert((code_hash.to_string(), key.to_string()), value.to_string());
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Sent(tx) => Some(hex::decode(tx).unwrap()),
                _ => None,
            })
            .collect()
    }

    pub fn polls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Polled(hash) => Some(hash),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl NetworkClient for MockNode {
    async fn send_raw_transaction(&self, tx_hex: &str) -> ClientResult<NodeResponse> {
        let mut state = self.state.lock().unwrap();
        state.events.push(Event::Sent(tx_hex.to_string()));
        if self.reject_submissions {
            return Ok(NodeResponse::failure(43001, "INVALID TRANSACTION"));
        }
        Ok(NodeResponse::success(json!("")))
    }

    async fn get_raw_transaction_json(&self, tx_hash: &str) -> ClientResult<NodeResponse> {
        if self.fail_polls {
            return Err(ClientError::InvalidResponse("connection reset".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        state.events.push(Event::Polled(tx_hash.to_string()));
        let polls = state.polls_per_hash.entry(tx_hash.to_string()).or_default();
        *polls += 1;
        match self.confirm_on {
            Some(confirm_on) if *polls >= confirm_on => {
                Ok(NodeResponse::success(json!({ "Hash": tx_hash })))
            }
            _ => Ok(NodeResponse::failure(44001, "UNKNOWN TRANSACTION")),
        }
    }

    async fn get_storage(&self, code_hash: &str, key_hex: &str) -> ClientResult<NodeResponse> {
        let mut state = self.state.lock().unwrap();
        state.events.push(Event::Storage {
            code_hash: code_hash.to_string(),
            key: key_hex.to_string(),
        });
        let value = state
            .storage
            .get(&(code_hash.to_string(), key_hex.to_string()))
            .cloned();
        Ok(NodeResponse::success(value.map(|v| json!(v)).unwrap_or(json!(null))))
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub fn signer(byte: u8) -> Signer {
    Signer::from_private_key(PrivateKey::from_slice(&[byte; 32]).unwrap()).unwrap()
}

pub fn bytecode() -> Arc<BytecodeMap> {
    let mut map = BytecodeMap::new();
    map.insert("SpokkzCoin", TOKEN_CODE.to_vec());
    map.insert("SpuulTokenization", vec![0x51, 0xc5, 0x6b]);
    Arc::new(map)
}

/// Unsigned transaction fields at fixed offsets.
pub fn tx_type(tx: &[u8]) -> u8 {
    tx[1]
}

pub fn gas_price(tx: &[u8]) -> u64 {
    u64::from_le_bytes(tx[6..14].try_into().unwrap())
}

pub fn gas_limit(tx: &[u8]) -> u64 {
    u64::from_le_bytes(tx[14..22].try_into().unwrap())
}

pub fn payer(tx: &[u8]) -> &[u8] {
    &tx[22..42]
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
