//! Ontology Harness Configuration
//!
//! Types for `ontology.json`: where compiled contracts live and, per named
//! network mode, which node to talk to and which wallet pays.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "ontology.json";

/// Glob for compiled contracts when `avmFiles` is omitted
pub const DEFAULT_AVM_FILES: &str = "contracts/**/*.avm";

/// Poller defaults
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_RECEIPT_TIMEOUT_MS: u64 = 60_000;
/// Receipt timeout for contract calls made from test suites
pub const INVOKE_RECEIPT_TIMEOUT_MS: u64 = 5_000;

/// Gas settings used by the deployer
pub const DEPLOY_GAS_PRICE: u64 = 0;
pub const DEPLOY_GAS_LIMIT: u64 = 20_400_000;
pub const INIT_GAS_PRICE: u64 = 500;
pub const INVOKE_GAS_PRICE: u64 = 0;
pub const INVOKE_GAS_LIMIT: u64 = 20_000;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown network mode '{0}'")]
    UnknownMode(String),

    #[error("no mode given and config has no testNetwork")]
    NoTestNetwork,

    #[error("unknown network method '{0}', expected rpc, rest or websocket")]
    UnknownMethod(String),
}

/// Transport used to reach a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMethod {
    Rpc,
    Rest,
    Websocket,
}

impl fmt::Display for NetworkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMethod::Rpc => write!(f, "rpc"),
            NetworkMethod::Rest => write!(f, "rest"),
            NetworkMethod::Websocket => write!(f, "websocket"),
        }
    }
}

impl FromStr for NetworkMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rpc" => Ok(NetworkMethod::Rpc),
            "rest" => Ok(NetworkMethod::Rest),
            "websocket" | "ws" => Ok(NetworkMethod::Websocket),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

/// Where the signing identity comes from
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalletSource {
    Inline {
        address: String,
        #[serde(rename = "privateKey")]
        private_key: String,
    },
    File {
        /// Relative to the working directory.
        file: PathBuf,
        password: String,
    },
}

impl fmt::Debug for WalletSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletSource::Inline { address, .. } => f
                .debug_struct("Inline")
                .field("address", address)
                .field("private_key", &"***")
                .finish(),
            WalletSource::File { file, .. } => f
                .debug_struct("File")
                .field("file", file)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// One named network mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOptions {
    pub method: NetworkMethod,
    pub host: Url,
    pub wallet: WalletSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyConfig {
    #[serde(default = "default_avm_files")]
    pub avm_files: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_network: Option<String>,
    pub network: BTreeMap<String, NetworkOptions>,
}

fn default_avm_files() -> String {
    DEFAULT_AVM_FILES.to_string()
}

impl OntologyConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn network(&self, mode: &str) -> ConfigResult<&NetworkOptions> {
        self.network
            .get(mode)
            .ok_or_else(|| ConfigError::UnknownMode(mode.to_string()))
    }

    /// Mode the test suites run against.
    pub fn test_mode(&self) -> ConfigResult<&str> {
        self.test_network.as_deref().ok_or(ConfigError::NoTestNetwork)
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.network.keys().map(String::as_str)
    }
}
