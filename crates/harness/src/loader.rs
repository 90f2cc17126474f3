//! Everything a run needs, resolved once from `ontology.json`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ont_config::{NetworkOptions, OntologyConfig, WalletSource, DEFAULT_CONFIG_FILE};
use ont_rpc_client::{connect, NetworkClient};
use ont_wallets::{Signer, Wallet};
use tracing::info;

use crate::bytecode::BytecodeMap;
use crate::error::HarnessResult;

/// Bytecode, node client and signing identity for one network mode.
///
/// Construction reads the bytecode and unlocks the wallet before any client
/// is used, so a bad password or missing wallet fails here rather than
/// halfway through a deployment.
pub struct ConfigLoader {
    mode: String,
    working_directory: PathBuf,
    network: NetworkOptions,
    bytecode: Arc<BytecodeMap>,
    client: Arc<dyn NetworkClient>,
    signer: Signer,
}

impl ConfigLoader {
    pub fn new(
        options: &OntologyConfig,
        mode: &str,
        working_directory: impl Into<PathBuf>,
    ) -> HarnessResult<Self> {
        let network = options.network(mode)?;
        Self::build(options, mode, working_directory.into(), |network| {
            Ok(connect(network.method, network.host.clone())?)
        })
        .map(|loader| {
            info!(
                target: "ont",
                mode,
                method = %network.method,
                host = %network.host,
                contracts = loader.bytecode.len(),
                signer = %loader.signer.address(),
                "configuration loaded"
            );
            loader
        })
    }

    /// Like [`ConfigLoader::new`] but talks to `client` instead of the
    /// configured host.
    pub fn with_client(
        options: &OntologyConfig,
        mode: &str,
        working_directory: impl Into<PathBuf>,
        client: Arc<dyn NetworkClient>,
    ) -> HarnessResult<Self> {
        Self::build(options, mode, working_directory.into(), |_| Ok(client))
    }

    /// Loads `ontology.json` from `working_directory` and uses its
    /// `testNetwork` mode.
    pub fn for_tests(working_directory: impl AsRef<Path>) -> HarnessResult<Self> {
        let working_directory = working_directory.as_ref();
        let options = OntologyConfig::load(working_directory.join(DEFAULT_CONFIG_FILE))?;
        let mode = options.test_mode()?.to_string();
        Self::new(&options, &mode, working_directory)
    }

    fn build(
        options: &OntologyConfig,
        mode: &str,
        working_directory: PathBuf,
        make_client: impl FnOnce(&NetworkOptions) -> HarnessResult<Arc<dyn NetworkClient>>,
    ) -> HarnessResult<Self> {
        let network = options.network(mode)?.clone();
        let bytecode = BytecodeMap::load(&working_directory, &options.avm_files)?;
        let signer = load_signer(&network.wallet, &working_directory)?;
        let client = make_client(&network)?;

        Ok(Self {
            mode: mode.to_string(),
            working_directory,
            network,
            bytecode: Arc::new(bytecode),
            client,
            signer,
        })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn network(&self) -> &NetworkOptions {
        &self.network
    }

    pub fn bytecode(&self) -> &Arc<BytecodeMap> {
        &self.bytecode
    }

    pub fn client(&self) -> &Arc<dyn NetworkClient> {
        &self.client
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("mode", &self.mode)
            .field("working_directory", &self.working_directory)
            .field("method", &self.network.method)
            .field("endpoint", &self.client.endpoint().as_str())
            .field("contracts", &self.bytecode.len())
            .field("signer", &self.signer.address().to_base58())
            .finish_non_exhaustive()
    }
}

fn load_signer(source: &WalletSource, working_directory: &Path) -> HarnessResult<Signer> {
    let signer = match source {
        WalletSource::Inline {
            address,
            private_key,
        } => Signer::from_inline(address, private_key)?,
        WalletSource::File { file, password } => {
            Wallet::from_file(working_directory.join(file))?.unlock(password)?
        }
    };
    Ok(signer)
}
