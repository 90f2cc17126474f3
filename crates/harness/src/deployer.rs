//! Contract deployment.
//!
//! [`Deployer::deploy`] signs and submits a deploy transaction and returns
//! at once. The returned [`DeployedTransaction`] knows the contract's
//! address up front, since it is the hash of the code, and
//! [`DeployedTransaction::deployed`] waits for the deploy and for the
//! optional initializer call that follows it.

use std::sync::Arc;

use ont_config::{DEPLOY_GAS_LIMIT, DEPLOY_GAS_PRICE, INIT_GAS_PRICE, INVOKE_GAS_LIMIT};
use ont_core::{transaction_builder, Address, ContractMetadata};
use ont_rpc_client::NetworkClient;
use ont_wallets::Signer;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::bytecode::BytecodeMap;
use crate::error::{HarnessError, HarnessResult};
use crate::loader::ConfigLoader;
use crate::submit::sign_and_submit;
use crate::waiter::{wait_for_transaction_receipt, WaitOptions, WaitOutcome};

pub struct Deployer {
    client: Arc<dyn NetworkClient>,
    bytecode: Arc<BytecodeMap>,
    signer: Signer,
}

impl Deployer {
    pub fn new(client: Arc<dyn NetworkClient>, bytecode: Arc<BytecodeMap>, signer: Signer) -> Self {
        Self {
            client,
            bytecode,
            signer,
        }
    }

    pub fn from_loader(loader: &ConfigLoader) -> Self {
        Self::new(
            loader.client().clone(),
            loader.bytecode().clone(),
            loader.signer().clone(),
        )
    }

    pub fn client(&self) -> &Arc<dyn NetworkClient> {
        &self.client
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub fn bytecode(&self) -> &BytecodeMap {
        &self.bytecode
    }

    /// Submits the deploy transaction for `contract_name`. `init_func`, when
    /// given, is called with no arguments once the deploy is mined.
    pub async fn deploy(
        &self,
        contract_name: &str,
        init_func: Option<&str>,
    ) -> HarnessResult<DeployedTransaction> {
        let code = self
            .bytecode
            .get(contract_name)
            .ok_or_else(|| HarnessError::UnknownContract(contract_name.to_string()))?;

        let tx = transaction_builder::make_deploy_code_transaction(
            code,
            ContractMetadata::default(),
            true,
            DEPLOY_GAS_PRICE,
            DEPLOY_GAS_LIMIT,
            *self.signer.address(),
        );
        let tx_hash = sign_and_submit(self.client.as_ref(), tx, self.signer.private_key()).await?;

        let address = Address::from_vm_code(code);
        info!(
            target: "ont",
            contract = contract_name,
            code_hash = %address.to_code_hash(),
            tx_hash = %tx_hash,
            "deploy transaction submitted"
        );

        Ok(DeployedTransaction {
            contract_name: contract_name.to_string(),
            address,
            tx_hash,
            init_func: init_func.map(str::to_string),
            client: self.client.clone(),
            signer: self.signer.clone(),
        })
    }
}

/// A submitted deployment.
pub struct DeployedTransaction {
    contract_name: String,
    address: Address,
    tx_hash: String,
    init_func: Option<String>,
    client: Arc<dyn NetworkClient>,
    signer: Signer,
}

impl DeployedTransaction {
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Reversed-hex address, as the storage API expects.
    pub fn code_hash(&self) -> String {
        self.address.to_code_hash()
    }

    /// Hash of the deploy transaction.
    pub fn tx_hash(&self) -> &str {
        &self.tx_hash
    }

    pub fn init_func(&self) -> Option<&str> {
        self.init_func.as_deref()
    }

    pub fn client(&self) -> &Arc<dyn NetworkClient> {
        &self.client
    }

    /// Waits for the deploy, then submits and waits for the initializer if
    /// there is one. Returns the outcome of the last wait; the initializer is
    /// only sent after a confirmed deploy.
    pub async fn deployed(
        &self,
        options: &WaitOptions,
        cancel: &CancellationToken,
    ) -> HarnessResult<WaitOutcome> {
        let deploy_outcome =
            wait_for_transaction_receipt(self.client.as_ref(), &self.tx_hash, options, cancel)
                .await?;

        let Some(init_func) = self.init_func.as_deref() else {
            return Ok(deploy_outcome);
        };
        if !deploy_outcome.is_confirmed() {
            warn!(
                target: "ont",
                contract = %self.contract_name,
                init_func,
                outcome = ?deploy_outcome,
                "deploy not confirmed, skipping initializer"
            );
            return Ok(deploy_outcome);
        }

        let tx = transaction_builder::make_invoke_transaction(
            init_func,
            &[],
            &self.address,
            INIT_GAS_PRICE,
            INVOKE_GAS_LIMIT,
            *self.signer.address(),
        );
        let init_hash =
            sign_and_submit(self.client.as_ref(), tx, self.signer.private_key()).await?;
        info!(target: "ont", contract = %self.contract_name, init_func, tx_hash = %init_hash, "initializer submitted");

        wait_for_transaction_receipt(self.client.as_ref(), &init_hash, options, cancel).await
    }
}

impl std::fmt::Debug for DeployedTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployedTransaction")
            .field("contract_name", &self.contract_name)
            .field("address", &self.address)
            .field("tx_hash", &self.tx_hash)
            .field("init_func", &self.init_func)
            .field("endpoint", &self.client.endpoint().as_str())
            .finish()
    }
}
