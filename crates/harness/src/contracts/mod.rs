//! Typed clients for the deployed Spokkz contracts.
//!
//! Every state-changing call builds an invoke transaction, signs it with the
//! caller (who also pays), submits it and waits for it to be mined. Reads go
//! straight to contract storage.

mod payment_gateway;
mod spokkz_coin;
mod spuul_tokenization;

use std::sync::Arc;
use std::time::Duration;

use ont_config::{INVOKE_GAS_LIMIT, INVOKE_GAS_PRICE, INVOKE_RECEIPT_TIMEOUT_MS};
use ont_core::{transaction_builder, Address, Parameter};
use ont_rpc_client::NetworkClient;
use ont_wallets::Signer;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::deployer::DeployedTransaction;
use crate::error::{HarnessError, HarnessResult};
use crate::storage::{self, DEPLOYED_KEY, OWNER_KEY};
use crate::submit::sign_and_submit;
use crate::waiter::{wait_for_transaction_receipt, WaitOptions, WaitOutcome};

pub use payment_gateway::SpokkzPaymentGateway;
pub use spokkz_coin::SpokkzCoin;
pub use spuul_tokenization::SpuulTokenization;

/// Invocation and storage access for one deployed contract.
#[derive(Clone)]
pub struct ContractClient {
    client: Arc<dyn NetworkClient>,
    address: Address,
    wait_options: WaitOptions,
    cancel: CancellationToken,
}

impl ContractClient {
    pub fn new(client: Arc<dyn NetworkClient>, address: Address) -> Self {
        Self {
            client,
            address,
            wait_options: WaitOptions::with_timeout(Duration::from_millis(
                INVOKE_RECEIPT_TIMEOUT_MS,
            )),
            cancel: CancellationToken::new(),
        }
    }

    pub fn from_deployment(deployment: &DeployedTransaction) -> Self {
        Self::new(deployment.client().clone(), *deployment.address())
    }

    pub fn with_wait_options(mut self, options: WaitOptions) -> Self {
        self.wait_options = options;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn code_hash(&self) -> String {
        self.address.to_code_hash()
    }

    /// Calls `function` signed and paid for by `caller`, then waits for it.
    pub async fn invoke(
        &self,
        function: &str,
        params: &[Parameter],
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let tx = transaction_builder::make_invoke_transaction(
            function,
            params,
            &self.address,
            INVOKE_GAS_PRICE,
            INVOKE_GAS_LIMIT,
            *caller.address(),
        );
        let tx_hash = sign_and_submit(self.client.as_ref(), tx, caller.private_key()).await?;
        debug!(target: "ont", contract = %self.address, function, caller = %caller.address(), tx_hash = %tx_hash, "invoked");

        wait_for_transaction_receipt(self.client.as_ref(), &tx_hash, &self.wait_options, &self.cancel)
            .await
    }

    /// Bytes stored under `key_hex`, `None` if absent.
    pub async fn storage(&self, key_hex: &str) -> HarnessResult<Option<Vec<u8>>> {
        let response = self.client.get_storage(&self.code_hash(), key_hex).await?;
        storage::stored_bytes(key_hex, &response)
    }

    pub async fn is_deployed(&self) -> HarnessResult<bool> {
        let key = storage::storage_key(DEPLOYED_KEY, &[]);
        Ok(self.storage(&key).await?.is_some())
    }

    pub async fn owner(&self) -> HarnessResult<Option<Address>> {
        let key = storage::storage_key(OWNER_KEY, &[]);
        match self.storage(&key).await? {
            None => Ok(None),
            Some(bytes) => Address::from_slice(&bytes)
                .map(Some)
                .map_err(|err| HarnessError::InvalidStorage {
                    key,
                    message: err.to_string(),
                }),
        }
    }
}

impl std::fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("address", &self.address)
            .field("wait_options", &self.wait_options)
            .finish_non_exhaustive()
    }
}
