use std::ops::Deref;

use ont_core::{Address, Parameter};
use ont_wallets::Signer;

use super::ContractClient;
use crate::error::HarnessResult;
use crate::waiter::WaitOutcome;

/// Ownership-only contract; `deploy` may be called once, by the deployer.
#[derive(Debug, Clone)]
pub struct SpuulTokenization {
    contract: ContractClient,
}

impl SpuulTokenization {
    pub const CONTRACT: &'static str = "SpuulTokenization";
    pub const INIT: &'static str = "deploy";

    pub fn new(contract: ContractClient) -> Self {
        Self { contract }
    }

    pub async fn deploy(&self, caller: &Signer) -> HarnessResult<WaitOutcome> {
        self.invoke(Self::INIT, &[], caller).await
    }

    pub async fn transfer_ownership(
        &self,
        new_owner: &Address,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        self.invoke("transferOwnership", &[Parameter::address(new_owner)], caller)
            .await
    }
}

impl Deref for SpuulTokenization {
    type Target = ContractClient;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}
