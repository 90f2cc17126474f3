use std::ops::Deref;

use num_bigint::{BigInt, BigUint};
use ont_core::{Address, Parameter};
use ont_wallets::Signer;

use super::ContractClient;
use crate::error::HarnessResult;
use crate::storage::{self, SUPPLY_KEY};
use crate::waiter::WaitOutcome;

/// The SPKZ token.
#[derive(Debug, Clone)]
pub struct SpokkzCoin {
    contract: ContractClient,
}

impl SpokkzCoin {
    /// Bytecode name.
    pub const CONTRACT: &'static str = "SpokkzCoin";
    /// Initializer run after deployment.
    pub const INIT: &'static str = "Deploy";

    pub fn new(contract: ContractClient) -> Self {
        Self { contract }
    }

    pub async fn total_supply(&self) -> HarnessResult<BigUint> {
        let key = storage::storage_key(SUPPLY_KEY, &[]);
        Ok(storage::decode_amount(self.storage(&key).await?.as_deref()))
    }

    pub async fn balance_of(&self, account: &Address) -> HarnessResult<BigUint> {
        let key = storage::balance_key(account);
        Ok(storage::decode_amount(self.storage(&key).await?.as_deref()))
    }

    pub async fn allowance(&self, from: &Address, to: &Address) -> HarnessResult<BigUint> {
        let key = storage::allowance_key(from, to);
        Ok(storage::decode_amount(self.storage(&key).await?.as_deref()))
    }

    pub async fn deploy(&self, caller: &Signer) -> HarnessResult<WaitOutcome> {
        self.invoke(Self::INIT, &[], caller).await
    }

    pub async fn transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: &BigInt,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [Parameter::address(from), Parameter::address(to), amount_param(amount)];
        self.invoke("Transfer", &params, caller).await
    }

    /// Moves `amount` from `from` to `to` out of what `from` approved for
    /// `originator`.
    pub async fn transfer_from(
        &self,
        originator: &Address,
        from: &Address,
        to: &Address,
        amount: &BigInt,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [
            Parameter::address(originator),
            Parameter::address(from),
            Parameter::address(to),
            amount_param(amount),
        ];
        self.invoke("TransferFrom", &params, caller).await
    }

    pub async fn approve(
        &self,
        from: &Address,
        to: &Address,
        amount: &BigInt,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [Parameter::address(from), Parameter::address(to), amount_param(amount)];
        self.invoke("Approve", &params, caller).await
    }

    /// Burns from the owner's balance. Only the owner may call it.
    pub async fn burn(&self, amount: &BigInt, caller: &Signer) -> HarnessResult<WaitOutcome> {
        self.invoke("Burn", &[amount_param(amount)], caller).await
    }

    pub async fn mint(
        &self,
        to: &Address,
        amount: &BigInt,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [Parameter::address(to), amount_param(amount)];
        self.invoke("Mint", &params, caller).await
    }

    pub async fn transfer_ownership(
        &self,
        new_owner: &Address,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        self.invoke("TransferOwnership", &[Parameter::address(new_owner)], caller)
            .await
    }
}

fn amount_param(amount: &BigInt) -> Parameter {
    Parameter::ByteArray(storage::encode_amount(amount))
}

impl Deref for SpokkzCoin {
    type Target = ContractClient;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}
