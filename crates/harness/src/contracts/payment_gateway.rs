use std::ops::Deref;

use num_bigint::{BigInt, BigUint};
use ont_core::{Address, Parameter};
use ont_wallets::Signer;

use super::ContractClient;
use crate::error::HarnessResult;
use crate::storage;
use crate::waiter::WaitOutcome;

/// Collects SPKZ payments keyed by order id.
#[derive(Debug, Clone)]
pub struct SpokkzPaymentGateway {
    contract: ContractClient,
}

impl SpokkzPaymentGateway {
    pub const CONTRACT: &'static str = "SpokkzPaymentGateway";
    pub const INIT: &'static str = "init";

    pub fn new(contract: ContractClient) -> Self {
        Self { contract }
    }

    pub async fn init(&self, caller: &Signer) -> HarnessResult<WaitOutcome> {
        self.invoke(Self::INIT, &[], caller).await
    }

    /// Pulls `amount` from `from` through the token allowance granted to
    /// `originator`, recording it under `order_id`.
    ///
    /// Sends the four arguments of the contract's `pay` function. The
    /// shipped gateway's dispatcher only accepts a two-element argument list
    /// and then reads indices 0, 1, 3 and 4, so against that build the call
    /// is mined but returns false and records nothing.
    pub async fn pay(
        &self,
        originator: &Address,
        from: &Address,
        amount: &BigInt,
        order_id: &[u8],
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [
            Parameter::address(originator),
            Parameter::address(from),
            Parameter::ByteArray(storage::encode_amount(amount)),
            Parameter::ByteArray(order_id.to_vec()),
        ];
        self.invoke("pay", &params, caller).await
    }

    pub async fn amount_paid(&self, order_id: &[u8]) -> HarnessResult<BigUint> {
        let key = storage::payment_key(order_id);
        Ok(storage::decode_amount(self.storage(&key).await?.as_deref()))
    }

    /// Approves the owner to withdraw `amount` of collected payments.
    pub async fn transfer_payments_received(
        &self,
        amount: &BigInt,
        caller: &Signer,
    ) -> HarnessResult<WaitOutcome> {
        let params = [Parameter::ByteArray(storage::encode_amount(amount))];
        self.invoke("transferPaymentsReceived", &params, caller).await
    }
}

impl Deref for SpokkzPaymentGateway {
    type Target = ContractClient;

    fn deref(&self) -> &Self::Target {
        &self.contract
    }
}
