//! Runs against the node named by `testNetwork` in the workspace
//! `ontology.json`. Set `ONT_HARNESS_DIR` to use another project directory.
//!
//! ```text
//! cargo test -p ont-harness --test spokkz_coin_live -- --ignored
//! ```

use std::path::PathBuf;

use num_bigint::{BigInt, BigUint};
use ont_cryptography::PrivateKey;
use ont_harness::contracts::{ContractClient, SpokkzCoin};
use ont_harness::{CancellationToken, ConfigLoader, Deployer, WaitOptions};
use ont_wallets::Signer;

fn project_dir() -> PathBuf {
    std::env::var_os("ONT_HARNESS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../.."))
}

fn random_account() -> Signer {
    Signer::from_private_key(PrivateKey::random()).unwrap()
}

async fn deployed_token(loader: &ConfigLoader) -> SpokkzCoin {
    let deployer = Deployer::from_loader(loader);
    let deployment = deployer
        .deploy(SpokkzCoin::CONTRACT, Some(SpokkzCoin::INIT))
        .await
        .unwrap();
    let outcome = deployment
        .deployed(&WaitOptions::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.is_confirmed(), "deployment not confirmed: {outcome:?}");
    SpokkzCoin::new(ContractClient::from_deployment(&deployment))
}

#[tokio::test]
#[ignore = "needs a running Ontology node"]
async fn spokkz_coin_lifecycle() {
    let loader = ConfigLoader::for_tests(project_dir()).unwrap();
    let deployer = loader.signer().clone();
    let owner = *deployer.address();
    let token = deployed_token(&loader).await;
    let other = random_account();
    let another = random_account();

    // deployed by the deployer, who owns the whole supply
    assert!(token.is_deployed().await.unwrap());
    assert_eq!(token.owner().await.unwrap(), Some(owner));
    let supply = token.total_supply().await.unwrap();
    assert_eq!(token.balance_of(&owner).await.unwrap(), supply);

    // transfers; calls the contract refuses are mined but change nothing
    token
        .transfer(&owner, other.address(), &BigInt::from(1000), &deployer)
        .await
        .unwrap();
    assert_eq!(token.balance_of(other.address()).await.unwrap(), BigUint::from(1000u32));

    token
        .transfer(&owner, another.address(), &BigInt::from(10), &other)
        .await
        .ok();
    assert_eq!(token.balance_of(another.address()).await.unwrap(), BigUint::from(0u8));

    let before = token.balance_of(other.address()).await.unwrap();
    token
        .transfer(other.address(), another.address(), &BigInt::from(-1), &other)
        .await
        .ok();
    assert_eq!(token.balance_of(other.address()).await.unwrap(), before);

    // burning is reserved to the owner and bounded by the supply
    let supply_before = token.total_supply().await.unwrap();
    token.burn(&BigInt::from(1000), &deployer).await.unwrap();
    assert_eq!(token.total_supply().await.unwrap() + 1000u32, supply_before);

    let supply_before = token.total_supply().await.unwrap();
    token.burn(&BigInt::from(1000), &other).await.ok();
    token.burn(&BigInt::from(-1), &deployer).await.ok();
    token
        .burn(&(BigInt::from(supply_before.clone()) + 1), &deployer)
        .await
        .ok();
    assert_eq!(token.total_supply().await.unwrap(), supply_before);

    // allowances
    token
        .approve(&owner, other.address(), &BigInt::from(1000), &deployer)
        .await
        .unwrap();
    assert_eq!(token.allowance(&owner, other.address()).await.unwrap(), BigUint::from(1000u32));

    token
        .approve(&owner, another.address(), &BigInt::from(1000), &other)
        .await
        .ok();
    assert_eq!(token.allowance(&owner, another.address()).await.unwrap(), BigUint::from(0u8));

    let owner_before = token.balance_of(&owner).await.unwrap();
    let another_before = token.balance_of(another.address()).await.unwrap();
    token
        .transfer_from(other.address(), &owner, another.address(), &BigInt::from(500), &other)
        .await
        .unwrap();
    assert_eq!(token.allowance(&owner, other.address()).await.unwrap(), BigUint::from(500u32));
    assert_eq!(token.balance_of(&owner).await.unwrap() + 500u32, owner_before);
    assert_eq!(token.balance_of(another.address()).await.unwrap(), another_before + 500u32);

    token
        .transfer_from(other.address(), &owner, another.address(), &BigInt::from(501), &other)
        .await
        .ok();
    assert_eq!(token.allowance(&owner, other.address()).await.unwrap(), BigUint::from(500u32));

    // ownership
    token.transfer_ownership(other.address(), &another).await.ok();
    assert_eq!(token.owner().await.unwrap(), Some(owner));

    token.transfer_ownership(other.address(), &deployer).await.unwrap();
    assert_eq!(token.owner().await.unwrap(), Some(*other.address()));

    let supply_before = token.total_supply().await.unwrap();
    token.burn(&BigInt::from(1000), &other).await.unwrap();
    assert_eq!(token.total_supply().await.unwrap() + 1000u32, supply_before);

    token.transfer_ownership(&owner, &other).await.unwrap();
    assert_eq!(token.owner().await.unwrap(), Some(owner));
}
