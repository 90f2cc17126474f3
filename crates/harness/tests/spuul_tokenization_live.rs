//! Deploys SpuulTokenization next to SpokkzCoin and moves tokens through it.
//! Needs the node named by `testNetwork`; see `spokkz_coin_live.rs`.

use std::path::PathBuf;

use num_bigint::{BigInt, BigUint};
use ont_cryptography::PrivateKey;
use ont_harness::contracts::{ContractClient, SpokkzCoin, SpuulTokenization};
use ont_harness::{CancellationToken, ConfigLoader, DeployedTransaction, Deployer, WaitOptions};
use ont_wallets::Signer;

fn project_dir() -> PathBuf {
    std::env::var_os("ONT_HARNESS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../.."))
}

async fn deploy(deployer: &Deployer, contract: &str, init: &str) -> DeployedTransaction {
    let deployment = deployer.deploy(contract, Some(init)).await.unwrap();
    let outcome = deployment
        .deployed(&WaitOptions::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(outcome.is_confirmed(), "{contract} not confirmed: {outcome:?}");
    deployment
}

#[tokio::test]
#[ignore = "needs a running Ontology node"]
async fn spuul_tokenization_holds_and_receives_tokens() {
    let loader = ConfigLoader::for_tests(project_dir()).unwrap();
    let deployer = Deployer::from_loader(&loader);
    let signer = loader.signer().clone();
    let owner = *signer.address();
    let other = Signer::from_private_key(PrivateKey::random()).unwrap();

    let token = deploy(&deployer, SpokkzCoin::CONTRACT, SpokkzCoin::INIT).await;
    let token = SpokkzCoin::new(ContractClient::from_deployment(&token));
    let tokenization = deploy(&deployer, SpuulTokenization::CONTRACT, SpuulTokenization::INIT).await;
    let tokenization = SpuulTokenization::new(ContractClient::from_deployment(&tokenization));
    let vault = *tokenization.address();

    assert!(tokenization.is_deployed().await.unwrap());
    assert_eq!(tokenization.owner().await.unwrap(), Some(owner));

    // only the owner may hand over ownership
    tokenization.transfer_ownership(other.address(), &other).await.ok();
    assert_eq!(tokenization.owner().await.unwrap(), Some(owner));
    tokenization.transfer_ownership(other.address(), &signer).await.unwrap();
    assert_eq!(tokenization.owner().await.unwrap(), Some(*other.address()));
    tokenization.transfer_ownership(&owner, &other).await.unwrap();
    assert_eq!(tokenization.owner().await.unwrap(), Some(owner));

    let amount = BigInt::from(100);
    token.transfer(&owner, &vault, &amount, &signer).await.unwrap();
    assert_eq!(token.balance_of(&vault).await.unwrap(), BigUint::from(100u32));

    token.transfer(&owner, other.address(), &amount, &signer).await.unwrap();
    token.approve(other.address(), &owner, &amount, &other).await.unwrap();
    assert_eq!(token.allowance(other.address(), &owner).await.unwrap(), BigUint::from(100u32));

    token
        .transfer_from(&owner, other.address(), &vault, &amount, &signer)
        .await
        .unwrap();
    assert_eq!(token.allowance(other.address(), &owner).await.unwrap(), BigUint::from(0u8));
    assert_eq!(token.balance_of(&vault).await.unwrap(), BigUint::from(200u32));
}
