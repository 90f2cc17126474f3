use ont_core::Transaction;
use ont_cryptography::PrivateKey;
use ont_rpc_client::NetworkClient;
use tracing::{debug, warn};

use crate::error::{HarnessError, HarnessResult};

/// Signs `tx` with `key`, submits it and returns its hash. The hash is
/// computed locally; a node-side rejection is an error.
pub(crate) async fn sign_and_submit(
    client: &dyn NetworkClient,
    mut tx: Transaction,
    key: &PrivateKey,
) -> HarnessResult<String> {
    tx.sign(key)?;
    let hash = tx.hash();

    let response = client.send_raw_transaction(&tx.to_hex()).await?;
    if !response.is_success() {
        warn!(target: "ont", tx_hash = %hash, code = response.error, desc = %response.desc, "transaction rejected");
        return Err(HarnessError::TransactionRejected {
            hash,
            code: response.error,
            desc: response.desc,
        });
    }

    debug!(target: "ont", tx_hash = %hash, node = %client.endpoint(), "transaction submitted");
    Ok(hash)
}
