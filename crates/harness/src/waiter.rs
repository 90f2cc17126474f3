//! Waiting for a transaction to be mined.
//!
//! The node is asked for the transaction every `check_interval`, starting one
//! interval after the call. The first answer with error code `0` confirms it.
//! After `ceil(timeout / check_interval)` unconfirmed answers the wait ends as
//! [`WaitOutcome::TimedOut`]; that is a normal result, not an error.

use std::time::Duration;

use ont_config::{DEFAULT_CHECK_INTERVAL_MS, DEFAULT_RECEIPT_TIMEOUT_MS};
use ont_rpc_client::{NetworkClient, NodeResponse};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::HarnessResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub check_interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_millis(DEFAULT_CHECK_INTERVAL_MS),
            timeout: Duration::from_millis(DEFAULT_RECEIPT_TIMEOUT_MS),
        }
    }
}

impl WaitOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn max_attempts(&self) -> u32 {
        let interval = self.check_interval.as_nanos();
        if interval == 0 {
            return 1;
        }
        let attempts = self.timeout.as_nanos().div_ceil(interval);
        u32::try_from(attempts).unwrap_or(u32::MAX).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaitOutcome {
    /// The node's answer for the mined transaction.
    Confirmed(NodeResponse),
    TimedOut { attempts: u32 },
    Cancelled,
}

impl WaitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, WaitOutcome::Confirmed(_))
    }

    pub fn receipt(&self) -> Option<&NodeResponse> {
        match self {
            WaitOutcome::Confirmed(receipt) => Some(receipt),
            _ => None,
        }
    }
}

/// Polls `client` until `tx_hash` is mined, the attempts run out, or
/// `cancel` fires. Transport failures abort the wait with an error.
pub async fn wait_for_transaction_receipt(
    client: &dyn NetworkClient,
    tx_hash: &str,
    options: &WaitOptions,
    cancel: &CancellationToken,
) -> HarnessResult<WaitOutcome> {
    let max_attempts = options.max_attempts();

    for attempt in 1..=max_attempts {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(target: "ont", tx_hash, attempt, "wait cancelled");
                return Ok(WaitOutcome::Cancelled);
            }
            _ = tokio::time::sleep(options.check_interval) => {}
        }

        let response = tokio::select! {
            _ = cancel.cancelled() => {
                debug!(target: "ont", tx_hash, attempt, "wait cancelled");
                return Ok(WaitOutcome::Cancelled);
            }
            response = client.get_raw_transaction_json(tx_hash) => response?,
        };

        if response.is_success() {
            info!(target: "ont", tx_hash, attempt, "transaction confirmed");
            return Ok(WaitOutcome::Confirmed(response));
        }
        debug!(
            target: "ont",
            tx_hash,
            attempt,
            max_attempts,
            error = response.error,
            desc = %response.desc,
            "transaction not yet mined"
        );
    }

    warn!(
        target: "ont",
        tx_hash,
        attempts = max_attempts,
        timeout_ms = u64::try_from(options.timeout.as_millis()).unwrap_or(u64::MAX),
        "gave up waiting for transaction"
    );
    Ok(WaitOutcome::TimedOut {
        attempts: max_attempts,
    })
}
