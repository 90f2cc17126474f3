//! Deployment scripts.
//!
//! A migration is a TOML file listing contracts to deploy, in order:
//!
//! ```toml
//! [[deploy]]
//! contract = "SpokkzCoin"
//! init = "Deploy"
//! ```
//!
//! Files in the migrations directory run one after another in filename
//! order, and so do the steps inside each file.

use std::path::{Path, PathBuf};

use ont_core::Address;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::deployer::Deployer;
use crate::error::{HarnessError, HarnessResult};
use crate::waiter::{WaitOptions, WaitOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Migration {
    #[serde(default)]
    pub deploy: Vec<MigrationStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationStep {
    pub contract: String,
    /// Function called with no arguments once the deploy is mined.
    #[serde(default)]
    pub init: Option<String>,
}

/// What one deploy step produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentReport {
    pub contract: String,
    pub address: Address,
    pub code_hash: String,
    pub outcome: WaitOutcome,
}

impl Migration {
    pub fn load(path: &Path) -> HarnessResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|err| HarnessError::Migration {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// `*.toml` files directly inside `dir`, sorted by name. A missing
    /// directory has no migrations.
    pub fn discover(dir: &Path) -> HarnessResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let pattern = dir.join("*.toml");
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern).map_err(|err| HarnessError::Pattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        let mut paths = entries
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| HarnessError::Io {
                path: err.path().to_path_buf(),
                source: err.into_error(),
            })?;
        paths.sort();
        Ok(paths)
    }

    pub async fn run(
        &self,
        deployer: &Deployer,
        options: &WaitOptions,
        cancel: &CancellationToken,
    ) -> HarnessResult<Vec<DeploymentReport>> {
        let mut reports = Vec::with_capacity(self.deploy.len());
        for step in &self.deploy {
            let deployment = deployer.deploy(&step.contract, step.init.as_deref()).await?;
            let outcome = deployment.deployed(options, cancel).await?;

            match &outcome {
                WaitOutcome::Confirmed(_) => info!(
                    target: "ont",
                    contract = %step.contract,
                    code_hash = %deployment.code_hash(),
                    address = %deployment.address(),
                    "contract deployed"
                ),
                other => warn!(
                    target: "ont",
                    contract = %step.contract,
                    code_hash = %deployment.code_hash(),
                    outcome = ?other,
                    "contract deployment not confirmed"
                ),
            }

            let cancelled = outcome == WaitOutcome::Cancelled;
            reports.push(DeploymentReport {
                contract: step.contract.clone(),
                address: *deployment.address(),
                code_hash: deployment.code_hash(),
                outcome,
            });
            if cancelled {
                break;
            }
        }
        Ok(reports)
    }
}

/// Runs every migration in `dir`. Stops early if `cancel` fires.
pub async fn run_migrations(
    deployer: &Deployer,
    dir: &Path,
    options: &WaitOptions,
    cancel: &CancellationToken,
) -> HarnessResult<Vec<DeploymentReport>> {
    let mut reports = Vec::new();
    for path in Migration::discover(dir)? {
        if cancel.is_cancelled() {
            break;
        }
        info!(target: "ont", migration = %path.display(), "running migration");
        let migration = Migration::load(&path)?;
        reports.extend(migration.run(deployer, options, cancel).await?);
    }
    Ok(reports)
}
