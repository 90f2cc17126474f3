use std::path::Path;

use anyhow::{Context, Result};
use ont_config::OntologyConfig;
use ont_harness::{
    run_migrations, BytecodeMap, CancellationToken, ConfigLoader, Deployer, DeploymentReport,
    WaitOptions, WaitOutcome,
};
use tracing::info;

/// One line per contract: name, code hash, base58 address.
pub fn contract_listing(bytecode: &BytecodeMap) -> Vec<String> {
    bytecode
        .names()
        .filter_map(|name| {
            let address = bytecode.address_of(name)?;
            Some(format!(
                "{name}\t{}\t{}",
                address.to_code_hash(),
                address.to_base58()
            ))
        })
        .collect()
}

pub fn list(config: &OntologyConfig, working_directory: &Path) -> Result<Vec<String>> {
    let bytecode = BytecodeMap::load(working_directory, &config.avm_files)
        .with_context(|| format!("loading contracts matching '{}'", config.avm_files))?;
    Ok(contract_listing(&bytecode))
}

pub async fn deploy(
    loader: &ConfigLoader,
    migrations: &Path,
    cancel: &CancellationToken,
) -> Result<Vec<DeploymentReport>> {
    let deployer = Deployer::from_loader(loader);
    info!(target: "ont", migrations = %migrations.display(), "running migrations");
    run_migrations(&deployer, migrations, &WaitOptions::default(), cancel)
        .await
        .with_context(|| format!("running migrations in {}", migrations.display()))
}

pub fn describe(report: &DeploymentReport) -> String {
    let status = match &report.outcome {
        WaitOutcome::Confirmed(_) => "deployed".to_string(),
        WaitOutcome::TimedOut { attempts } => format!("not confirmed after {attempts} checks"),
        WaitOutcome::Cancelled => "cancelled".to_string(),
    };
    format!(
        "{}: {status}\n  contract hash : {}\n  address       : {}",
        report.contract, report.code_hash, report.address
    )
}
