use anyhow::{Context, Result};
use clap::Parser;
use ont_cli::{args::CliArgs, commands};
use ont_config::OntologyConfig;
use ont_harness::{CancellationToken, ConfigLoader};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let working_directory = args.working_directory();
    let config = OntologyConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    if args.list {
        for line in commands::list(&config, &working_directory)? {
            println!("{line}");
        }
        if !args.deploy {
            return Ok(());
        }
    }

    let mode = match &args.mode {
        Some(mode) => mode.clone(),
        None => config.test_mode()?.to_string(),
    };
    let loader = ConfigLoader::new(&config, &mode, &working_directory)
        .with_context(|| format!("preparing network mode '{mode}'"))?;

    if !args.deploy {
        info!(target: "ont", mode = %mode, "configuration valid; pass --deploy to run migrations");
        return Ok(());
    }

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    warn!(target: "ont", "interrupt received, cancelling pending waits");
                    cancel.cancel();
                }
                Err(err) => error!(target: "ont", error = %err, "failed to wait for interrupt signal"),
            }
        }
    });

    let reports = commands::deploy(&loader, &args.migrations_dir(), &cancel).await?;
    if reports.is_empty() {
        warn!(target: "ont", migrations = %args.migrations_dir().display(), "no contracts deployed");
    }
    for report in &reports {
        println!("{}", commands::describe(report));
    }
    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ont=info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}
