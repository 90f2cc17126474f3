use clap::Parser;
use std::path::{Path, PathBuf};

use ont_config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "ont-cli",
    version,
    about = "Deploy compiled AVM contracts to an Ontology node"
)]
pub struct CliArgs {
    /// Network mode from the config's `network` table; defaults to `testNetwork`
    #[arg(short = 'm', long = "mode", value_name = "NAME", env = "ONT_MODE")]
    pub mode: Option<String>,

    /// Run every migration script
    #[arg(long = "deploy")]
    pub deploy: bool,

    /// Print each compiled contract with its code hash and address
    #[arg(long = "list")]
    pub list: bool,

    /// Project config; its directory is the working directory
    #[arg(short = 'c', long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Migration scripts, relative to the working directory
    #[arg(long = "migrations", value_name = "DIR", default_value = "migrations")]
    pub migrations: PathBuf,
}

impl CliArgs {
    /// Directory that contract globs, wallet files and migrations resolve
    /// against.
    pub fn working_directory(&self) -> PathBuf {
        match self.config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn migrations_dir(&self) -> PathBuf {
        resolve(&self.working_directory(), &self.migrations)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
