//! Compiled contracts found on disk, keyed by file stem.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use ont_core::Address;
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeMap {
    contracts: BTreeMap<String, Vec<u8>>,
}

impl BytecodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every file matching `pattern` (relative to `working_directory`),
    /// skipping anything under a `node_modules` directory. When two files
    /// share a stem the later match wins.
    pub fn load(working_directory: &Path, pattern: &str) -> HarnessResult<Self> {
        let full_pattern = working_directory.join(pattern);
        let full_pattern = full_pattern.to_string_lossy();
        let entries = glob::glob(&full_pattern).map_err(|err| HarnessError::Pattern {
            pattern: full_pattern.to_string(),
            message: err.to_string(),
        })?;

        let mut map = Self::new();
        for entry in entries {
            let path = entry.map_err(|err| HarnessError::Io {
                path: err.path().to_path_buf(),
                source: err.into_error(),
            })?;
            if !path.is_file() || is_in_node_modules(&path) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let code = std::fs::read(&path).map_err(|source| HarnessError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(target: "ont", contract = name, path = %path.display(), bytes = code.len(), "loaded bytecode");
            map.insert(name, code);
        }
        Ok(map)
    }

    pub fn insert(&mut self, name: impl Into<String>, code: Vec<u8>) {
        self.contracts.insert(name.into(), code);
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.contracts.get(name).map(Vec::as_slice)
    }

    /// Bytecode as lowercase hex.
    pub fn hex(&self, name: &str) -> Option<String> {
        self.get(name).map(hex::encode)
    }

    /// Address the contract will have once deployed.
    pub fn address_of(&self, name: &str) -> Option<Address> {
        self.get(name).map(Address::from_vm_code)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.contracts
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

fn is_in_node_modules(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == "node_modules"))
}
