//! Reading compiled contract artifacts from the build system's output

use std::{fs, path::PathBuf};

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::errors::ScriptError;

/// A compiled contract artifact, as emitted by the build system
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Name of the contract
    pub contract_name: String,
    /// Path of the source file the contract was compiled from
    pub source_name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl Artifact {
    /// The fully-qualified source path of the contract,
    /// e.g. `contracts/ProxyNftCounter.sol:ProxyNftCounter`
    pub fn source_path(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }
}

/// Looks up compiled artifacts by contract name in the build output directory
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    /// The directory containing the compiled artifacts
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store reading from the given artifacts directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Load the artifact for the given contract name
    pub fn load(&self, contract: &str) -> Result<Artifact, ScriptError> {
        let path = self.dir.join(format!("{contract}.json"));
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactNotFound(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}
