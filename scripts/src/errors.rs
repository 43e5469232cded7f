//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error locating a compiled contract artifact
    ArtifactNotFound(String),
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error constructing the constructor calldata
    CalldataConstruction(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error submitting a contract verification request
    VerificationSubmission(String),
    /// Error fetching the status of a verification request
    VerificationStatus(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactNotFound(s) => write!(f, "artifact not found: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => {
                write!(f, "error initializing client: {}", s)
            }
            ScriptError::CalldataConstruction(s) => {
                write!(f, "error constructing calldata: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::VerificationSubmission(s) => {
                write!(f, "error submitting verification request: {}", s)
            }
            ScriptError::VerificationStatus(s) => {
                write!(f, "error fetching verification status: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
