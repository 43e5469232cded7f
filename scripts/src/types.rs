//! Type definitions used throughout the deploy scripts

use std::fmt::{self, Display};

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes};
use clap::ValueEnum;

use crate::{
    constants::{
        ZKSYNC_MAINNET_EXPLORER_API_URL, ZKSYNC_MAINNET_RPC_URL,
        ZKSYNC_TESTNET_EXPLORER_API_URL, ZKSYNC_TESTNET_RPC_URL,
    },
    verify::PendingVerification,
};

/// The networks a deploy script can target
#[derive(ValueEnum, Copy, Clone, Debug)]
pub enum Network {
    /// zkSync Era mainnet
    Mainnet,
    /// zkSync Era Sepolia testnet
    Testnet,
}

impl Network {
    /// The JSON-RPC endpoint of the network
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => ZKSYNC_MAINNET_RPC_URL,
            Network::Testnet => ZKSYNC_TESTNET_RPC_URL,
        }
    }

    /// The contract verification API of the network's block explorer
    pub fn explorer_api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => ZKSYNC_MAINNET_EXPLORER_API_URL,
            Network::Testnet => ZKSYNC_TESTNET_EXPLORER_API_URL,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "zksync-mainnet"),
            Network::Testnet => write!(f, "zksync-testnet"),
        }
    }
}

/// Configuration handed to the deploy machinery at construction time
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// The network to deploy to
    pub network: Network,
    /// Private key of the deployer account
    pub priv_key: String,
    /// API key for the block explorer verification service, if any
    pub explorer_api_key: Option<String>,
}

/// A single deployment as handed to the deployment backend
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentRequest {
    /// Name of the precompiled artifact to deploy
    pub contract: String,
    /// Ordered constructor arguments, exactly as supplied by the driver.
    ///
    /// Arity and types must match the target constructor; this is the
    /// caller's responsibility and is not validated here.
    pub constructor_args: Vec<DynSolValue>,
}

/// The outcome of a successful deployment
#[derive(Debug)]
pub struct DeploymentResult {
    /// The address the contract was deployed to
    pub address: Address,
    /// Source path of the deployed contract, e.g. `contracts/Foo.sol:Foo`
    pub source_path: String,
    /// The ABI-encoded constructor argument blob
    pub encoded_constructor_args: Bytes,
    /// Handle to the detached verification submission, if one was fired
    pub verification: Option<PendingVerification>,
}
