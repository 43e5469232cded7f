//! The deployment invoker: forwards a contract and its constructor arguments
//! to the deployment backend, then fires best-effort source verification

use std::sync::Arc;

use alloy::{
    network::TransactionBuilder,
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{utils::format_ether, Address, Bytes, U256};
use async_trait::async_trait;
use tracing::info;

use crate::{
    artifacts::{Artifact, ArtifactStore},
    errors::ScriptError,
    types::{DeploymentRequest, DeploymentResult},
    utils::encode_constructor_args,
    verify::{PendingVerification, VerificationRequest, VerifyBackend},
};

/// The deployment side of the external service: submits the deployment
/// transaction for a compiled artifact and reports the deployed address
#[async_trait]
pub trait DeployBackend: Send + Sync {
    /// Deploy the given artifact with the request's constructor arguments,
    /// waiting for the transaction to be mined.
    ///
    /// The request is handed over exactly as supplied by the driver; any
    /// transaction failure propagates to the caller and no retry is made.
    async fn deploy(
        &self,
        artifact: &Artifact,
        request: &DeploymentRequest,
    ) -> Result<Address, ScriptError>;
}

/// A [`DeployBackend`] submitting deployment transactions over JSON-RPC
pub struct RpcDeployBackend {
    /// The provider used to sign and submit transactions.
    ///
    /// Nonce, gas, and chain ID management live entirely in the provider's
    /// filler stack.
    provider: DynProvider,
}

impl RpcDeployBackend {
    /// Create a backend over the given provider
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl DeployBackend for RpcDeployBackend {
    async fn deploy(
        &self,
        artifact: &Artifact,
        request: &DeploymentRequest,
    ) -> Result<Address, ScriptError> {
        let encoded_args = encode_constructor_args(&artifact.abi, &request.constructor_args)?;
        let init_code: Bytes = artifact.bytecode.iter().copied().chain(encoded_args).collect();

        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let gas = self
            .provider
            .estimate_gas(tx.clone())
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        let gas_price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!(
            "Estimated deployment cost: {} ETH",
            format_ether(U256::from(gas) * U256::from(gas_price))
        );

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        receipt.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(
                "deployment receipt carries no contract address".to_string(),
            )
        })
    }
}

/// The deployment invoker: resolves artifacts, encodes constructor
/// arguments, and drives the deployment and verification backends
pub struct ContractDeployer<B, V> {
    /// The store resolving contract names to compiled artifacts
    artifacts: ArtifactStore,
    /// The deployment backend
    backend: Arc<B>,
    /// The verification backend, when verification is enabled
    verifier: Option<Arc<V>>,
}

impl<B: DeployBackend, V: VerifyBackend + 'static> ContractDeployer<B, V> {
    /// Create a deployer over the given artifact store and backends
    pub fn new(artifacts: ArtifactStore, backend: Arc<B>, verifier: Option<Arc<V>>) -> Self {
        Self {
            artifacts,
            backend,
            verifier,
        }
    }

    /// Deploy `contract` with the given constructor arguments.
    ///
    /// The backend is called exactly once per invocation. On success the
    /// deployed address is reported and, when a verifier is configured, a
    /// detached verification submission is fired; its outcome never affects
    /// the returned result.
    pub async fn deploy(
        &self,
        contract: &str,
        constructor_args: Vec<DynSolValue>,
    ) -> Result<DeploymentResult, ScriptError> {
        println!("Starting deployment process of \"{contract}\"...");

        let artifact = self.artifacts.load(contract)?;
        let encoded_constructor_args =
            encode_constructor_args(&artifact.abi, &constructor_args)?;

        let request = DeploymentRequest {
            contract: contract.to_string(),
            constructor_args,
        };
        let address = self.backend.deploy(&artifact, &request).await?;

        let source_path = artifact.source_path();
        println!("\"{contract}\" was successfully deployed:");
        println!(" - Contract address: {address}");
        println!(" - Contract source: {source_path}");
        println!(" - Encoded constructor arguments: {encoded_constructor_args}");

        let verification = self.verifier.as_ref().map(|verifier| {
            PendingVerification::spawn(
                Arc::clone(verifier),
                VerificationRequest {
                    contract_address: address,
                    contract_name: source_path.clone(),
                    constructor_arguments: encoded_constructor_args.clone(),
                },
            )
        });

        Ok(DeploymentResult {
            address,
            source_path,
            encoded_constructor_args,
            verification,
        })
    }
}
