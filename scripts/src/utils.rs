//! Utilities for the deploy scripts

use std::{path::PathBuf, sync::Arc};

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    deployer::{ContractDeployer, RpcDeployBackend},
    errors::ScriptError,
    types::DeployConfig,
    verify::ExplorerClient,
};

/// Construct a deployer wired to the network and account in `config`,
/// reading artifacts from `artifacts_dir`.
///
/// A verifier is only attached when `verify` is set; without one,
/// deployments complete without any verification submission.
pub fn setup_deployer(
    config: &DeployConfig,
    artifacts_dir: PathBuf,
    verify: bool,
) -> Result<ContractDeployer<RpcDeployBackend, ExplorerClient>, ScriptError> {
    let signer: PrivateKeySigner = config
        .priv_key
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;

    let rpc_url = Url::parse(config.network.rpc_url())
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid RPC URL: {e}")))?;

    info!("Deploying to {} via {}", config.network, config.network.rpc_url());
    let provider = ProviderBuilder::new().wallet(signer).connect_http(rpc_url);

    let backend = Arc::new(RpcDeployBackend::new(DynProvider::new(provider)));
    let verifier = verify.then(|| {
        Arc::new(ExplorerClient::new(
            config.network,
            config.explorer_api_key.clone(),
        ))
    });

    Ok(ContractDeployer::new(
        ArtifactStore::new(artifacts_dir),
        backend,
        verifier,
    ))
}

/// ABI-encode constructor arguments against the artifact's ABI.
///
/// Arity and type correctness of the arguments are the caller's
/// responsibility; a mismatch surfaces here as an encoding error.
pub fn encode_constructor_args(
    abi: &JsonAbi,
    args: &[DynSolValue],
) -> Result<Bytes, ScriptError> {
    match abi.constructor() {
        Some(constructor) => constructor
            .abi_encode_input(args)
            .map(Into::into)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string())),
        None if args.is_empty() => Ok(Bytes::new()),
        None => Err(ScriptError::CalldataConstruction(
            "constructor is not defined in the ABI".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use alloy_dyn_abi::DynSolValue;
    use alloy_json_abi::JsonAbi;
    use alloy_primitives::{Bytes, U256};

    use super::encode_constructor_args;
    use crate::{
        constants::{LAYER_ZERO_ENDPOINT, NFT_COUNTER_ADDRESS},
        errors::ScriptError,
    };

    /// The FlashRareNFT constructor ABI
    const RARE_NFT_ABI: &str = r#"[{
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [
            {"name": "_minGasToTransfer", "type": "uint256"},
            {"name": "_layerZeroEndpoint", "type": "address"},
            {"name": "_startMintId", "type": "uint256"},
            {"name": "_endMintId", "type": "uint256"},
            {"name": "_counter", "type": "address"},
            {"name": "_minimalCountAmount", "type": "uint256"},
            {"name": "_rareUri", "type": "string"}
        ]
    }]"#;

    /// The encoded constructor blob observed when deploying the first
    /// FlashRareNFT rarity tier
    const RARE_NFT_ENCODED_ARGS: &str = concat!(
        "0x",
        "00000000000000000000000000000000000000000000000000000000000186a0",
        "0000000000000000000000003c2269811836af69497e5f486a85d7316753cf62",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000064",
        "0000000000000000000000003c2269811836af69497e5f486a85d7316753cf62",
        "0000000000000000000000000000000000000000000000000000000000000005",
        "00000000000000000000000000000000000000000000000000000000000000e0",
        "000000000000000000000000000000000000000000000000000000000000003c",
        "68747470733a2f2f697066732f516d58316754466162505a783841746d486b33",
        "4a417231764e584a4c6562486d53577833624d4c65505854546e432f00000000",
    );

    #[test]
    fn encodes_rare_nft_constructor_args() {
        let abi: JsonAbi = serde_json::from_str(RARE_NFT_ABI).unwrap();
        let args = vec![
            DynSolValue::Uint(U256::from(100_000u64), 256),
            DynSolValue::Address(LAYER_ZERO_ENDPOINT),
            DynSolValue::Uint(U256::ZERO, 256),
            DynSolValue::Uint(U256::from(100u64), 256),
            DynSolValue::Address(NFT_COUNTER_ADDRESS),
            DynSolValue::Uint(U256::from(5u64), 256),
            DynSolValue::String(
                "https://ipfs/QmX1gTFabPZx8AtmHk3JAr1vNXJLebHmSWx3bMLePXTTnC/".to_string(),
            ),
        ];

        let encoded = encode_constructor_args(&abi, &args).unwrap();
        assert_eq!(encoded, RARE_NFT_ENCODED_ARGS.parse::<Bytes>().unwrap());
    }

    #[test]
    fn empty_args_without_constructor_encode_to_empty() {
        let abi: JsonAbi = serde_json::from_str("[]").unwrap();
        assert!(encode_constructor_args(&abi, &[]).unwrap().is_empty());
    }

    #[test]
    fn args_without_constructor_are_rejected() {
        let abi: JsonAbi = serde_json::from_str("[]").unwrap();
        let err = encode_constructor_args(&abi, &[DynSolValue::Uint(U256::from(1u64), 256)])
            .unwrap_err();
        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
    }
}
