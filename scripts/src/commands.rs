//! Implementations of the deploy script drivers.
//!
//! Each driver fixes a contract name and a literal constructor argument
//! list, then hands them to the deployer one instance at a time.

use std::time::Duration;

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::U256;
use tokio::time::sleep;
use tracing::info;

use crate::{
    cli::VerifyStatusArgs,
    constants::{
        FLASH_RARE_NFT_CONTRACT, LAYER_ZERO_ENDPOINT, NFT_COUNTER_ADDRESS,
        PROXY_NFT_COUNTER_CONTRACT, RARE_NFT_END_MINT_ID, RARE_NFT_MINIMAL_COUNT_AMOUNTS,
        RARE_NFT_MIN_GAS_TO_TRANSFER, RARE_NFT_START_MINT_ID, RARE_NFT_TOKEN_URIS,
        VERIFICATION_POLL_INTERVAL_SECS, WHALE_TEST_CONTRACT, WHALE_TEST_END_MINT_ID,
        WHALE_TEST_MIN_GAS_TO_TRANSFER, WHALE_TEST_START_MINT_ID,
    },
    deployer::{ContractDeployer, DeployBackend},
    errors::ScriptError,
    verify::{VerificationId, VerificationStatus, VerifyBackend},
};

/// Deploy the WhaleTest ONFT contract
pub async fn deploy_whale_test<B: DeployBackend, V: VerifyBackend + 'static>(
    deployer: &ContractDeployer<B, V>,
) -> Result<(), ScriptError> {
    let constructor_args = vec![
        DynSolValue::Uint(U256::from(WHALE_TEST_MIN_GAS_TO_TRANSFER), 256),
        DynSolValue::Address(LAYER_ZERO_ENDPOINT),
        DynSolValue::Uint(U256::from(WHALE_TEST_START_MINT_ID), 256),
        DynSolValue::Uint(U256::from(WHALE_TEST_END_MINT_ID), 256),
    ];

    let result = deployer.deploy(WHALE_TEST_CONTRACT, constructor_args).await?;
    if let Some(verification) = result.verification {
        verification.submitted().await;
    }

    Ok(())
}

/// Deploy the proxy NFT counter contract
pub async fn deploy_nft_counter<B: DeployBackend, V: VerifyBackend + 'static>(
    deployer: &ContractDeployer<B, V>,
) -> Result<(), ScriptError> {
    let result = deployer.deploy(PROXY_NFT_COUNTER_CONTRACT, Vec::new()).await?;
    if let Some(verification) = result.verification {
        verification.submitted().await;
    }

    Ok(())
}

/// Deploy the four FlashRareNFT rarity tiers.
///
/// Instances are deployed strictly one after another: each deployment and
/// its verification submission complete before the next is issued, so the
/// deployer account's nonce advances predictably.
pub async fn deploy_rare_nft<B: DeployBackend, V: VerifyBackend + 'static>(
    deployer: &ContractDeployer<B, V>,
) -> Result<(), ScriptError> {
    for (minimal_count, token_uri) in
        RARE_NFT_MINIMAL_COUNT_AMOUNTS.iter().zip(RARE_NFT_TOKEN_URIS)
    {
        let constructor_args = vec![
            DynSolValue::Uint(U256::from(RARE_NFT_MIN_GAS_TO_TRANSFER), 256),
            DynSolValue::Address(LAYER_ZERO_ENDPOINT),
            DynSolValue::Uint(U256::from(RARE_NFT_START_MINT_ID), 256),
            DynSolValue::Uint(U256::from(RARE_NFT_END_MINT_ID), 256),
            DynSolValue::Address(NFT_COUNTER_ADDRESS),
            DynSolValue::Uint(U256::from(*minimal_count), 256),
            DynSolValue::String(token_uri.to_string()),
        ];

        let result = deployer.deploy(FLASH_RARE_NFT_CONTRACT, constructor_args).await?;
        if let Some(verification) = result.verification {
            verification.submitted().await;
        }
    }

    Ok(())
}

/// Report the status of a verification request, optionally polling until it
/// reaches a terminal status.
///
/// The explorer's status is eventually consistent: a request reported as
/// pending here may already have completed by the next poll.
pub async fn verify_status<V: VerifyBackend>(
    args: VerifyStatusArgs,
    verifier: &V,
) -> Result<(), ScriptError> {
    let id = VerificationId(args.verification_id);

    loop {
        match verifier.status(id).await? {
            VerificationStatus::Successful => {
                println!("Contract successfully verified on the block explorer!");
                return Ok(());
            }
            VerificationStatus::Failed(reason) => {
                return Err(ScriptError::VerificationStatus(format!(
                    "verification request {id} failed: {}",
                    reason.unwrap_or_else(|| "no reason reported".to_string()),
                )));
            }
            status if args.wait => {
                info!("Verification request {id} is {status:?}; polling again...");
                sleep(Duration::from_secs(VERIFICATION_POLL_INTERVAL_SECS)).await;
            }
            _ => {
                println!(
                    "Verification request {id} is still pending; \
                     re-run with --wait to poll until completion."
                );
                return Ok(());
            }
        }
    }
}
