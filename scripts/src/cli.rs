//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_nft_counter, deploy_rare_nft, deploy_whale_test, verify_status},
    constants::DEFAULT_ARTIFACTS_DIR,
    errors::ScriptError,
    types::{DeployConfig, Network},
    utils::setup_deployer,
    verify::ExplorerClient,
};

/// Deploy the Flash NFT bridge contracts and manage their verification
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer account
    #[arg(short, long, env = "DEPLOYER_PRIVATE_KEY")]
    pub priv_key: String,

    /// The network to deploy to
    #[arg(short, long, value_enum)]
    pub network: Network,

    /// API key for the block explorer verification service
    #[arg(long, env = "EXPLORER_API_KEY")]
    pub explorer_api_key: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Skip requesting source verification after deployment
    #[arg(long)]
    pub skip_verification: bool,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts and verification helpers
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the WhaleTest ONFT contract
    DeployWhaleTest,
    /// Deploy the proxy NFT counter contract
    DeployNftCounter,
    /// Deploy the four FlashRareNFT rarity tiers
    DeployRareNft,
    /// Check the status of a pending verification request
    VerifyStatus(VerifyStatusArgs),
}

impl Command {
    /// Run the command with the given configuration
    pub async fn run(
        self,
        config: DeployConfig,
        artifacts_dir: PathBuf,
        verify: bool,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployWhaleTest => {
                let deployer = setup_deployer(&config, artifacts_dir, verify)?;
                deploy_whale_test(&deployer).await
            }
            Command::DeployNftCounter => {
                let deployer = setup_deployer(&config, artifacts_dir, verify)?;
                deploy_nft_counter(&deployer).await
            }
            Command::DeployRareNft => {
                let deployer = setup_deployer(&config, artifacts_dir, verify)?;
                deploy_rare_nft(&deployer).await
            }
            Command::VerifyStatus(args) => {
                let verifier = ExplorerClient::new(config.network, config.explorer_api_key);
                verify_status(args, &verifier).await
            }
        }
    }
}

/// Check the status of a verification request submitted during a deployment
#[derive(Args)]
pub struct VerifyStatusArgs {
    /// The verification ID returned when the request was submitted
    #[arg(short = 'i', long)]
    pub verification_id: u64,

    /// Poll until the verification reaches a terminal status
    #[arg(short, long)]
    pub wait: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn parses_deploy_rare_nft() {
        let cli = Cli::parse_from([
            "scripts",
            "--priv-key",
            "0xdeadbeef",
            "--network",
            "testnet",
            "deploy-rare-nft",
        ]);

        assert!(matches!(cli.command, Command::DeployRareNft));
        assert!(!cli.skip_verification);
        assert_eq!(cli.artifacts_dir.to_str(), Some("artifacts"));
    }

    #[test]
    fn parses_verify_status() {
        let cli = Cli::parse_from([
            "scripts",
            "--priv-key",
            "0xdeadbeef",
            "--network",
            "mainnet",
            "verify-status",
            "--verification-id",
            "52064",
            "--wait",
        ]);

        match cli.command {
            Command::VerifyStatus(args) => {
                assert_eq!(args.verification_id, 52064);
                assert!(args.wait);
            }
            _ => panic!("expected verify-status"),
        }
    }
}
