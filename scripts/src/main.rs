use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, types::DeployConfig};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        network,
        explorer_api_key,
        artifacts_dir,
        skip_verification,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let config = DeployConfig {
        network,
        priv_key,
        explorer_api_key,
    };

    command.run(config, artifacts_dir, !skip_verification).await
}
