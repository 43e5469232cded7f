//! Constants used in the deploy scripts

use alloy_primitives::{address, Address};

/// The JSON-RPC endpoint of zkSync Era mainnet
pub const ZKSYNC_MAINNET_RPC_URL: &str = "https://mainnet.era.zksync.io";

/// The JSON-RPC endpoint of the zkSync Era Sepolia testnet
pub const ZKSYNC_TESTNET_RPC_URL: &str = "https://sepolia.era.zksync.dev";

/// The contract verification API of the mainnet block explorer
pub const ZKSYNC_MAINNET_EXPLORER_API_URL: &str =
    "https://zksync2-mainnet-explorer.zksync.io/contract_verification";

/// The contract verification API of the testnet block explorer
pub const ZKSYNC_TESTNET_EXPLORER_API_URL: &str =
    "https://explorer.sepolia.era.zksync.dev/contract_verification";

/// The default directory containing the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The artifact name of the WhaleTest ONFT contract
pub const WHALE_TEST_CONTRACT: &str = "WhaleTest";

/// The artifact name of the proxy NFT counter contract
pub const PROXY_NFT_COUNTER_CONTRACT: &str = "ProxyNftCounter";

/// The artifact name of the rare NFT contract
pub const FLASH_RARE_NFT_CONTRACT: &str = "FlashRareNFT";

/// The LayerZero endpoint the bridge contracts are wired to
pub const LAYER_ZERO_ENDPOINT: Address = address!("3c2269811836af69497E5F486A85D7316753cf62");

/// The proxy NFT counter instance the rare NFT contracts consult
pub const NFT_COUNTER_ADDRESS: Address = address!("3c2269811836af69497E5F486A85D7316753cf62");

/// Minimum gas retained when transferring the WhaleTest ONFT cross-chain
pub const WHALE_TEST_MIN_GAS_TO_TRANSFER: u64 = 40_000;

/// The first token ID mintable on the WhaleTest contract
pub const WHALE_TEST_START_MINT_ID: u64 = 1;

/// The last token ID mintable on the WhaleTest contract
pub const WHALE_TEST_END_MINT_ID: u64 = 1_000_000;

/// Minimum gas retained when transferring a rare NFT cross-chain
pub const RARE_NFT_MIN_GAS_TO_TRANSFER: u64 = 100_000;

/// The first token ID mintable on each rare NFT contract
pub const RARE_NFT_START_MINT_ID: u64 = 0;

/// The last token ID mintable on each rare NFT contract
pub const RARE_NFT_END_MINT_ID: u64 = 100;

/// Minimal counter readings unlocking each rare NFT tier
pub const RARE_NFT_MINIMAL_COUNT_AMOUNTS: [u64; 4] = [5, 10, 15, 20];

/// Metadata base URIs for each rare NFT tier
pub const RARE_NFT_TOKEN_URIS: [&str; 4] = [
    "https://ipfs/QmX1gTFabPZx8AtmHk3JAr1vNXJLebHmSWx3bMLePXTTnC/",
    "https://ipfs/QmX1gTFabPZx8AtmHk3JAr1vNXJLebHmSWx3bMLePXTTnC/",
    "https://ipfs/QmX1gTFabPZx8AtmHk3JAr1vNXJLebHmSWx3bMLePXTTnC/",
    "https://ipfs/QmX1gTFabPZx8AtmHk3JAr1vNXJLebHmSWx3bMLePXTTnC/",
];

/// Seconds between status polls in `verify-status --wait`
pub const VERIFICATION_POLL_INTERVAL_SECS: u64 = 5;
