//! Constants for the account core
//!
//! This module contains all constants used throughout the account core.

// Native asset
pub const NATIVE_ASSET_ID: &str = "TN";
pub const NATIVE_ASSET_NAME: &str = "TN";
pub const NATIVE_ASSET_DECIMALS: u8 = 8;

// Network identifier bytes
pub const MAINNET_BYTE: u8 = 76; // 'L'
pub const TESTNET_BYTE: u8 = 108; // 'l'

// Network endpoints
pub const MAINNET_SERVER: &str = "https://cluster.tnnode.turtlenetwork.eu";
pub const MAINNET_CLIENT_ORIGIN: &str = "https://wallet.turtlenetwork.eu/signer/";
pub const TESTNET_SERVER: &str = "https://testnet.cluster.tnnode.turtlenetwork.eu";
pub const TESTNET_CLIENT_ORIGIN: &str = "https://testnet.wallet.turtlenetwork.eu/signer/";

// Backend paths, relative to a slash-terminated server root
pub const BALANCE_PATH: &str = "assets/balance";
pub const NFT_PATH: &str = "assets/nft";
pub const ASSET_DETAILS_PATH: &str = "assets/details";
pub const NFT_PAGE_LIMIT: u32 = 1000;

// Address layout
pub const MIN_DECODED_ADDRESS_LENGTH: usize = 2;
pub const NETWORK_BYTE_INDEX: usize = 1;
pub const PUBLIC_KEY_HASH_START: usize = 2;
pub const PUBLIC_KEY_HASH_END: usize = 22;

// Fees, in TN
pub const SCRIPTED_ACCOUNT_FEE: &str = "0.1";
pub const DEFAULT_ACCOUNT_FEE: &str = "0.06";

// Notifications
pub const COPIED_MESSAGE: &str = "Copied!";

// Network timeouts
pub const HTTP_TIMEOUT_MS: u64 = 30000; // 30 seconds

// Environment configuration keys
pub const ENV_DEFAULT_NETWORK: &str = "TN_ACCOUNT_DEFAULT_NETWORK";
pub const ENV_MAINNET_SERVER: &str = "TN_ACCOUNT_MAINNET_SERVER";
pub const ENV_TESTNET_SERVER: &str = "TN_ACCOUNT_TESTNET_SERVER";
pub const ENV_MAINNET_CLIENT_ORIGIN: &str = "TN_ACCOUNT_MAINNET_CLIENT_ORIGIN";
pub const ENV_TESTNET_CLIENT_ORIGIN: &str = "TN_ACCOUNT_TESTNET_CLIENT_ORIGIN";
pub const ENV_HTTP_TIMEOUT_MS: &str = "TN_ACCOUNT_HTTP_TIMEOUT_MS";

// Development and testing constants
pub const LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "info" };
