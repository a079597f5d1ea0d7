//! Runtime configuration
//!
//! Settings come from the environment (optionally a `.env` file) with safe
//! defaults for the public TurtleNetwork nodes.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::domain::entities::{NetworkByte, NetworkDescriptor, NetworkTable};
use crate::shared::constants::{
    ENV_DEFAULT_NETWORK, ENV_HTTP_TIMEOUT_MS, ENV_MAINNET_CLIENT_ORIGIN, ENV_MAINNET_SERVER,
    ENV_TESTNET_CLIENT_ORIGIN, ENV_TESTNET_SERVER, HTTP_TIMEOUT_MS, MAINNET_CLIENT_ORIGIN,
    MAINNET_SERVER, TESTNET_CLIENT_ORIGIN, TESTNET_SERVER,
};
use crate::shared::error::AccountError;
use crate::shared::types::AccountResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountConfig {
    pub default_network: NetworkByte,
    pub mainnet_server: String,
    pub mainnet_client_origin: String,
    pub testnet_server: String,
    pub testnet_client_origin: String,
    pub http_timeout_ms: u64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            default_network: NetworkByte::Mainnet,
            mainnet_server: MAINNET_SERVER.to_string(),
            mainnet_client_origin: MAINNET_CLIENT_ORIGIN.to_string(),
            testnet_server: TESTNET_SERVER.to_string(),
            testnet_client_origin: TESTNET_CLIENT_ORIGIN.to_string(),
            http_timeout_ms: HTTP_TIMEOUT_MS,
        }
    }
}

impl AccountConfig {
    /// Load from `.env` (if present) and the process environment
    pub fn from_env() -> AccountResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> AccountResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(name) = get(ENV_DEFAULT_NETWORK) {
            config.default_network = NetworkByte::from_name(&name).ok_or_else(|| {
                AccountError::config(format!("Unknown network '{}' in {}", name, ENV_DEFAULT_NETWORK))
            })?;
        }
        if let Some(server) = get(ENV_MAINNET_SERVER) {
            config.mainnet_server = server;
        }
        if let Some(origin) = get(ENV_MAINNET_CLIENT_ORIGIN) {
            config.mainnet_client_origin = origin;
        }
        if let Some(server) = get(ENV_TESTNET_SERVER) {
            config.testnet_server = server;
        }
        if let Some(origin) = get(ENV_TESTNET_CLIENT_ORIGIN) {
            config.testnet_client_origin = origin;
        }
        if let Some(timeout) = get(ENV_HTTP_TIMEOUT_MS) {
            config.http_timeout_ms = timeout.trim().parse().map_err(|e| {
                AccountError::config(format!("Invalid {} '{}': {}", ENV_HTTP_TIMEOUT_MS, timeout, e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AccountResult<()> {
        for (name, server) in [("mainnet", &self.mainnet_server), ("testnet", &self.testnet_server)] {
            if !(server.starts_with("http://") || server.starts_with("https://")) {
                return Err(AccountError::config(format!(
                    "The {} server must be an http(s) URL, got '{}'",
                    name, server
                )));
            }
        }
        if self.http_timeout_ms == 0 {
            return Err(AccountError::config("HTTP timeout must be greater than zero"));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    /// The network table these settings describe
    pub fn network_table(&self) -> NetworkTable {
        NetworkTable::empty()
            .with_entry(
                NetworkByte::Mainnet.as_byte(),
                NetworkDescriptor::new(NetworkByte::Mainnet.code().to_string(), &self.mainnet_server)
                    .with_client_origin(&self.mainnet_client_origin),
            )
            .with_entry(
                NetworkByte::Testnet.as_byte(),
                NetworkDescriptor::new(NetworkByte::Testnet.code().to_string(), &self.testnet_server)
                    .with_client_origin(&self.testnet_client_origin),
            )
    }

    pub fn default_network_descriptor(&self) -> Option<NetworkDescriptor> {
        self.network_table().network(self.default_network).cloned()
    }
}
