//! TurtleNetwork Account Core
//!
//! Non-visual core behind the account panel of the TurtleNetwork web wallet.
//!
//! ## Architecture
//!
//! - **Core**: network resolution, asset aggregation, the account store
//! - **Domain**: entities and the traits the core talks through
//! - **Infrastructure**: node HTTP client, configuration, logging
//! - **Shared**: common types, constants, and utilities
//!
//! ## Usage
//!
//! ```rust,no_run
//! use turtle_account_core::init_account_core;
//!
//! # async fn run() -> Result<(), turtle_account_core::AccountError> {
//! let core = init_account_core().await?;
//! let _scheduler = core.store.spawn_refresh_scheduler();
//!
//! // Signing in via the wallet extension yields an address
//! core.store.set_address(Some("3JmaWyFqWo8YSA8x3DXCBUW7veesxacvKx4".to_string())).await;
//!
//! let network = core.store.network_by_address("3JmaWyFqWo8YSA8x3DXCBUW7veesxacvKx4");
//! let assets = core.store.assets().await;
//! # let _ = (network, assets);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types and traits
pub use crate::core::{AccountAssetAggregator, AccountChange, AccountStore, NetworkResolver};
pub use crate::domain::{
    AssetBackend, AssetEntry, AssetMapping, NetworkByte, NetworkDescriptor, NetworkTable,
    NotificationSink,
};
pub use crate::infrastructure::{AccountConfig, HttpAssetBackend, LogNotificationSink};
pub use crate::shared::error::AccountError;
pub use crate::shared::types::{AccountResult, Address, AddressType, AssetId, LoginType, Severity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging
pub fn init() {
    infrastructure::init_logging();
}

/// Main account core struct that provides access to all functionality
pub struct AccountCore {
    pub config: AccountConfig,
    pub store: Arc<AccountStore<HttpAssetBackend>>,
}

/// Initialize the account core with configuration from .env or safe defaults
pub async fn init_account_core() -> AccountResult<AccountCore> {
    init();
    let config = AccountConfig::from_env()?;
    build_account_core(config, Arc::new(LogNotificationSink)).await
}

/// Assemble the account core from explicit settings and a notification sink
pub async fn build_account_core(
    config: AccountConfig,
    notifier: Arc<dyn NotificationSink>,
) -> AccountResult<AccountCore> {
    config.validate()?;
    let resolver = NetworkResolver::new(config.network_table());
    let backend = HttpAssetBackend::new(config.http_timeout())?;
    let store = Arc::new(AccountStore::new(resolver, backend, notifier));
    store.set_network(config.default_network_descriptor()).await;

    log::info!(
        "{} {} ready on {} ({})",
        NAME,
        VERSION,
        config.default_network.name(),
        config.default_network.code()
    );
    Ok(AccountCore { config, store })
}

impl AccountCore {
    /// Switch the active network, e.g. after the signer reports a different one
    pub async fn select_network(&self, network: NetworkByte) -> AccountResult<()> {
        let descriptor = self
            .store
            .resolver()
            .table()
            .network(network)
            .cloned()
            .ok_or_else(|| AccountError::config(format!("Network {} is not configured", network.name())))?;
        self.store.set_network(Some(descriptor)).await;
        Ok(())
    }

    /// Record a successful sign-in reported by the signing extension
    pub async fn sign_in(&self, address: Address, login_type: LoginType) -> AccountResult<()> {
        let network = self
            .store
            .resolver()
            .resolve(&address)?
            .ok_or_else(|| AccountError::validation(format!("Address {} belongs to no known network", address)))?;
        self.store.set_login_type(Some(login_type)).await;
        self.store.set_network(Some(network)).await;
        self.store.set_address(Some(address)).await;
        Ok(())
    }

    pub async fn sign_out(&self) {
        self.store.set_address(None).await;
        self.store.set_login_type(None).await;
        self.store.set_scripted(false).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_with_byte(byte: u8) -> String {
        let mut bytes = vec![1u8, byte];
        bytes.extend([3u8; 24]);
        bs58::encode(bytes).into_string()
    }

    #[tokio::test]
    async fn test_account_core_initialization() {
        let core = build_account_core(AccountConfig::default(), Arc::new(LogNotificationSink))
            .await
            .expect("Failed to initialize account core");

        let network = core.store.network().await.expect("default network selected");
        assert_eq!(network.code, "L");
        assert_eq!(core.store.assets().await, AssetMapping::with_native());
    }

    #[tokio::test]
    async fn test_sign_in_selects_address_network() {
        let core = build_account_core(AccountConfig::default(), Arc::new(LogNotificationSink))
            .await
            .expect("Failed to initialize account core");

        let address = address_with_byte(108);
        core.sign_in(address.clone(), LoginType::Signer)
            .await
            .expect("testnet address signs in");

        assert_eq!(core.store.address().await, Some(address));
        assert_eq!(core.store.network().await.map(|n| n.code), Some("l".to_string()));
        assert!(core.store.is_authorized().await);

        core.sign_out().await;
        assert!(!core.store.is_authorized().await);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_unknown_networks() {
        let core = build_account_core(AccountConfig::default(), Arc::new(LogNotificationSink))
            .await
            .expect("Failed to initialize account core");

        let unknown = core.sign_in(address_with_byte(b'S'), LoginType::Keeper).await;
        assert!(matches!(unknown, Err(AccountError::Validation(_))));

        let malformed = core.sign_in("0OIl".to_string(), LoginType::Keeper).await;
        assert!(matches!(malformed, Err(AccountError::Decode(_))));
        assert!(core.store.address().await.is_none());
    }

    #[tokio::test]
    async fn test_select_network() {
        let core = build_account_core(AccountConfig::default(), Arc::new(LogNotificationSink))
            .await
            .expect("Failed to initialize account core");

        tokio_test::assert_ok!(core.select_network(NetworkByte::Testnet).await);
        assert_eq!(core.store.network().await.map(|n| n.code), Some("l".to_string()));
    }
}
