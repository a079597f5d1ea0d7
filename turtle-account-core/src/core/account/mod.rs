//! Account state for the wallet panel
//!
//! This module holds the current address, network and published asset
//! mapping, and refreshes the mapping whenever the address or network changes.

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::core::assets::AccountAssetAggregator;
use crate::core::network::NetworkResolver;
use crate::domain::entities::{AssetMapping, NetworkDescriptor};
use crate::domain::repositories::{AssetBackend, NotificationSink};
use crate::shared::constants::{COPIED_MESSAGE, DEFAULT_ACCOUNT_FEE, SCRIPTED_ACCOUNT_FEE};
use crate::shared::types::{AccountResult, Address, AddressType, LoginType, Severity};
use crate::shared::utils::to_ethereum_address;

/// What the refresh scheduler is told on every address or network change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountChange {
    pub generation: u64,
    pub address: Option<Address>,
}

#[derive(Debug, Default)]
struct AccountState {
    address: Option<Address>,
    network: Option<NetworkDescriptor>,
    scripted: bool,
    login_type: Option<LoginType>,
    generation: u64,
}

/// Account store
pub struct AccountStore<B: AssetBackend> {
    resolver: NetworkResolver,
    aggregator: AccountAssetAggregator<B>,
    notifier: Arc<dyn NotificationSink>,
    state: RwLock<AccountState>,
    assets: RwLock<AssetMapping>,
    last_refreshed_at: RwLock<Option<DateTime<Utc>>>,
    changes: watch::Sender<AccountChange>,
}

impl<B: AssetBackend + 'static> AccountStore<B> {
    pub fn new(resolver: NetworkResolver, backend: B, notifier: Arc<dyn NotificationSink>) -> Self {
        let (changes, _) = watch::channel(AccountChange {
            generation: 0,
            address: None,
        });
        Self {
            resolver,
            aggregator: AccountAssetAggregator::new(backend),
            notifier,
            state: RwLock::new(AccountState::default()),
            assets: RwLock::new(AssetMapping::with_native()),
            last_refreshed_at: RwLock::new(None),
            changes,
        }
    }

    pub fn resolver(&self) -> &NetworkResolver {
        &self.resolver
    }

    /// Subscribe to address and network changes
    pub fn subscribe(&self) -> watch::Receiver<AccountChange> {
        self.changes.subscribe()
    }

    pub async fn set_address(&self, address: Option<Address>) {
        let mut state = self.state.write().await;
        state.address = address;
        self.bump(&mut state);
    }

    pub async fn set_network(&self, network: Option<NetworkDescriptor>) {
        let mut state = self.state.write().await;
        state.network = network;
        self.bump(&mut state);
    }

    pub async fn set_scripted(&self, scripted: bool) {
        self.state.write().await.scripted = scripted;
    }

    pub async fn set_login_type(&self, login_type: Option<LoginType>) {
        self.state.write().await.login_type = login_type;
    }

    fn bump(&self, state: &mut AccountState) {
        state.generation += 1;
        self.changes.send_replace(AccountChange {
            generation: state.generation,
            address: state.address.clone(),
        });
    }

    pub async fn address(&self) -> Option<Address> {
        self.state.read().await.address.clone()
    }

    pub async fn network(&self) -> Option<NetworkDescriptor> {
        self.state.read().await.network.clone()
    }

    pub async fn scripted(&self) -> bool {
        self.state.read().await.scripted
    }

    pub async fn login_type(&self) -> Option<LoginType> {
        self.state.read().await.login_type
    }

    /// Last fully resolved asset mapping
    pub async fn assets(&self) -> AssetMapping {
        self.assets.read().await.clone()
    }

    pub async fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        *self.last_refreshed_at.read().await
    }

    /// Transaction fee in TN; scripted accounts pay the smart-account surcharge
    pub async fn fee(&self) -> &'static str {
        if self.scripted().await {
            SCRIPTED_ACCOUNT_FEE
        } else {
            DEFAULT_ACCOUNT_FEE
        }
    }

    pub async fn is_authorized(&self) -> bool {
        let state = self.state.read().await;
        state.login_type.is_some() && state.address.is_some()
    }

    /// Resolve the network of an arbitrary address. Malformed addresses are
    /// reported to the user and treated as unknown.
    pub fn network_by_address(&self, address: &str) -> Option<NetworkDescriptor> {
        match self.resolver.resolve(address) {
            Ok(network) => network,
            Err(e) => {
                log::warn!("Failed to resolve network of {}: {}", address, e);
                self.notifier.notify(&e.to_string(), Severity::Error);
                None
            }
        }
    }

    /// True when `route_address` belongs to a different known network than
    /// the one the account is connected to
    pub async fn is_invalid_server(&self, route_address: &str) -> bool {
        match self.network().await {
            Some(active) => self.resolver.is_network_mismatch(route_address, &active),
            None => false,
        }
    }

    pub async fn can_switch_address_type(&self) -> bool {
        self.login_type().await == Some(LoginType::Metamask)
    }

    pub fn switch_address_type(&self, current: AddressType) -> AddressType {
        current.toggled()
    }

    /// Current address rendered in `address_type`, if signed in
    pub async fn display_address(&self, address_type: AddressType) -> AccountResult<Option<String>> {
        let Some(address) = self.address().await else {
            return Ok(None);
        };
        match address_type {
            AddressType::Tn => Ok(Some(address)),
            AddressType::Ethereum => to_ethereum_address(&address).map(Some),
        }
    }

    /// Text to put on the clipboard; confirms to the user when there is one
    pub async fn copy_text(&self, address_type: AddressType) -> AccountResult<Option<String>> {
        let text = self.display_address(address_type).await?;
        if text.is_some() {
            self.notifier.notify(COPIED_MESSAGE, Severity::Success);
        }
        Ok(text)
    }

    /// Refresh the asset mapping for the current address and network.
    ///
    /// Returns whether a new mapping was published. On error the previously
    /// published mapping is left untouched.
    pub async fn refresh_assets(&self) -> AccountResult<bool> {
        let (generation, address) = {
            let state = self.state.read().await;
            (state.generation, state.address.clone())
        };
        match address {
            Some(address) => self.refresh_generation(generation, &address).await,
            None => Ok(false),
        }
    }

    async fn refresh_generation(&self, generation: u64, address: &str) -> AccountResult<bool> {
        let Some(network) = self.network().await else {
            log::debug!("No network selected; skipping asset refresh for {}", address);
            return Ok(false);
        };

        let mapping = self.aggregator.refresh(address, &network).await?;
        Ok(self.publish(generation, address, mapping).await)
    }

    async fn publish(&self, generation: u64, address: &str, mapping: AssetMapping) -> bool {
        let state = self.state.read().await;
        if state.generation != generation || state.address.as_deref() != Some(address) {
            log::debug!(
                "Discarding assets of {} from generation {} (current {})",
                address,
                generation,
                state.generation
            );
            return false;
        }
        *self.assets.write().await = mapping;
        *self.last_refreshed_at.write().await = Some(Utc::now());
        true
    }

    /// Start the task that refreshes assets on every change.
    ///
    /// A refresh still in flight when a newer change arrives is dropped. The
    /// task ends once the store itself is dropped.
    pub fn spawn_refresh_scheduler(self: &Arc<Self>) -> JoinHandle<()> {
        let store: Weak<Self> = Arc::downgrade(self);
        let mut changes = self.changes.subscribe();

        tokio::spawn(async move {
            loop {
                let change = changes.borrow_and_update().clone();

                if let Some(address) = change.address {
                    let Some(current) = store.upgrade() else {
                        break;
                    };
                    tokio::select! {
                        result = current.refresh_generation(change.generation, &address) => {
                            match result {
                                Ok(true) => log::debug!("Published assets for {}", address),
                                Ok(false) => {}
                                Err(e) if e.is_recoverable() => {
                                    log::warn!("Asset refresh for {} failed: {}", address, e)
                                }
                                Err(e) => log::error!("Asset refresh for {} failed: {}", address, e),
                            }
                        }
                        changed = changes.changed() => {
                            log::debug!("Refresh for {} superseded", address);
                            if changed.is_err() {
                                break;
                            }
                            continue;
                        }
                    }
                }

                if changes.changed().await.is_err() {
                    break;
                }
            }
            log::debug!("Asset refresh scheduler stopped");
        })
    }
}
