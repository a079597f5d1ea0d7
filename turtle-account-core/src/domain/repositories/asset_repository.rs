//! Asset repository for backend data access
//!
//! This module defines how the account core reads balances, NFT holdings and
//! asset details from a network's node.

use async_trait::async_trait;

use crate::domain::entities::NetworkDescriptor;
use crate::shared::types::{AccountResult, AssetDetail, AssetId, BalancesResponse, NftRecord};

/// Asset backend trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetBackend: Send + Sync {
    /// Fungible balances held by `address`
    async fn fetch_balances(
        &self,
        network: &NetworkDescriptor,
        address: &str,
    ) -> AccountResult<BalancesResponse>;

    /// Up to `limit` NFTs held by `address`, with inline metadata
    async fn fetch_nfts(
        &self,
        network: &NetworkDescriptor,
        address: &str,
        limit: u32,
    ) -> AccountResult<Vec<NftRecord>>;

    /// Batched metadata lookup for the given asset ids
    async fn fetch_asset_details(
        &self,
        network: &NetworkDescriptor,
        ids: Vec<AssetId>,
    ) -> AccountResult<Vec<AssetDetail>>;
}
