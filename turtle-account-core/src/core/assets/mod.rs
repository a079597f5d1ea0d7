//! Account asset aggregation
//!
//! This module merges fungible balances, NFT holdings and batched asset
//! details into a single asset mapping for one address.

use crate::domain::entities::{AssetEntry, AssetMapping, NetworkDescriptor};
use crate::domain::repositories::AssetBackend;
use crate::shared::constants::NFT_PAGE_LIMIT;
use crate::shared::error::AccountError;
use crate::shared::types::{AccountResult, AssetDetail, AssetId, BalanceRecord};

/// Builds the asset mapping for an address from a network backend
pub struct AccountAssetAggregator<B: AssetBackend> {
    backend: B,
}

impl<B: AssetBackend> AccountAssetAggregator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch and merge everything known about `address` on `network`.
    ///
    /// Any backend failure aborts with `AccountError::Fetch`; a result that
    /// still has unresolved metadata after the details lookup aborts with
    /// `AccountError::PartialMetadata`. Nothing is retried here.
    pub async fn refresh(
        &self,
        address: &str,
        network: &NetworkDescriptor,
    ) -> AccountResult<AssetMapping> {
        log::debug!("Refreshing assets of {} on network {}", address, network.code);

        let (balances, nfts) = futures::try_join!(
            self.backend.fetch_balances(network, address),
            self.backend.fetch_nfts(network, address, NFT_PAGE_LIMIT)
        )?;

        let mut records = balances.balances;
        records.extend(nfts.into_iter().map(BalanceRecord::from));

        let missing = missing_metadata_ids(&records);
        if !missing.is_empty() {
            log::debug!("Looking up details of {} asset(s)", missing.len());
            let details = self.backend.fetch_asset_details(network, missing).await?;
            apply_details(&mut records, &details);
        }

        let mapping = build_mapping(&records)?;
        log::info!("Resolved {} asset(s) for {}", mapping.len(), address);
        Ok(mapping)
    }
}

/// Ids of records without metadata, first occurrence order, no duplicates
fn missing_metadata_ids(records: &[BalanceRecord]) -> Vec<AssetId> {
    let mut ids: Vec<AssetId> = Vec::new();
    for record in records.iter().filter(|r| !r.is_resolved()) {
        if !ids.contains(&record.asset_id) {
            ids.push(record.asset_id.clone());
        }
    }
    ids
}

/// Attach each detail to every record with the same id. Details for ids
/// that are not in the list are ignored.
fn apply_details(records: &mut [BalanceRecord], details: &[AssetDetail]) {
    for detail in details {
        let mut matched = false;
        for record in records.iter_mut().filter(|r| r.asset_id == detail.asset_id) {
            record.issue_transaction = Some(detail.metadata());
            matched = true;
        }
        if !matched {
            log::debug!("Ignoring details for unrequested asset {}", detail.asset_id);
        }
    }
}

/// Completeness gate followed by the fold into a mapping
fn build_mapping(records: &[BalanceRecord]) -> AccountResult<AssetMapping> {
    let unresolved: Vec<&str> = records
        .iter()
        .filter(|r| !r.is_resolved())
        .map(|r| r.asset_id.as_str())
        .collect();
    if !unresolved.is_empty() {
        return Err(AccountError::partial_metadata(format!(
            "{} of {} asset(s) unresolved: {}",
            unresolved.len(),
            records.len(),
            unresolved.join(", ")
        )));
    }

    let mut mapping = AssetMapping::with_native();
    for record in records {
        if let Some(metadata) = &record.issue_transaction {
            if !mapping.insert(AssetEntry::from_metadata(record.asset_id.clone(), metadata)) {
                log::warn!("Balance record tried to override the native asset entry");
            }
        }
    }
    Ok(mapping)
}
