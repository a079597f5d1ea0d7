//! Asset entity for the account core

use serde::Serialize;
use std::collections::HashMap;

use crate::shared::constants::{NATIVE_ASSET_DECIMALS, NATIVE_ASSET_ID, NATIVE_ASSET_NAME};
use crate::shared::types::{AssetId, Decimals, IssueMetadata};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub asset_id: AssetId,
    pub name: String,
    pub decimals: Decimals,
}

impl AssetEntry {
    pub fn new(asset_id: impl Into<AssetId>, name: impl Into<String>, decimals: Decimals) -> Self {
        Self {
            asset_id: asset_id.into(),
            name: name.into(),
            decimals,
        }
    }

    pub fn from_metadata(asset_id: impl Into<AssetId>, metadata: &IssueMetadata) -> Self {
        Self::new(asset_id, metadata.name.clone(), metadata.decimals)
    }

    pub fn native() -> Self {
        Self::new(NATIVE_ASSET_ID, NATIVE_ASSET_NAME, NATIVE_ASSET_DECIMALS)
    }

    pub fn is_native(&self) -> bool {
        self.asset_id == NATIVE_ASSET_ID
    }
}

/// Asset id to display metadata, with the native asset always present.
///
/// Only whole mappings are ever published; entries are never patched in
/// place once a mapping is visible.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AssetMapping(HashMap<AssetId, AssetEntry>);

impl AssetMapping {
    /// A mapping holding only the native asset
    pub fn with_native() -> Self {
        let native = AssetEntry::native();
        let mut entries = HashMap::new();
        entries.insert(native.asset_id.clone(), native);
        Self(entries)
    }

    /// Insert or replace an entry. The native entry is fixed; attempts to
    /// replace it are ignored and return `false`.
    pub fn insert(&mut self, entry: AssetEntry) -> bool {
        if entry.is_native() {
            return false;
        }
        self.0.insert(entry.asset_id.clone(), entry);
        true
    }

    pub fn get(&self, asset_id: &str) -> Option<&AssetEntry> {
        self.0.get(asset_id)
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.0.contains_key(asset_id)
    }

    pub fn native(&self) -> Option<&AssetEntry> {
        self.get(NATIVE_ASSET_ID)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AssetMapping {
    fn default() -> Self {
        Self::with_native()
    }
}
