//! HTTP asset backend
//!
//! Talks to a TurtleNetwork node's REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::NetworkDescriptor;
use crate::domain::repositories::AssetBackend;
use crate::shared::constants::HTTP_TIMEOUT_MS;
use crate::shared::error::AccountError;
use crate::shared::types::{
    AccountResult, AssetDetail, AssetDetailsRequest, AssetId, BalancesResponse, NftRecord,
};
use crate::shared::utils::{asset_details_url, balance_url, nft_url};

/// `AssetBackend` over the node REST API
#[derive(Debug, Clone)]
pub struct HttpAssetBackend {
    client: Client,
}

impl HttpAssetBackend {
    pub fn new(timeout: Duration) -> AccountResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AccountError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> AccountResult<T> {
        log::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AccountError::fetch(format!("Failed to query {}: {}", what, e)))?;
        let resp = resp
            .error_for_status()
            .map_err(|e| AccountError::fetch(format!("Failed to query {}: {}", what, e)))?;
        resp.json()
            .await
            .map_err(|e| AccountError::fetch(format!("Invalid {} response: {}", what, e)))
    }
}

impl Default for HttpAssetBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(HTTP_TIMEOUT_MS))
            .unwrap_or_else(|_| Self::with_client(Client::new()))
    }
}

#[async_trait]
impl AssetBackend for HttpAssetBackend {
    async fn fetch_balances(
        &self,
        network: &NetworkDescriptor,
        address: &str,
    ) -> AccountResult<BalancesResponse> {
        self.get_json(&balance_url(&network.server, address), "balances")
            .await
    }

    async fn fetch_nfts(
        &self,
        network: &NetworkDescriptor,
        address: &str,
        limit: u32,
    ) -> AccountResult<Vec<NftRecord>> {
        self.get_json(&nft_url(&network.server, address, limit), "NFTs")
            .await
    }

    async fn fetch_asset_details(
        &self,
        network: &NetworkDescriptor,
        ids: Vec<AssetId>,
    ) -> AccountResult<Vec<AssetDetail>> {
        let url = asset_details_url(&network.server);
        log::debug!("POST {} ({} ids)", url, ids.len());
        let resp = self
            .client
            .post(&url)
            .json(&AssetDetailsRequest { ids })
            .send()
            .await
            .map_err(|e| AccountError::fetch(format!("Failed to query asset details: {}", e)))?;
        let resp = resp
            .error_for_status()
            .map_err(|e| AccountError::fetch(format!("Failed to query asset details: {}", e)))?;
        Ok(resp.json().await?)
    }
}
