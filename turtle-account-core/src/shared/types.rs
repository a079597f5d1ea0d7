use serde::{Deserialize, Serialize};

// Basic types for account operations
pub type Address = String;
pub type AssetId = String;
pub type Decimals = u8;

/// Display name and precision of an asset, taken from its issue transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueMetadata {
    pub name: String,
    pub decimals: Decimals,
}

// Backend payloads - one type per endpoint, validated by serde at the boundary

/// One entry of `GET /assets/balance/{address}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub asset_id: AssetId,
    #[serde(default)]
    pub issue_transaction: Option<IssueMetadata>,
}

impl BalanceRecord {
    pub fn is_resolved(&self) -> bool {
        self.issue_transaction.is_some()
    }
}

/// Body of `GET /assets/balance/{address}`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BalancesResponse {
    pub balances: Vec<BalanceRecord>,
}

/// One entry of `GET /assets/nft/{address}/limit/{n}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NftRecord {
    pub asset_id: AssetId,
    pub name: String,
    pub decimals: Decimals,
}

impl From<NftRecord> for BalanceRecord {
    fn from(nft: NftRecord) -> Self {
        Self {
            asset_id: nft.asset_id,
            issue_transaction: Some(IssueMetadata {
                name: nft.name,
                decimals: nft.decimals,
            }),
        }
    }
}

/// Body of `POST /assets/details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDetailsRequest {
    pub ids: Vec<AssetId>,
}

/// One entry of the `POST /assets/details` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetail {
    pub asset_id: AssetId,
    pub name: String,
    pub decimals: Decimals,
}

impl AssetDetail {
    pub fn metadata(&self) -> IssueMetadata {
        IssueMetadata {
            name: self.name.clone(),
            decimals: self.decimals,
        }
    }
}

// Account presentation types

/// How the account address is displayed and copied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AddressType {
    #[default]
    Tn,
    Ethereum,
}

impl AddressType {
    pub fn toggled(self) -> Self {
        match self {
            AddressType::Tn => AddressType::Ethereum,
            AddressType::Ethereum => AddressType::Tn,
        }
    }
}

/// Signing capability the user logged in with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoginType {
    Keeper,
    Signer,
    Metamask,
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Success,
    Info,
}

// Result types for better error handling
pub type AccountResult<T> = Result<T, crate::shared::error::AccountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balances_response_with_null_metadata() {
        let body = r#"{
            "address": "3Jexample",
            "balances": [
                {"assetId": "X", "balance": 10, "issueTransaction": null},
                {"assetId": "Y", "balance": 5, "issueTransaction": {"name": "Yen", "decimals": 2, "quantity": 100}},
                {"assetId": "Z", "balance": 1}
            ]
        }"#;
        let parsed: BalancesResponse = serde_json::from_str(body).expect("valid balances body");

        assert_eq!(parsed.balances.len(), 3);
        assert!(!parsed.balances[0].is_resolved());
        assert_eq!(
            parsed.balances[1].issue_transaction,
            Some(IssueMetadata { name: "Yen".to_string(), decimals: 2 })
        );
        assert!(!parsed.balances[2].is_resolved());
    }

    #[test]
    fn test_nft_records_from_wire() {
        let body = r#"[
            {"assetId": "N1", "name": "Turtle #1", "decimals": 0, "quantity": 1, "reissuable": false},
            {"assetId": "N2", "name": "Turtle #2", "decimals": 0}
        ]"#;
        let parsed: Vec<NftRecord> = serde_json::from_str(body).expect("valid NFT body");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].asset_id, "N1");
        assert_eq!(parsed[1].name, "Turtle #2");

        let record = BalanceRecord::from(parsed[0].clone());
        assert!(record.is_resolved());
        assert_eq!(
            record.issue_transaction,
            Some(IssueMetadata { name: "Turtle #1".to_string(), decimals: 0 })
        );
    }

    #[test]
    fn test_asset_details_from_wire() {
        let body = r#"[{"assetId": "X", "issuer": "3Jissuer", "name": "Foo", "decimals": 2, "description": ""}]"#;
        let parsed: Vec<AssetDetail> = serde_json::from_str(body).expect("valid details body");

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].asset_id, "X");
        assert_eq!(parsed[0].metadata(), IssueMetadata { name: "Foo".to_string(), decimals: 2 });

        // snake_case ids are not what the node sends
        let wrong_case = serde_json::from_str::<Vec<AssetDetail>>(r#"[{"asset_id": "X", "name": "Foo", "decimals": 2}]"#);
        assert!(wrong_case.is_err());
    }

    #[test]
    fn test_balances_response_requires_balances() {
        let parsed = serde_json::from_str::<BalancesResponse>(r#"{"error": 102}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_nft_becomes_resolved_balance() {
        let nft = NftRecord {
            asset_id: "Y".to_string(),
            name: "Bar".to_string(),
            decimals: 0,
        };
        let record = BalanceRecord::from(nft);

        assert_eq!(record.asset_id, "Y");
        assert!(record.is_resolved());
    }

    #[test]
    fn test_details_request_shape() {
        let request = AssetDetailsRequest { ids: vec!["A".to_string(), "B".to_string()] };
        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json, serde_json::json!({"ids": ["A", "B"]}));
    }

    #[test]
    fn test_address_type_toggle() {
        assert_eq!(AddressType::default(), AddressType::Tn);
        assert_eq!(AddressType::Tn.toggled(), AddressType::Ethereum);
        assert_eq!(AddressType::Ethereum.toggled(), AddressType::Tn);
    }
}
