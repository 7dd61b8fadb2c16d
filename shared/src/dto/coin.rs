//! # Coin DTOs
//!
//! Listing entries and per-coin metadata.

use serde::{Deserialize, Serialize};

/// One entry of the coin listing (`GET /coins`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_new: bool,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Coin metadata (`GET /coins/{id}`).
///
/// The API omits or nulls most descriptive fields for smaller coins, so
/// everything past the identity block is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_new: bool,
    pub is_active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_source: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_wallet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_data_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_data_at: Option<String>,
}

impl CoinInfo {
    /// Description text, empty when the API has none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_summary_from_listing_json() {
        let body = r#"[
            {"id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,"is_new":false,"is_active":true,"type":"coin"},
            {"id":"usdt-tether","name":"Tether","symbol":"USDT","rank":3,"is_new":false,"is_active":true,"type":"token"}
        ]"#;
        let coins: Vec<CoinSummary> = serde_json::from_str(body).unwrap();

        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].id, "btc-bitcoin");
        assert_eq!(coins[0].kind, "coin");
        assert_eq!(coins[1].kind, "token");
    }

    #[test]
    fn test_coin_info_tolerates_missing_and_null_fields() {
        let body = r#"{
            "id":"btc-bitcoin","name":"Bitcoin","symbol":"BTC","rank":1,
            "is_new":false,"is_active":true,"type":"coin",
            "description":"Bitcoin is a cryptocurrency.",
            "message":null,
            "open_source":true,
            "hash_algorithm":"SHA256",
            "tags":[{"id":"segwit","name":"Segwit"}]
        }"#;
        let info: CoinInfo = serde_json::from_str(body).unwrap();

        assert_eq!(info.description_text(), "Bitcoin is a cryptocurrency.");
        assert_eq!(info.message, None);
        assert_eq!(info.open_source, Some(true));
        assert_eq!(info.hash_algorithm.as_deref(), Some("SHA256"));
        assert_eq!(info.proof_type, None);
    }

    #[test]
    fn test_coin_info_without_description() {
        let body = r#"{"id":"x-x","name":"X","symbol":"X","rank":0,"is_new":true,"is_active":false,"type":"token"}"#;
        let info: CoinInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.description_text(), "");
    }
}
