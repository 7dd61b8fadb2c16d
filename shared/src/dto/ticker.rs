//! # Ticker DTOs
//!
//! Live market snapshot for one coin (`GET /tickers/{id}`). Each fetch
//! replaces the previous snapshot wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference currency the views read quotes in.
pub const USD: &str = "USD";

/// Ticker snapshot with quotes keyed by reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub max_supply: f64,
    #[serde(default)]
    pub beta_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_data_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub quotes: HashMap<String, Quote>,
}

impl Ticker {
    /// The USD quote, if the API included one.
    pub fn usd(&self) -> Option<&Quote> {
        self.quotes.get(USD)
    }
}

/// Market statistics in one reference currency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_24h_change_24h: f64,
    pub market_cap: f64,
    pub market_cap_change_24h: f64,
    pub percent_change_15m: f64,
    pub percent_change_30m: f64,
    pub percent_change_1h: f64,
    pub percent_change_6h: f64,
    pub percent_change_12h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_1y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ath_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_from_price_ath: Option<f64>,
}
