//! # Service Traits
//!
//! The market-data trait the query layer calls, so tests can swap the HTTP
//! client for a mock.

use super::error::Result;
use async_trait::async_trait;
use shared::dto::{CoinInfo, CoinSummary, HistoricalPrice, Ticker};

/// Read-only access to the public market-data API.
#[async_trait]
pub trait CoinApi: Send + Sync {
    /// Full coin listing
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>>;

    /// Metadata for one coin
    async fn fetch_coin_info(&self, coin_id: &str) -> Result<CoinInfo>;

    /// Current ticker snapshot for one coin
    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<Ticker>;

    /// Historical OHLCV buckets for one coin
    async fn fetch_coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>>;
}
