//! In-memory `CoinApi` for query and app tests.

use super::error::{AppError, Result};
use super::service::CoinApi;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{CoinInfo, CoinSummary, HistoricalPrice, Quote, Ticker};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Serves fixtures, records every call and can be told to fail or lag.
#[derive(Default)]
pub(crate) struct MockCoinApi {
    calls: Mutex<Vec<String>>,
    delay: Mutex<Option<Duration>>,
    failing: AtomicBool,
}

impl MockCoinApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_delay(delay: Duration) -> Self {
        let api = Self::default();
        *api.delay.lock() = Some(delay);
        api
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every call so far, as `"op:coin_id"` (or just `"op"` for the listing).
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == call).count()
    }

    async fn record(&self, call: String) -> Result<()> {
        self.calls.lock().push(call.clone());
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Network(format!("{call} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl CoinApi for MockCoinApi {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>> {
        self.record("coins".to_string()).await?;
        Ok(coin_listing(25))
    }

    async fn fetch_coin_info(&self, coin_id: &str) -> Result<CoinInfo> {
        self.record(format!("info:{coin_id}")).await?;
        Ok(coin_info(coin_id))
    }

    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<Ticker> {
        self.record(format!("tickers:{coin_id}")).await?;
        Ok(ticker(coin_id))
    }

    async fn fetch_coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>> {
        self.record(format!("history:{coin_id}")).await?;
        Ok(history())
    }
}

pub(crate) fn coin_listing(count: usize) -> Vec<CoinSummary> {
    let mut coins = vec![CoinSummary {
        id: "btc-bitcoin".to_string(),
        name: "Bitcoin".to_string(),
        symbol: "BTC".to_string(),
        rank: 1,
        is_new: false,
        is_active: true,
        kind: "coin".to_string(),
    }];
    coins.extend((2..=count).map(|rank| CoinSummary {
        id: format!("c{rank}-coin{rank}"),
        name: format!("Coin {rank}"),
        symbol: format!("C{rank}"),
        rank: rank as u32,
        is_new: false,
        is_active: true,
        kind: "token".to_string(),
    }));
    coins.truncate(count);
    coins
}

pub(crate) fn coin_info(coin_id: &str) -> CoinInfo {
    serde_json::from_value(serde_json::json!({
        "id": coin_id,
        "name": "Bitcoin",
        "symbol": "BTC",
        "rank": 1,
        "is_new": false,
        "is_active": true,
        "type": "coin",
        "description": "Peer-to-peer electronic cash.",
    }))
    .expect("coin info fixture")
}

pub(crate) fn ticker(coin_id: &str) -> Ticker {
    Ticker {
        id: coin_id.to_string(),
        name: "Bitcoin".to_string(),
        symbol: "BTC".to_string(),
        rank: 1,
        circulating_supply: 19_500_000.0,
        total_supply: 19_500_000.0,
        max_supply: 21_000_000.0,
        beta_value: 1.0,
        first_data_at: None,
        last_updated: None,
        quotes: HashMap::from([(
            shared::dto::USD.to_string(),
            Quote {
                price: 63_012.3456,
                percent_change_24h: 1.25,
                ..Quote::default()
            },
        )]),
    }
}

pub(crate) fn history() -> Vec<HistoricalPrice> {
    serde_json::from_value(serde_json::json!([
        {"time_open": 1714521600, "time_close": 1714607999, "open": "60609.49", "high": "60700.00", "low": "56690.30", "close": "58254.01", "volume": "1", "market_cap": 0},
        {"time_open": 1714608000, "time_close": 1714694399, "open": "58254.01", "high": "59600.00", "low": "57900.10", "close": "59123.45", "volume": "1", "market_cap": 0}
    ]))
    .expect("history fixture")
}
