//! # Coin Endpoints
//!
//! Listing, metadata and ticker queries against the market-data API.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::{CoinInfo, CoinSummary, Ticker};

/// `GET {api_base}/coins`
#[tracing::instrument(skip(client))]
pub async fn fetch_coins(client: &ApiClient) -> Result<Vec<CoinSummary>> {
    let url = client.api_url("/coins");
    tracing::debug!("Fetching coin listing");

    let coins = client.get_json::<Vec<CoinSummary>>(&url).await?;
    tracing::debug!(coin_count = coins.len(), "Coin listing fetched");
    Ok(coins)
}

/// `GET {api_base}/coins/{coin_id}`
#[tracing::instrument(skip(client), fields(coin_id = %coin_id))]
pub async fn fetch_coin_info(client: &ApiClient, coin_id: &str) -> Result<CoinInfo> {
    let url = client.api_url(&format!("/coins/{}", coin_id));
    tracing::debug!("Fetching coin info");

    client.get_json::<CoinInfo>(&url).await
}

/// `GET {api_base}/tickers/{coin_id}`
#[tracing::instrument(skip(client), fields(coin_id = %coin_id))]
pub async fn fetch_coin_tickers(client: &ApiClient, coin_id: &str) -> Result<Ticker> {
    let url = client.api_url(&format!("/tickers/{}", coin_id));
    tracing::debug!("Fetching ticker");

    let ticker = client.get_json::<Ticker>(&url).await?;
    if let Some(usd) = ticker.usd() {
        tracing::trace!(price = usd.price, "Ticker fetched");
    }
    Ok(ticker)
}
