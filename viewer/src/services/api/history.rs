//! # History Endpoint
//!
//! OHLCV series from the history service, which lives on its own host.

use super::client::ApiClient;
use crate::core::error::Result;
use shared::dto::HistoricalPrice;

/// `GET {history_base}?coinId={coin_id}`
#[tracing::instrument(skip(client), fields(coin_id = %coin_id))]
pub async fn fetch_coin_history(client: &ApiClient, coin_id: &str) -> Result<Vec<HistoricalPrice>> {
    let url = client.history_url(coin_id)?;
    tracing::debug!(url = %url, "Fetching price history");

    let history = client.get_json::<Vec<HistoricalPrice>>(url.as_str()).await?;
    tracing::debug!(bucket_count = history.len(), "Price history fetched");
    Ok(history)
}
