//! # API Client
//!
//! HTTP client for the public market-data endpoints.

use crate::core::config::ViewerConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::CoinApi;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared::dto::{CoinInfo, CoinSummary, HistoricalPrice, Ticker};

/// HTTP client for the market-data API.
///
/// Holds one connection pool for every endpoint; cheap to share behind an
/// `Arc`.
pub struct ApiClient {
    pub(crate) client: Client,
    api_base: String,
    history_base: String,
}

impl ApiClient {
    /// Create a client for the configured endpoints. Requests time out
    /// after `config.http_timeout`.
    pub fn new(config: &ViewerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            history_base: config.history_base.clone(),
        }
    }

    /// `{api_base}{path}`
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `{history_base}?coinId={coin_id}`
    pub(crate) fn history_url(&self, coin_id: &str) -> Result<Url> {
        Url::parse_with_params(&self.history_base, &[("coinId", coin_id)])
            .map_err(|e| AppError::Config(format!("invalid history base URL: {}", e)))
    }

    /// GET a URL and decode its JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let start = std::time::Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                "Request returned error status"
            );
            return Err(AppError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let value = response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Response parse error");
            AppError::from(e)
        })?;

        tracing::debug!(
            url = %url,
            duration_ms = start.elapsed().as_millis(),
            "Request completed"
        );
        Ok(value)
    }
}

#[async_trait::async_trait]
impl CoinApi for ApiClient {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>> {
        crate::services::api::coins::fetch_coins(self).await
    }

    async fn fetch_coin_info(&self, coin_id: &str) -> Result<CoinInfo> {
        crate::services::api::coins::fetch_coin_info(self, coin_id).await
    }

    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<Ticker> {
        crate::services::api::coins::fetch_coin_tickers(self, coin_id).await
    }

    async fn fetch_coin_history(&self, coin_id: &str) -> Result<Vec<HistoricalPrice>> {
        crate::services::api::history::fetch_coin_history(self, coin_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(api_base: &str, history_base: &str) -> ApiClient {
        ApiClient::new(&ViewerConfig {
            api_base: api_base.to_string(),
            history_base: history_base.to_string(),
            ..ViewerConfig::default()
        })
    }

    #[test]
    fn test_api_urls() {
        let client = ApiClient::new(&ViewerConfig::default());
        assert_eq!(client.api_url("/coins"), "https://api.coinpaprika.com/v1/coins");
        assert_eq!(
            client.api_url("/tickers/btc-bitcoin"),
            "https://api.coinpaprika.com/v1/tickers/btc-bitcoin"
        );
    }

    #[test]
    fn test_history_url_carries_coin_id() {
        let client = ApiClient::new(&ViewerConfig::default());
        assert_eq!(
            client.history_url("btc-bitcoin").unwrap().as_str(),
            "https://ohlcv-api.nomadcoders.workers.dev/?coinId=btc-bitcoin"
        );
    }

    #[test]
    fn test_invalid_history_base_is_config_error() {
        let client = client_for("http://localhost", "not a url");
        assert!(matches!(
            client.history_url("btc-bitcoin"),
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is closed on test machines.
        let client = client_for("http://127.0.0.1:9", "http://127.0.0.1:9");
        let result = client.fetch_coins().await;
        assert!(matches!(result, Err(AppError::Network(_))));
    }
}
