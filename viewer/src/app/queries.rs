//! # View Queries
//!
//! Which cache keys each route keeps mounted, and how each key is fetched.
//!
//! | Route                 | Keys                                            |
//! |-----------------------|-------------------------------------------------|
//! | `/`                   | `["allCoins"]`                                  |
//! | `/:coinId`            | `["info", id]`, `["tickers", id]` (5 s)         |
//! | `/:coinId/price`      | the above, then `["price", id]` (10 s)          |
//! | `/:coinId/chart`      | the above, then `["ohlcv", id]` (10 s)          |
//!
//! The tab query mounts only once metadata and ticker have both settled,
//! because the tab view is not rendered before that.

use crate::app::router::{CoinTab, Route};
use crate::core::config::ViewerConfig;
use crate::core::service::CoinApi;
use crate::query::key::{ALL_COINS, INFO, OHLCV, PRICE, TICKERS};
use crate::query::{QueryClient, QueryDef, QueryHandle, QueryKey, QueryOptions};
use shared::dto::{CoinInfo, CoinSummary, HistoricalPrice, Ticker};
use std::sync::Arc;

/// Keys the current route needs mounted right now.
pub(crate) fn wanted_keys(route: &Route, client: &QueryClient) -> Vec<QueryKey> {
    match route {
        Route::Coins => vec![QueryKey::all_coins()],
        Route::Coin { coin_id, tab } => {
            let info = QueryKey::info(coin_id);
            let tickers = QueryKey::tickers(coin_id);
            let detail_ready = !client.is_loading(&info) && !client.is_loading(&tickers);

            let mut keys = vec![info, tickers];
            if detail_ready {
                match tab {
                    Some(CoinTab::Price) => keys.push(QueryKey::price(coin_id)),
                    Some(CoinTab::Chart) => keys.push(QueryKey::ohlcv(coin_id)),
                    None => {}
                }
            }
            keys
        }
    }
}

/// Mount an observer for `key` with the fetch function and interval it uses.
pub(crate) fn mount(
    key: &QueryKey,
    client: &QueryClient,
    api: &Arc<dyn CoinApi>,
    config: &ViewerConfig,
) -> Option<QueryHandle> {
    let api = Arc::clone(api);
    let handle = match (key.name(), key.coin_id()) {
        (ALL_COINS, _) => client.observe(all_coins(api)),
        (INFO, Some(coin_id)) => client.observe(coin_info(api, coin_id)),
        (TICKERS, Some(coin_id)) => client.observe(
            coin_tickers(api, coin_id)
                .with_options(QueryOptions::refetch_every(config.ticker_refresh)),
        ),
        (OHLCV | PRICE, Some(coin_id)) => client.observe(
            coin_history(api, key.clone(), coin_id)
                .with_options(QueryOptions::refetch_every(config.history_refresh)),
        ),
        _ => {
            tracing::warn!(key = %key, "No query registered for key");
            return None;
        }
    };
    Some(handle)
}

pub(crate) fn all_coins(api: Arc<dyn CoinApi>) -> QueryDef<Vec<CoinSummary>> {
    QueryDef::new(QueryKey::all_coins(), move || {
        let api = Arc::clone(&api);
        async move { api.fetch_coins().await }
    })
}

pub(crate) fn coin_info(api: Arc<dyn CoinApi>, coin_id: &str) -> QueryDef<CoinInfo> {
    let id = coin_id.to_string();
    QueryDef::new(QueryKey::info(coin_id), move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        async move { api.fetch_coin_info(&id).await }
    })
}

pub(crate) fn coin_tickers(api: Arc<dyn CoinApi>, coin_id: &str) -> QueryDef<Ticker> {
    let id = coin_id.to_string();
    QueryDef::new(QueryKey::tickers(coin_id), move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        async move { api.fetch_coin_tickers(&id).await }
    })
}

/// History series under either tab's key; the two tabs cache separately.
pub(crate) fn coin_history(
    api: Arc<dyn CoinApi>,
    key: QueryKey,
    coin_id: &str,
) -> QueryDef<Vec<HistoricalPrice>> {
    let id = coin_id.to_string();
    QueryDef::new(key, move || {
        let api = Arc::clone(&api);
        let id = id.clone();
        async move { api.fetch_coin_history(&id).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::MockCoinApi;
    use tokio::time::Duration;

    #[test]
    fn test_listing_wants_all_coins() {
        let client = QueryClient::new(Duration::from_secs(300));
        assert_eq!(wanted_keys(&Route::Coins, &client), vec![QueryKey::all_coins()]);
    }

    #[test]
    fn test_tab_key_waits_for_detail() {
        let client = QueryClient::new(Duration::from_secs(300));
        let route = Route::parse("/btc-bitcoin/price");

        assert_eq!(
            wanted_keys(&route, &client),
            vec![QueryKey::info("btc-bitcoin"), QueryKey::tickers("btc-bitcoin")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_key_follows_active_tab_once_ready() {
        let client = QueryClient::new(Duration::from_secs(300));
        let api: Arc<dyn CoinApi> = Arc::new(MockCoinApi::new());
        let info = coin_info(Arc::clone(&api), "btc-bitcoin");
        let tickers = coin_tickers(Arc::clone(&api), "btc-bitcoin");
        client.fetch(&info.key, &info.query_fn).await.unwrap();
        client.fetch(&tickers.key, &tickers.query_fn).await.unwrap();

        let price = wanted_keys(&Route::parse("/btc-bitcoin/price"), &client);
        assert_eq!(price.last(), Some(&QueryKey::price("btc-bitcoin")));

        let chart = wanted_keys(&Route::parse("/btc-bitcoin/chart"), &client);
        assert_eq!(chart.last(), Some(&QueryKey::ohlcv("btc-bitcoin")));

        assert_eq!(wanted_keys(&Route::parse("/btc-bitcoin"), &client).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_unknown_key_is_none() {
        let client = QueryClient::new(Duration::from_secs(300));
        let api: Arc<dyn CoinApi> = Arc::new(MockCoinApi::new());
        let config = ViewerConfig::default();

        assert!(mount(&QueryKey::new("volume"), &client, &api, &config).is_none());
        assert!(mount(&QueryKey::new(INFO), &client, &api, &config).is_none());
        assert!(mount(&QueryKey::all_coins(), &client, &api, &config).is_some());
    }
}
