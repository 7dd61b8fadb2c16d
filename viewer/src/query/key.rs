//! Composite cache keys

use std::fmt;

pub const ALL_COINS: &str = "allCoins";
pub const INFO: &str = "info";
pub const TICKERS: &str = "tickers";
/// History series shown by the Chart tab
pub const OHLCV: &str = "ohlcv";
/// History series shown by the Price tab
pub const PRICE: &str = "price";

/// Operation name plus optional coin id, e.g. `["info", "btc-bitcoin"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    name: &'static str,
    coin_id: Option<String>,
}

impl QueryKey {
    pub fn new(name: &'static str) -> Self {
        Self { name, coin_id: None }
    }

    pub fn for_coin(name: &'static str, coin_id: impl Into<String>) -> Self {
        Self {
            name,
            coin_id: Some(coin_id.into()),
        }
    }

    pub fn all_coins() -> Self {
        Self::new(ALL_COINS)
    }

    pub fn info(coin_id: &str) -> Self {
        Self::for_coin(INFO, coin_id)
    }

    pub fn tickers(coin_id: &str) -> Self {
        Self::for_coin(TICKERS, coin_id)
    }

    pub fn ohlcv(coin_id: &str) -> Self {
        Self::for_coin(OHLCV, coin_id)
    }

    pub fn price(coin_id: &str) -> Self {
        Self::for_coin(PRICE, coin_id)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn coin_id(&self) -> Option<&str> {
        self.coin_id.as_deref()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coin_id {
            Some(coin_id) => write!(f, "[\"{}\", \"{}\"]", self.name, coin_id),
            None => write!(f, "[\"{}\"]", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_differ_by_name_and_coin() {
        assert_ne!(QueryKey::info("btc-bitcoin"), QueryKey::tickers("btc-bitcoin"));
        assert_ne!(QueryKey::info("btc-bitcoin"), QueryKey::info("eth-ethereum"));
        assert_ne!(QueryKey::price("btc-bitcoin"), QueryKey::ohlcv("btc-bitcoin"));
        assert_eq!(QueryKey::info("btc-bitcoin").coin_id(), Some("btc-bitcoin"));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(QueryKey::all_coins().to_string(), r#"["allCoins"]"#);
        assert_eq!(
            QueryKey::tickers("btc-bitcoin").to_string(),
            r#"["tickers", "btc-bitcoin"]"#
        );
    }
}
