//! # Historical Price DTOs
//!
//! OHLCV buckets served by the history endpoint. Prices arrive as textual
//! decimals; [`HistoricalPrice`] keeps the text and parses on demand.

use crate::serde_util::{decimal_text, parse_decimal};
use serde::{Deserialize, Serialize};

/// One OHLCV bucket. Times are epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    pub time_open: i64,
    pub time_close: i64,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub open: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub high: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub low: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub close: String,
    #[serde(default, deserialize_with = "decimal_text::deserialize")]
    pub volume: String,
    #[serde(default)]
    pub market_cap: f64,
}

impl HistoricalPrice {
    pub fn open_value(&self) -> f64 {
        parse_decimal(&self.open)
    }

    pub fn high_value(&self) -> f64 {
        parse_decimal(&self.high)
    }

    pub fn low_value(&self) -> f64 {
        parse_decimal(&self.low)
    }

    pub fn close_value(&self) -> f64 {
        parse_decimal(&self.close)
    }

    /// `[open, high, low, close]` as numbers.
    pub fn ohlc(&self) -> [f64; 4] {
        [
            self.open_value(),
            self.high_value(),
            self.low_value(),
            self.close_value(),
        ]
    }

    /// Close price at or above the open.
    pub fn is_bullish(&self) -> bool {
        self.close_value() >= self.open_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_from_textual_json() {
        let body = r#"[{
            "time_open":1714521600,"time_close":1714607999,
            "open":"60609.4979","high":"60609.4979","low":"56690.3005","close":"58254.0125",
            "volume":"48415623409","market_cap":1147393497284
        }]"#;
        let history: Vec<HistoricalPrice> = serde_json::from_str(body).unwrap();
        let bucket = &history[0];

        assert_eq!(bucket.ohlc(), [60609.4979, 60609.4979, 56690.3005, 58254.0125]);
        assert!(!bucket.is_bullish());
        assert_eq!(bucket.market_cap, 1147393497284.0);
        assert_eq!(bucket.time_close, 1714607999);
    }

    #[test]
    fn test_history_accepts_numeric_prices() {
        let body = r#"{"time_open":0,"time_close":86399,"open":1,"high":2.5,"low":0.5,"close":2}"#;
        let bucket: HistoricalPrice = serde_json::from_str(body).unwrap();

        assert_eq!(bucket.ohlc(), [1.0, 2.5, 0.5, 2.0]);
        assert!(bucket.is_bullish());
        assert_eq!(bucket.volume, "");
    }
}
