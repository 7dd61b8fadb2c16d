//! # Chart Series
//!
//! Pure transforms from OHLCV buckets to the two series the viewer draws:
//! a line of close prices and a candlestick per bucket. Both keep one entry per
//! bucket, in the order the API returned them.

use crate::dto::history::HistoricalPrice;
use chrono::DateTime;

/// Name of the close-price line series.
pub const LINE_SERIES_NAME: &str = "Price";

/// Close prices over time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    /// Close price of each bucket, `NaN` where the text did not parse.
    pub data: Vec<f64>,
    /// UTC label of each bucket's close time.
    pub categories: Vec<String>,
}

impl LineSeries {
    /// `[index, close]` pairs ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, value)| [idx as f64, *value])
            .collect()
    }
}

/// One candlestick: a date label plus `[open, high, low, close]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlePoint {
    pub x: String,
    pub time: i64,
    pub y: [f64; 4],
}

impl CandlePoint {
    pub fn open(&self) -> f64 {
        self.y[0]
    }

    pub fn high(&self) -> f64 {
        self.y[1]
    }

    pub fn low(&self) -> f64 {
        self.y[2]
    }

    pub fn close(&self) -> f64 {
        self.y[3]
    }

    pub fn is_bullish(&self) -> bool {
        self.close() >= self.open()
    }
}

pub fn line_series(history: &[HistoricalPrice]) -> LineSeries {
    LineSeries {
        name: LINE_SERIES_NAME.to_string(),
        data: history.iter().map(HistoricalPrice::close_value).collect(),
        categories: history.iter().map(|bucket| utc_label(bucket.time_close)).collect(),
    }
}

pub fn candlestick_series(history: &[HistoricalPrice]) -> Vec<CandlePoint> {
    history
        .iter()
        .map(|bucket| CandlePoint {
            x: date_label(bucket.time_close),
            time: bucket.time_close,
            y: bucket.ohlc(),
        })
        .collect()
}

/// Full UTC timestamp, e.g. `Wed, 01 May 2024 23:59:59 GMT`.
pub fn utc_label(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|time| time.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
        .unwrap_or_default()
}

/// UTC calendar date as `MM/DD/YYYY`.
pub fn date_label(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|time| time.format("%m/%d/%Y").to_string())
        .unwrap_or_default()
}

/// Lowest low and highest high across the candles, padded by 5% of the span.
///
/// Non-finite values are skipped. Returns `None` when nothing finite remains.
pub fn price_range(candles: &[CandlePoint]) -> Option<(f64, f64)> {
    let mut min = f64::MAX;
    let mut max = f64::MIN;

    for candle in candles {
        for value in candle.y {
            if value.is_finite() {
                min = min.min(value);
                max = max.max(value);
            }
        }
    }

    if min > max {
        return None;
    }

    let padding = (max - min) * 0.05;
    Some((min - padding, max + padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(time_close: i64, ohlc: [&str; 4]) -> HistoricalPrice {
        HistoricalPrice {
            time_open: time_close - 86_399,
            time_close,
            open: ohlc[0].to_string(),
            high: ohlc[1].to_string(),
            low: ohlc[2].to_string(),
            close: ohlc[3].to_string(),
            volume: "0".to_string(),
            market_cap: 0.0,
        }
    }

    fn sample_history() -> Vec<HistoricalPrice> {
        vec![
            bucket(1_714_607_999, ["60609.49", "60700.00", "56690.30", "58254.01"]),
            bucket(1_714_694_399, ["58254.01", "59600.00", "57900.10", "59123.45"]),
            bucket(1_714_780_799, ["59123.45", "63300.00", "58800.00", "62889.83"]),
        ]
    }

    #[test]
    fn test_line_series_has_one_point_per_bucket() {
        let history = sample_history();
        let series = line_series(&history);

        assert_eq!(series.name, "Price");
        assert_eq!(series.data, vec![58254.01, 59123.45, 62889.83]);
        assert_eq!(series.categories.len(), history.len());
        assert_eq!(series.categories[0], "Wed, 01 May 2024 23:59:59 GMT");
        assert_eq!(series.points()[2], [2.0, 62889.83]);
    }

    #[test]
    fn test_line_series_marks_unparsable_close_as_nan() {
        let history = vec![bucket(0, ["1", "1", "1", "oops"])];
        let series = line_series(&history);
        assert_eq!(series.data.len(), 1);
        assert!(series.data[0].is_nan());
    }

    #[test]
    fn test_candlestick_series_keeps_ohlc_order() {
        let history = sample_history();
        let candles = candlestick_series(&history);

        assert_eq!(candles.len(), history.len());
        assert_eq!(candles[0].y, [60609.49, 60700.00, 56690.30, 58254.01]);
        assert_eq!(candles[0].x, "05/01/2024");
        assert!(!candles[0].is_bullish());
        assert!(candles[2].is_bullish());
    }

    #[test]
    fn test_empty_history_gives_empty_series() {
        assert!(line_series(&[]).data.is_empty());
        assert!(candlestick_series(&[]).is_empty());
        assert_eq!(price_range(&[]), None);
    }

    #[test]
    fn test_price_range_pads_span() {
        let candles = vec![CandlePoint {
            x: String::new(),
            time: 0,
            y: [10.0, 20.0, 0.0, 15.0],
        }];
        assert_eq!(price_range(&candles), Some((-1.0, 21.0)));
    }
}
