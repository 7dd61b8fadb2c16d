//! # Shared Market Data Types
//!
//! This library defines the contract between the viewer and the public
//! market-data API it reads from. Everything here is plain data plus pure
//! transforms, so it can be tested without a network or a window.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects in the shape the API returns them
//!   - **[`dto::coin`]**: Coin listing entries and per-coin metadata
//!   - **[`dto::ticker`]**: Live ticker snapshots with per-currency quotes
//!   - **[`dto::history`]**: Historical OHLCV buckets
//! - **[`chart`]**: Turns OHLCV buckets into line and candlestick series
//! - **[`utils`]**: Icon URLs and display formatting
//!
//! ## Wire Format
//!
//! All DTOs deserialize from the JSON the API serves:
//! - Field names are **snake_case** on both sides, except `type` which maps to `kind`
//! - Descriptive fields the API omits or nulls are `Option`s
//! - OHLC prices are textual decimals; plain JSON numbers are accepted too
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::history::HistoricalPrice;
//! use shared::chart::line_series;
//!
//! let body = r#"[{"time_open":1,"time_close":2,"open":"1.0","high":"2.0","low":"0.5","close":"1.5","volume":"10","market_cap":0}]"#;
//! let history: Vec<HistoricalPrice> = serde_json::from_str(body).unwrap();
//! assert_eq!(line_series(&history).data, vec![1.5]);
//! ```

pub mod chart;
pub mod dto;
pub mod serde_util;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
