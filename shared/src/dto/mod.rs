//! # Data Transfer Objects (DTOs)
//!
//! Read-only projections of the remote market-data API. Nothing here is
//! mutated locally; every fetch replaces the previous value wholesale.
//!
//! ## Module Organization
//!
//! - [`coin`] - Listing entries (`GET /coins`) and metadata (`GET /coins/{id}`)
//! - [`ticker`] - Ticker snapshot (`GET /tickers/{id}`)
//! - [`history`] - OHLCV buckets from the history endpoint
//!
//! ## Example JSON
//!
//! ```text
//! GET /v1/coins
//!
//! [
//!   {
//!     "id": "btc-bitcoin",
//!     "name": "Bitcoin",
//!     "symbol": "BTC",
//!     "rank": 1,
//!     "is_new": false,
//!     "is_active": true,
//!     "type": "coin"
//!   }
//! ]
//! ```

pub mod coin;
pub mod history;
pub mod ticker;

pub use coin::*;
pub use history::*;
pub use ticker::*;
