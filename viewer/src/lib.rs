//! # Coin Viewer - Library Root
//!
//! A **native desktop viewer** for cryptocurrency listings, live tickers and
//! price charts backed by a public market-data API.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Coin listing**: Top 20 coins with icons
//! - **Coin detail**: Metadata, USD price and supply, ticker refreshed every 5 s
//! - **Charts**: Candlestick (Price tab) and close-price line (Chart tab),
//!   refreshed every 10 s
//! - **Path router**: `/`, `/:coinId`, `/:coinId/price`, `/:coinId/chart`
//!   with back/forward history and an editable path bar
//! - **Query inspector**: Live view of the cache (Ctrl+D)
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              coin-viewer (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui_plot     - Line and candlestick charts           │
//! │  egui_extras   - Icon image loading                    │
//! │  Tokio         - Fetch tasks and refetch timers        │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP                         │ HTTP
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │  Market data API    │      │  OHLCV history API      │
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, router, per-route query mounting
//! - **query**: Keyed cache with deduplication, interval refetch and GC
//! - **services**: HTTP client for the market-data endpoints
//! - **core**: Configuration, errors, the [`CoinApi`](core::CoinApi) trait
//! - **ui**: Screens, widgets, charts, theme, query inspector
//! - **debug**: File logging
//! - **utils**: Runtime construction
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   └─> app (orchestrator)
//!        ├─> query (cache)
//!        ├─> services::api (HTTP)
//!        └─> ui (rendering)
//!             └─> shared (DTOs, chart series, formatting)
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod query;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppState};
pub use crate::core::{AppError, Result};
