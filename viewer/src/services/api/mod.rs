//! # Market Data API Client Module
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct, URL building and the shared GET helper
//! ├── coins.rs    - Listing, metadata and ticker endpoints
//! └── history.rs  - OHLCV history endpoint
//! ```

pub mod client;
pub mod coins;
pub mod history;

pub use client::ApiClient;
