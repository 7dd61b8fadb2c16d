//! # Core Abstractions
//!
//! Error type, configuration and the service trait the rest of the viewer is
//! written against.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`config`]**: Endpoint and refresh settings (`ViewerConfig`)
//! - **[`service`]**: Market-data trait for dependency injection (`CoinApi`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use coin_viewer::core::{CoinApi, ViewerConfig};
//! use coin_viewer::services::api::ApiClient;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn CoinApi> = Arc::new(ApiClient::new(&ViewerConfig::default()));
//! ```
//!
//! Tests drive the query layer and the app through a mock implementation of
//! the same trait.

pub mod config;
pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use config::ViewerConfig;
pub use error::{AppError, Result};
pub use service::CoinApi;
