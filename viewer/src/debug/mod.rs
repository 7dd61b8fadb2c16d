//! # Debugging and Tracing Infrastructure
//!
//! File-based logging for the viewer plus the switch for the in-UI query
//! inspector.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/viewer.log` (daily rotation)
//! - **Panic logging**: Panics are written to the log with their location
//! - **Query inspector**: Cache entries in a window (toggle with Ctrl+D)
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup and keep the guard alive
//! let _log_guard = debug::init();
//!
//! // Log with structured fields
//! tracing::info!(url = %url, duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `coin_viewer=debug,info`)
//! - `VIEWER_LOG_DIR`: Log directory (default `logs`)
//! - `VIEWER_DEBUG_UI=1`: Open the query inspector at start

pub mod config;
pub mod logger;

pub use config::DebugConfig;

/// Initialize logging. Returns the writer guard; logs are flushed when it drops.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    logger::init(&DebugConfig::from_env())
}
