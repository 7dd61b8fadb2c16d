//! # Services Module
//!
//! External integrations. The viewer talks to exactly one kind of external
//! system: public HTTP market-data endpoints.
//!
//! ```text
//! services/
//! └── api/        - reqwest client for listings, metadata, tickers and history
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, AppError>`:
//! - Network errors: `AppError::Network`
//! - Non-success statuses: `AppError::Http { status, url }`
//! - Bodies that do not decode: `AppError::Decode`
//!
//! There is no retry and no backoff; the query layer records the error on the
//! cache entry and the next interval tick or mount tries again.

pub mod api;
