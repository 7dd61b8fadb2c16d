//! # Common Error Types
//!
//! Consolidated error handling for the viewer.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (DNS, refused, timeout)
//! - **Http**: the server answered with a non-success status
//! - **Decode**: the body was not the JSON shape we expected
//! - **Config**: a configured URL could not be used
//! - **Query**: the cache layer itself failed (type mismatch on a key)
//!
//! `AppError` is `Clone` because one failed fetch is handed to every caller
//! that was waiting on the same deduplicated request.
//!
//! ```rust
//! use coin_viewer::core::error::AppError;
//!
//! let err = AppError::Http { status: 404, url: "https://api.example/coins/x".to_string() };
//! assert_eq!(err.to_string(), "HTTP 404 from https://api.example/coins/x");
//! ```

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Request failed before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid configuration, such as an unparsable base URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache layer failure.
    #[error("Query error: {0}")]
    Query(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Body decode failures become `Decode`, status errors `Http`, everything
/// else `Network`.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => AppError::Http {
                status: status.as_u16(),
                url: err.url().map(|url| url.to_string()).unwrap_or_default(),
            },
            None => AppError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            AppError::Decode("expected value at line 1".to_string()).to_string(),
            "Decode error: expected value at line 1"
        );
    }

    #[test]
    fn test_reqwest_builder_error_converts_to_network() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Network(_)));
    }
}
