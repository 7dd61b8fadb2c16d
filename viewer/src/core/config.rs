//! Viewer configuration from environment variables

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.coinpaprika.com/v1";
pub const DEFAULT_HISTORY_BASE: &str = "https://ohlcv-api.nomadcoders.workers.dev";
pub const DEFAULT_ICON_BASE: &str = "https://coinicons-api.vercel.app/api/icon";

/// Endpoints, timeouts and refresh intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Base URL of the listing, metadata and ticker endpoints
    pub api_base: String,
    /// Base URL of the OHLCV history endpoint
    pub history_base: String,
    /// Base URL of the icon service (`{icon_base}/{symbol}`)
    pub icon_base: String,
    /// Upper bound on a single HTTP request
    pub http_timeout: Duration,
    /// Refetch interval of the ticker query
    pub ticker_refresh: Duration,
    /// Refetch interval of the price and chart history queries
    pub history_refresh: Duration,
    /// How long an unobserved cache entry survives
    pub gc_time: Duration,
    /// Path shown at start
    pub start_path: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            history_base: DEFAULT_HISTORY_BASE.to_string(),
            icon_base: DEFAULT_ICON_BASE.to_string(),
            http_timeout: Duration::from_secs(10),
            ticker_refresh: Duration::from_millis(5_000),
            history_refresh: Duration::from_millis(10_000),
            gc_time: Duration::from_secs(300),
            start_path: "/".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source. Unset, empty or
    /// unparsable values fall back to the defaults; durations must be non-zero.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |name: &str, default: String| {
            lookup(name)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };
        let number = |name: &str| {
            lookup(name)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|value| *value > 0)
        };

        Self {
            api_base: text("VIEWER_API_BASE", defaults.api_base),
            history_base: text("VIEWER_HISTORY_BASE", defaults.history_base),
            icon_base: text("VIEWER_ICON_BASE", defaults.icon_base),
            http_timeout: number("VIEWER_HTTP_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            ticker_refresh: number("VIEWER_TICKER_REFRESH_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.ticker_refresh),
            history_refresh: number("VIEWER_HISTORY_REFRESH_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.history_refresh),
            gc_time: number("VIEWER_GC_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.gc_time),
            start_path: lookup("VIEWER_START_PATH")
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.start_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ViewerConfig::from_lookup(|_| None);
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.ticker_refresh, Duration::from_secs(5));
        assert_eq!(config.history_refresh, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("VIEWER_API_BASE", "http://localhost:8080/v1/"),
            ("VIEWER_TICKER_REFRESH_MS", "250"),
            ("VIEWER_GC_SECS", "1"),
            ("VIEWER_START_PATH", "/btc-bitcoin/chart"),
        ]));

        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert_eq!(config.ticker_refresh, Duration::from_millis(250));
        assert_eq!(config.gc_time, Duration::from_secs(1));
        assert_eq!(config.start_path, "/btc-bitcoin/chart");
        assert_eq!(config.history_base, DEFAULT_HISTORY_BASE);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("VIEWER_HTTP_TIMEOUT_SECS", "soon"),
            ("VIEWER_HISTORY_REFRESH_MS", "0"),
            ("VIEWER_ICON_BASE", "   "),
        ]));

        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.history_refresh, Duration::from_secs(10));
        assert_eq!(config.icon_base, DEFAULT_ICON_BASE);
    }
}
