//! # Shared Utility Functions
//!
//! Icon URLs and the display formats the viewer uses for prices and supplies.
//!
//! ```rust
//! use shared::utils::{icon_url, format_usd};
//!
//! assert_eq!(
//!     icon_url("https://coinicons-api.vercel.app/api/icon", "BTC"),
//!     "https://coinicons-api.vercel.app/api/icon/btc"
//! );
//! assert_eq!(format_usd(63012.3456, 3), "$63012.346");
//! ```

/// Icon image URL for a coin: `{base}/{lowercase symbol}`.
pub fn icon_url(base: &str, symbol: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), symbol.to_lowercase())
}

/// `$` followed by the value with exactly `decimals` fraction digits.
pub fn format_usd(value: f64, decimals: usize) -> String {
    format!("${:.*}", decimals, value)
}

/// Supply figure as a plain number: whole values without a fraction.
pub fn format_supply(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Signed percentage with two decimals, e.g. `+1.25%`.
pub fn format_percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_lowercases_symbol() {
        assert_eq!(
            icon_url("https://coinicons-api.vercel.app/api/icon", "BTC"),
            "https://coinicons-api.vercel.app/api/icon/btc"
        );
        assert_eq!(icon_url("http://icons.local/", "Eth"), "http://icons.local/eth");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(63012.3456, 3), "$63012.346");
        assert_eq!(format_usd(0.5, 2), "$0.50");
    }

    #[test]
    fn test_format_supply() {
        assert_eq!(format_supply(21_000_000.0), "21000000");
        assert_eq!(format_supply(0.0), "0");
        assert_eq!(format_supply(1234.5), "1234.5");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.254), "+1.25%");
        assert_eq!(format_percent(-2.0), "-2.00%");
    }
}
