//! Serde helpers for the loosely typed fields the history endpoint serves.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Parse a textual decimal the way the chart layer expects.
///
/// Blank text counts as zero; anything else that fails to parse is `NaN`, so a
/// single malformed bucket shows up as a gap instead of failing the series.
pub fn parse_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Deserialize a decimal that may arrive as a JSON string or a JSON number,
/// keeping it in its textual form.
pub mod decimal_text {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalTextVisitor)
    }

    struct DecimalTextVisitor;

    impl<'de> Visitor<'de> for DecimalTextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal as a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }
}
