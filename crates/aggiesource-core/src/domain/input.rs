//! Form Input Rules
//!
//! Shared parsing for the text boxes every editor reads.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use super::error::{DomainError, DomainResult};

/// Trim `raw` and fail with `message` when nothing is left.
pub fn required<'a>(raw: &'a str, message: &'static str) -> DomainResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(DomainError::MissingInput(message))
    } else {
        Ok(trimmed)
    }
}

/// Parse a quantity or capacity box.
///
/// Never rejects: empty, negative or unparsable input becomes 0,
/// fractional input truncates toward zero.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Decode a stored timestamp without failing the whole record.
///
/// Accepts an RFC 3339 string or epoch milliseconds; anything else
/// (null, garbage) becomes the Unix epoch.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        log::warn!("[STORE] Unreadable timestamp {}, using epoch", value);
        DateTime::default()
    }))
}
