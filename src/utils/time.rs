//! Timestamp utilities: parse user input, store as ISO-8601, show localized.

use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an RFC 3339 timestamp (`2024-01-01T09:00:00Z`, `2024-01-01T10:00:00+01:00`).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<DateTime<Utc>> {
    match input {
        Some(s) => parse_timestamp(s),
        None => Ok(now()),
    }
}

/// Stored form: UTC, `Z` suffix, sub-second digits only when present.
pub fn to_iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Render `ts` in the local timezone with a chrono format string; an invalid
/// format falls back to RFC 3339.
pub fn localize(ts: &DateTime<Utc>, fmt: &str) -> String {
    let local = ts.with_timezone(&Local);
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return local.to_rfc3339_opts(SecondsFormat::Secs, false);
    }
    local.format(fmt).to_string()
}

/// Localize a stored ISO string; unparsable values are returned unchanged.
pub fn localize_iso(raw: &str, fmt: &str) -> String {
    match parse_timestamp(raw) {
        Ok(ts) => localize(&ts, fmt),
        Err(_) => raw.to_string(),
    }
}
