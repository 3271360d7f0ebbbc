//! Boundary parsing for ISO-8601 timestamps and calendar-day keys
//!
//! The embedding application persists wall-clock strings; the core works in
//! chrono values. Parsing fails fast: a string that does not parse is
//! upstream corruption, not something to paper over.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{AnalyticsError, Result};

/// Format of calendar-day keys
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 / RFC 3339 timestamp, normalized to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(AnalyticsError::InvalidTimestamp)
}

/// Parse a `YYYY-MM-DD` calendar-day key.
pub fn parse_day_key(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_KEY_FORMAT).map_err(AnalyticsError::InvalidDate)
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}
