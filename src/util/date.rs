use chrono::{DateTime, NaiveDate, Utc};

/// Errors raised while parsing date fields from request payloads.
#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("Invalid calendar day '{0}' (expected YYYY-MM-DD)")]
    InvalidDay(String),

    #[error("Invalid timestamp '{0}' (expected ISO-8601)")]
    InvalidTimestamp(String),
}

/// Parses a date field coming over the wire.
///
/// Full ISO-8601 timestamps are accepted as-is. A bare 10-character
/// calendar day is expanded to midnight UTC of that day, so partial-precision
/// values never reach the store.
pub fn parse_flexible(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    if value.len() == 10 {
        let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| DateParseError::InvalidDay(value.to_string()))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DateParseError::InvalidDay(value.to_string()))?;
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DateParseError::InvalidTimestamp(value.to_string()))
}
