//! Time utilities: parsing HH:MM and ISO-8601 timestamps, duration
//! formatting for the board countdown.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Parse a time of day in HH:MM form.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an ISO-8601 local timestamp, with or without seconds
/// ("2025-07-01T14:30" or "2025-07-01T14:30:00").
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}

/// Storage form: ISO-8601 without seconds, matching what the booking
/// forms submit.
pub fn format_datetime_db(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Board display form, e.g. "01/07/2025 14:30".
pub fn format_datetime_display(dt: NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Render a countdown as "{hours}h{minutes:02}" (e.g. 5400s → "1h30",
/// 59s → "0h00").
///
/// Only called on intervals the evaluator has already established to be
/// non-negative; a negative delta here is a logic error, so fail fast
/// instead of emitting a negative string.
pub fn format_duration(delta: Duration) -> String {
    let total_seconds = delta.num_seconds();
    assert!(total_seconds >= 0, "negative duration passed to format_duration");

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}h{minutes:02}")
}
