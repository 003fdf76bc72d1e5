//! Duration and calendar formatting

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, TimeZone};
use tracing::debug;

use crate::error::FormatError;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parse a seconds count the lenient way: leading whitespace is skipped and
/// parsing stops at the first non-digit
pub fn parse_seconds(input: &str) -> Result<u64, FormatError> {
    let trimmed = input.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    trimmed[..end]
        .parse()
        .map_err(|_| FormatError::InvalidNumber(input.to_string()))
}

/// Format a seconds count as `H:MM:SS`, dropping the hours when zero
pub fn to_hhmmss(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours == 0 {
        format!("{:02}:{:02}", minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Format a date as `YYYY-M-D` without zero padding
pub fn to_yymmdd<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%Y-%-m-%-d").to_string()
}

/// Parse an RFC 3339 timestamp such as `2016-09-06T15:00:18.000Z`
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, FormatError> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|source| FormatError::InvalidTimestamp {
        input: input.to_string(),
        source,
    })
}

/// Render an RFC 3339 timestamp as `MM-dd HH:mm` in `tz`
///
/// An empty input renders as the literal `"null"`.
pub fn time_string_to_mmdd_hhmm<Tz>(input: &str, tz: &Tz) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    debug!(%input, "time_string_to_mmdd_hhmm: called");
    if input.is_empty() {
        return Ok("null".to_string());
    }
    let parsed = parse_timestamp(input)?;
    Ok(parsed.with_timezone(tz).format("%m-%d %H:%M").to_string())
}

/// Render epoch milliseconds as `YYYY-MM-DD HH:mm` in `tz`
pub fn time_to_date_with_zero<Tz>(millis: i64, tz: &Tz) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = tz
        .timestamp_millis_opt(millis)
        .earliest()
        .ok_or(FormatError::OutOfRange(millis))?;
    Ok(date.format("%Y-%m-%d %H:%M").to_string())
}

/// Whole days from `from` to `to`, rounded towards negative infinity
pub fn interval_in_days<A, B>(from: &DateTime<A>, to: &DateTime<B>) -> i64
where
    A: TimeZone,
    B: TimeZone,
{
    (to.timestamp_millis() - from.timestamp_millis()).div_euclid(MILLIS_PER_DAY)
}
