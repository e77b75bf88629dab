//! Timestamped log lines.
use crate::Result;
use time::{format_description, OffsetDateTime, PrimitiveDateTime};

/// Format description for line timestamps, eg: `2024-03-09 17:04:21`.
pub const TIMESTAMP_FORMAT: &str =
    "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Current wall-clock time formatted for a log line.
///
/// Local time is used when the offset can be determined
/// otherwise falls back to UTC.
pub fn timestamp() -> Result<String> {
    let now = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

fn format_timestamp(datetime: OffsetDateTime) -> Result<String> {
    let format = format_description::parse(TIMESTAMP_FORMAT)?;
    Ok(datetime.format(&format)?)
}

/// Build a log line including the trailing newline.
pub fn format_line(timestamp: &str, message: &str) -> String {
    format!("[{}] {}\n", timestamp, message)
}

/// Split a log line into the timestamp and message.
///
/// Returns `None` when the line does not start with a
/// bracketed timestamp.
pub fn parse_line(line: &str) -> Option<(PrimitiveDateTime, &str)> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let rest = line.strip_prefix('[')?;
    let (timestamp, message) = rest.split_once("] ")?;
    let format = format_description::parse(TIMESTAMP_FORMAT).ok()?;
    let datetime = PrimitiveDateTime::parse(timestamp, &format).ok()?;
    Some((datetime, message))
}
