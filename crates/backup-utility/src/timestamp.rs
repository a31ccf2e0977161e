//! Conversions between modification times and the timestamp embedded in
//! archive file names.
//!

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

/// The format of the timestamp embedded in archive file names.
pub const FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// The rendered width of [`FILENAME_FORMAT`] in characters.
pub const FILENAME_TIMESTAMP_WIDTH: usize = 19;

/// Truncate a timestamp's sub-second component.
///
/// Idempotent; never rounds up.
pub fn round_to_seconds(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp - TimeDelta::nanoseconds(i64::from(timestamp.timestamp_subsec_nanos()))
}

/// Render a second-rounded timestamp for embedding in an archive file name.
///
/// Always rendered in UTC so the same modification time produces the same
/// file name in every time zone.
pub fn format_for_filename(timestamp: DateTime<Utc>) -> String {
    timestamp.format(FILENAME_FORMAT).to_string()
}

/// Parse a timestamp segment cut from an archive file name.
pub fn parse_from_filename(segment: &str) -> Result<DateTime<Utc>, ParseTimestampError> {
    if segment.chars().count() != FILENAME_TIMESTAMP_WIDTH {
        return Err(ParseTimestampError::Width(segment.to_owned()));
    }

    let timestamp = NaiveDateTime::parse_from_str(segment, FILENAME_FORMAT)
        .map_err(|error| ParseTimestampError::Parse(error, segment.to_owned()))?;

    Ok(timestamp.and_utc())
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ParseTimestampError {
    #[error("The timestamp segment '{0}' is not exactly {FILENAME_TIMESTAMP_WIDTH} characters.")]
    Width(String),

    #[error("Failed to parse the timestamp segment '{1}':\n{0}")]
    Parse(#[source] chrono::ParseError, String),
}
