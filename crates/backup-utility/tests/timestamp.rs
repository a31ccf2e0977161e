//! Tests for timestamp rounding, rendering, and parsing.
//!
#![allow(missing_docs)]

use backup_utility::{
    ParseTimestampError, format_for_filename, parse_from_filename, round_to_seconds,
};
use chrono::DateTime;

#[test]
fn rounding_truncates_milliseconds() {
    let unrounded = DateTime::from_timestamp_millis(1_495_407_727_034).unwrap();
    let rounded = round_to_seconds(unrounded);

    assert_eq!(rounded.timestamp_millis(), 1_495_407_727_000);
}

#[test]
fn rounding_the_epoch_is_identity() {
    let epoch = DateTime::from_timestamp_millis(0).unwrap();
    assert_eq!(round_to_seconds(epoch), epoch);
}

#[test]
fn rounding_is_idempotent_and_never_rounds_up() {
    let unrounded = DateTime::from_timestamp_millis(1_495_407_727_934).unwrap();
    let once = round_to_seconds(unrounded);

    assert!(once <= unrounded);
    assert_eq!(round_to_seconds(once), once);
}

#[test]
fn renders_fixed_width_utc() {
    let timestamp = DateTime::from_timestamp(999, 0).unwrap();
    assert_eq!(format_for_filename(timestamp), "1970-01-01_00-16-39");
}

#[test]
fn round_trips_through_the_filename_format() {
    let timestamp = DateTime::from_timestamp(1_495_407_727, 0).unwrap();
    let rendered = format_for_filename(timestamp);

    assert_eq!(rendered.chars().count(), 19);
    assert_eq!(parse_from_filename(&rendered).unwrap(), timestamp);
}

#[test]
fn rejects_a_segment_of_the_wrong_width() {
    let result = parse_from_filename("2017-05-21");
    assert!(matches!(result, Err(ParseTimestampError::Width(_))));
}

#[test]
fn rejects_a_malformed_segment() {
    let result = parse_from_filename("aaaa-bb-cc_dd-ee-ff");
    assert!(matches!(result, Err(ParseTimestampError::Parse(..))));
}
