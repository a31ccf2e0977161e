//! # common
//!
// Not every test binary uses every helper.
#![allow(dead_code)]

use std::{
    fs::{self, File},
    path::Path,
    time::{Duration, SystemTime},
};

use chrono::{DateTime, Utc};

/// The UTC timestamp `seconds` after the epoch.
pub fn utc_seconds(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}

/// Pin an entry's modification time to `seconds` after the epoch.
pub fn set_modified(path: &Path, seconds: u64) {
    set_modified_millis(path, seconds * 1_000);
}

/// Pin an entry's modification time to `millis` after the epoch.
pub fn set_modified_millis(path: &Path, millis: u64) {
    let file = File::open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_millis(millis))
        .unwrap();
}

/// Create a file whose modification time is `seconds` after the epoch.
pub fn write_file_modified_at(path: &Path, seconds: u64) {
    fs::write(path, "contents").unwrap();
    set_modified(path, seconds);
}

/// Create a file whose modification time is `millis` after the epoch.
pub fn write_file_modified_at_millis(path: &Path, millis: u64) {
    fs::write(path, "contents").unwrap();
    set_modified_millis(path, millis);
}
