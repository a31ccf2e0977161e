//! Archive and backup folder naming.
//!
//! The latest-backup state for a server lives entirely in its archive file
//! names: the last 19 characters of the file stem are always the fixed-width
//! timestamp. Everything that reads or writes that contract lives here.

use std::{
    ffi::{OsStr, OsString},
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::timestamp::{self, FILENAME_TIMESTAMP_WIDTH, ParseTimestampError};

/// The file extension given to every archive.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// The backup folder for a server: `backups_root/<server_name>`.
///
/// Pure path composition; does not touch the filesystem.
pub fn backup_folder_for(server_name: &str, backups_root: &Path) -> PathBuf {
    backups_root.join(server_name)
}

/// The file name for a new archive of `server_name` taken at `timestamp`.
pub fn archive_filename_for(server_name: &str, timestamp: DateTime<Utc>) -> String {
    format!(
        "{server_name}_{}.{ARCHIVE_EXTENSION}",
        timestamp::format_for_filename(timestamp)
    )
}

/// The timestamp embedded in the name of the most recent archive in
/// `backup_folder`, or `None` when the folder holds no regular files.
///
/// The most recent archive is the one whose name sorts lexicographically
/// greatest; that matches most-recent-by-embedded-timestamp because the
/// timestamp format is fixed width.
pub fn latest_archive_in(
    backup_folder: &Path,
) -> Result<Option<DateTime<Utc>>, LatestArchiveError> {
    let mut latest: Option<OsString> = None;

    for entry in fs::read_dir(backup_folder).map_err(LatestArchiveError::ReadFolder)? {
        let entry = entry.map_err(LatestArchiveError::ReadFolder)?;
        let file_type = entry.file_type().map_err(LatestArchiveError::Metadata)?;

        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        if latest.as_ref().is_none_or(|current| *current < name) {
            latest = Some(name);
        }
    }

    match latest {
        Some(name) => Ok(Some(parse_archive_filename(&name)?)),
        None => Ok(None),
    }
}

/// Cut the timestamp segment out of an archive file name and parse it.
fn parse_archive_filename(file_name: &OsStr) -> Result<DateTime<Utc>, LatestArchiveError> {
    let file_name = file_name
        .to_str()
        .ok_or(LatestArchiveError::NotUnicode)?
        .to_owned();

    // Strip the extension. A leading dot is part of the name, not an
    // extension separator.
    let stem = if file_name.find('.').is_some_and(|first| first > 0) {
        file_name
            .rfind('.')
            .and_then(|last| file_name.get(..last))
            .unwrap_or(&file_name)
    } else {
        &file_name
    };

    // The timestamp is always the last 19 characters of the stem.
    let segment = stem
        .len()
        .checked_sub(FILENAME_TIMESTAMP_WIDTH)
        .and_then(|start| stem.get(start..))
        .ok_or_else(|| LatestArchiveError::ParseName {
            source: ParseTimestampError::Width(stem.to_owned()),
            name: file_name.clone(),
        })?;

    timestamp::parse_from_filename(segment).map_err(|source| LatestArchiveError::ParseName {
        source,
        name: file_name.clone(),
    })
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LatestArchiveError {
    #[error("Failed to read the backup folder:\n{0}")]
    ReadFolder(#[source] io::Error),

    #[error("Failed to read an entry's metadata:\n{0}")]
    Metadata(#[source] io::Error),

    #[error("An archive name was not valid unicode.")]
    NotUnicode,

    #[error("Failed to parse the timestamp in archive name '{name}':\n{source}")]
    ParseName {
        #[source]
        source: ParseTimestampError,
        name: String,
    },
}
