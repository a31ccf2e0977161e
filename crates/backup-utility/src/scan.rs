//! Directory tree scanning.
//!

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use walkdir::WalkDir;

/// Recursively find the most recent modification time within `root`.
///
/// Every entry under `root` is visited, `root` itself included, so a
/// directory with no descendants yields its own modification time.
pub fn most_recent_modification(root: &Path) -> Result<DateTime<Utc>, ScanError> {
    WalkDir::new(root)
        .into_iter()
        .try_fold(DateTime::UNIX_EPOCH, |most_recent, entry| {
            let modified = entry?.metadata()?.modified().map_err(ScanError::Modified)?;

            Ok(most_recent.max(DateTime::from(modified)))
        })
}

/// List the immediate child directories of `root`.
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut subdirectories = Vec::new();

    for entry in fs::read_dir(root).map_err(ScanError::ReadDirectory)? {
        let entry = entry.map_err(ScanError::ReadDirectory)?;
        let file_type = entry.file_type().map_err(ScanError::Metadata)?;

        if file_type.is_dir() {
            subdirectories.push(entry.path());
        }
    }

    Ok(subdirectories)
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk the directory tree:\n{0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read a modification time:\n{0}")]
    Modified(#[source] io::Error),

    #[error("Failed to read the directory:\n{0}")]
    ReadDirectory(#[source] io::Error),

    #[error("Failed to read an entry's metadata:\n{0}")]
    Metadata(#[source] io::Error),
}
