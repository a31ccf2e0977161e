//! The backup decision: which servers changed since their latest archive.
//!

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::{
    naming::{self, LatestArchiveError},
    scan::{self, ScanError},
    timestamp,
};

/// A server folder and when its contents last changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    /// The server's folder name.
    pub name: String,

    /// The server's folder.
    pub path: PathBuf,

    /// The most recent modification anywhere under the folder,
    /// second-rounded.
    pub last_modified: DateTime<Utc>,
}

/// A per-server backup folder and the timestamp of its newest archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// The backup folder's name, matching the server it belongs to.
    pub server_name: String,

    /// The backup folder.
    pub path: PathBuf,

    /// The timestamp embedded in the newest archive's name, or the epoch
    /// when the folder holds no archives.
    pub latest_archive: DateTime<Utc>,
}

/// Scan every server folder for its most recent modification.
pub fn scan_servers(server_directories: Vec<PathBuf>) -> Result<Vec<ServerEntry>, PlanError> {
    let mut servers = Vec::with_capacity(server_directories.len());

    for path in server_directories {
        let name = folder_name(&path)?;
        let last_modified = timestamp::round_to_seconds(scan::most_recent_modification(&path)?);

        debug!("Found server '{name}' last modified {last_modified}.");
        servers.push(ServerEntry {
            name,
            path,
            last_modified,
        });
    }

    Ok(servers)
}

/// Scan every backup folder under `backups_root` for its newest archive.
pub fn scan_backups(backups_root: &Path) -> Result<Vec<BackupEntry>, PlanError> {
    let mut backups = Vec::new();

    for path in scan::list_subdirectories(backups_root)? {
        let server_name = folder_name(&path)?;

        let latest_archive = match naming::latest_archive_in(&path)? {
            Some(found) => {
                let latest_archive = timestamp::round_to_seconds(found);
                debug!("Found most recent archive for server '{server_name}': {latest_archive}.");
                latest_archive
            }
            None => {
                debug!("Backup folder for server '{server_name}' is empty. A backup will be made.");
                DateTime::UNIX_EPOCH
            }
        };

        backups.push(BackupEntry {
            server_name,
            path,
            latest_archive,
        });
    }

    Ok(backups)
}

/// Decide which servers need a new backup.
///
/// With no backup folders at all, every server is selected. Otherwise a
/// server is selected when its folder changed strictly after its newest
/// archive; equal timestamps do not trigger a backup. A server with no
/// matching backup folder compares against the epoch. Output order follows
/// `servers`.
pub fn servers_to_backup<'servers>(
    servers: &'servers [ServerEntry],
    backups: &[BackupEntry],
) -> Vec<&'servers ServerEntry> {
    if backups.is_empty() {
        debug!("No backups were found. All servers will be backed up.");
        return servers.iter().collect();
    }

    servers
        .iter()
        .filter(|server| {
            let latest_archive = backups
                .iter()
                .find(|backup| backup.server_name == server.name)
                .map_or(DateTime::UNIX_EPOCH, |backup| backup.latest_archive);

            server.last_modified > latest_archive
        })
        .collect()
}

fn folder_name(path: &Path) -> Result<String, PlanError> {
    path.file_name()
        .and_then(OsStr::to_str)
        .map(str::to_owned)
        .ok_or_else(|| PlanError::NotUnicode(path.to_path_buf()))
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Failed to scan a server folder:\n{0}")]
    Scan(#[from] ScanError),

    #[error("Failed to determine the latest archive:\n{0}")]
    LatestArchive(#[from] LatestArchiveError),

    #[error("The folder name of {0:?} was not valid unicode.")]
    NotUnicode(PathBuf),
}
