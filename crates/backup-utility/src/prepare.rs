//! Pre-run checks on the servers and backups directory structure.
//!

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use tracing::info;

use crate::{
    Config, naming,
    scan::{self, ScanError},
};

/// Verify the servers directory, set up the backups directory, and create
/// the backup folder for every server. Returns the server folders found.
pub fn prepare_directories(config: &Config) -> Result<Vec<PathBuf>, PrepareError> {
    let servers_metadata = fs::metadata(&config.servers_directory)
        .map_err(|_| PrepareError::MissingServersDirectory(config.servers_directory.clone()))?;
    if !servers_metadata.is_dir() {
        return Err(PrepareError::MissingServersDirectory(
            config.servers_directory.clone(),
        ));
    }

    if !config.backups_directory.exists() {
        fs::create_dir_all(&config.backups_directory)
            .map_err(PrepareError::CreateBackupsDirectory)?;
        info!("Backups folder {:?} created successfully.", config.backups_directory);
    }

    let backups_metadata =
        fs::metadata(&config.backups_directory).map_err(PrepareError::BackupsMetadata)?;
    if backups_metadata.permissions().readonly() {
        return Err(PrepareError::UnwritableBackupsDirectory(
            config.backups_directory.clone(),
        ));
    }

    let server_directories = scan::list_subdirectories(&config.servers_directory)?;
    if server_directories.is_empty() {
        return Err(PrepareError::NoServers(config.servers_directory.clone()));
    }

    for server in &server_directories {
        let name = server
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PrepareError::NotUnicode(server.clone()))?;

        let backup_folder = naming::backup_folder_for(name, &config.backups_directory);
        if !backup_folder.exists() {
            fs::create_dir(&backup_folder).map_err(PrepareError::CreateBackupFolder)?;
            info!("Backup folder did not exist for '{name}'. Creating folder.");
        }
    }

    Ok(server_directories)
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("The servers directory {0:?} does not exist.")]
    MissingServersDirectory(PathBuf),

    #[error("Failed to create the backups directory:\n{0}")]
    CreateBackupsDirectory(#[source] io::Error),

    #[error("Failed to read the backups directory metadata:\n{0}")]
    BackupsMetadata(#[source] io::Error),

    #[error("The backups directory {0:?} cannot be written to.")]
    UnwritableBackupsDirectory(PathBuf),

    #[error("Failed to list the server folders:\n{0}")]
    ListServers(#[from] ScanError),

    #[error("The servers directory {0:?} does not contain any server folders.")]
    NoServers(PathBuf),

    #[error("The folder name of {0:?} was not valid unicode.")]
    NotUnicode(PathBuf),

    #[error("Failed to create a backup folder:\n{0}")]
    CreateBackupFolder(#[source] io::Error),
}
