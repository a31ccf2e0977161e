//! Packing a server folder into a timestamped archive.
//!

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use walkdir::WalkDir;
use zip::{ZipWriter, result::ZipError, write::SimpleFileOptions};

use crate::{naming, planner::ServerEntry};

/// Pack the full contents of `server`'s folder into a new archive in
/// `backup_folder`, named for the server's last-modified timestamp.
///
/// Creates exactly one new file and never touches existing archives.
/// Returns the path of the archive it wrote.
pub fn backup(server: &ServerEntry, backup_folder: &Path) -> Result<PathBuf, BackupError> {
    let archive_path =
        backup_folder.join(naming::archive_filename_for(&server.name, server.last_modified));

    // Collect the entries up front so an empty server folder fails before
    // the archive file is created.
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(&server.path).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&server.path)
            .expect("Walked paths must be under the server folder");
        let name = archive_entry_name(relative)?;

        if entry.file_type().is_dir() {
            directories.push(name);
        } else if entry.file_type().is_file() {
            files.push((name, entry.path().to_path_buf()));
        }
    }

    if files.is_empty() {
        return Err(BackupError::EmptySource);
    }

    let archive_file = File::create(&archive_path).map_err(BackupError::Create)?;
    let mut writer = ZipWriter::new(archive_file);
    let options = SimpleFileOptions::default();

    for name in directories {
        writer.add_directory(name, options)?;
    }

    for (name, path) in files {
        writer.start_file(name, options)?;

        let mut file = File::open(&path).map_err(BackupError::ReadSource)?;
        io::copy(&mut file, &mut writer).map_err(BackupError::Copy)?;
    }

    writer.finish()?;

    Ok(archive_path)
}

/// A path relative to the server folder, rendered with the `/` separators
/// the archive format expects.
fn archive_entry_name(relative: &Path) -> Result<String, BackupError> {
    let mut name = String::new();

    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or(BackupError::NotUnicode)?;

        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part);
    }

    Ok(name)
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("The server folder contains no files.")]
    EmptySource,

    #[error("Failed to walk the server folder:\n{0}")]
    Walk(#[from] walkdir::Error),

    #[error("A path in the server folder was not valid unicode.")]
    NotUnicode,

    #[error("Failed to create the archive file:\n{0}")]
    Create(#[source] io::Error),

    #[error("Failed to read a file in the server folder:\n{0}")]
    ReadSource(#[source] io::Error),

    #[error("Failed to copy a file into the archive:\n{0}")]
    Copy(#[source] io::Error),

    #[error("Failed to write the archive:\n{0}")]
    Zip(#[from] ZipError),
}
