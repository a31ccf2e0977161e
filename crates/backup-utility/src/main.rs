//! # backup-utility
//! Incremental, timestamp-driven backups of server folders into per-server
//! archive folders.
//!

use std::{fs, path::PathBuf, process::ExitCode};

use backup_utility::{
    BackupError, Config, Context, backup, backup_folder_for, init_logger, prepare_directories,
    prune, scan_backups, scan_servers, servers_to_backup,
};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    // Initialize config if args include 'init'.
    if std::env::args().any(|arg| arg.eq("init")) {
        let config = Config::default();
        let contents = toml::to_string_pretty(&config).expect("Default config must serialize");

        if let Err(error) = fs::write("config.toml", contents) {
            eprintln!("Could not create config.toml: {error}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    // Load config
    let config = match Config::load_toml(PathBuf::from("./config.toml")) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Could not load config: {error}");
            return ExitCode::FAILURE;
        }
    };

    let level = match config.tracing_level() {
        Ok(level) => level,
        Err(error) => {
            eprintln!("Could not apply config: {error}");
            return ExitCode::FAILURE;
        }
    };

    let _logger = match init_logger(level) {
        Ok(guards) => guards,
        Err(error) => {
            eprintln!("Could not create logger: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Verify the directory structure and create missing backup folders.
    let server_directories = match prepare_directories(&config) {
        Ok(server_directories) => server_directories,
        Err(error) => {
            error!("Could not prepare the directories: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Find when each server last changed.
    let servers = match scan_servers(server_directories) {
        Ok(servers) => servers,
        Err(error) => {
            error!("Could not scan the server folders: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Find the newest archive in each backup folder.
    let backups = match scan_backups(&config.backups_directory) {
        Ok(backups) => backups,
        Err(error) => {
            error!("Could not scan the backup folders: {error}");
            return ExitCode::FAILURE;
        }
    };

    let to_backup = servers_to_backup(&servers, &backups);

    if to_backup.is_empty() {
        info!("All backups were already up-to-date.");
        info!("Backup process complete.");
        return ExitCode::SUCCESS;
    }

    let mut context = Context::default();

    for server in to_backup {
        context.server = Some(server.name.clone());
        context.current_step = "Backup";

        info!("{context}Backing up server");

        let backup_folder = backup_folder_for(&server.name, &config.backups_directory);

        match backup(server, &backup_folder) {
            Ok(archive) => info!("{context}Wrote archive {archive:?}"),

            // An empty server folder is the only per-server recoverable
            // failure; everything else ends the run.
            Err(BackupError::EmptySource) => {
                warn!("{context}Server folder contains no files, skipping.");
                continue;
            }
            Err(error) => {
                error!("{context}Could not back up server: {error}");
                return ExitCode::FAILURE;
            }
        }

        prune(&mut context, &config, &backup_folder);
    }

    info!("Backup process complete.");
    ExitCode::SUCCESS
}
