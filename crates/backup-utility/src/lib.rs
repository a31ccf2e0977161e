//! # backup-utility
//! Incremental, timestamp-driven backups of server folders into per-server
//! archive folders.
//!

mod archiver;
mod config;
mod context;
mod logger;
mod naming;
mod planner;
mod prepare;
mod prune;
mod scan;
mod timestamp;

pub use archiver::{BackupError, backup};
pub use config::{Config, LoadConfigError, Pruning};
pub use context::Context;
pub use logger::{LoggerError, init_logger};
pub use naming::{
    ARCHIVE_EXTENSION, LatestArchiveError, archive_filename_for, backup_folder_for,
    latest_archive_in,
};
pub use planner::{
    BackupEntry, PlanError, ServerEntry, scan_backups, scan_servers, servers_to_backup,
};
pub use prepare::{PrepareError, prepare_directories};
pub use prune::prune;
pub use scan::{ScanError, list_subdirectories, most_recent_modification};
pub use timestamp::{
    ParseTimestampError, format_for_filename, parse_from_filename, round_to_seconds,
};
