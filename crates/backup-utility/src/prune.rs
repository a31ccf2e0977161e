use std::{ffi::OsString, fs, path::Path};

use tracing::{error, info, warn};

use crate::{Config, Context};

/// Remove archives beyond the newest `pruning.threshold` in `backup_folder`.
///
/// Archive age comes from the filename contract: the fixed-width timestamp
/// makes name order chronological. Failures are logged and skipped; pruning
/// never fails the run.
pub fn prune(context: &mut Context, config: &Config, backup_folder: &Path) {
    context.current_step = "Prune";

    if !config.pruning.enabled {
        return;
    }

    let max_archives = usize::try_from(config.pruning.threshold).unwrap_or(usize::MAX);

    let directory = match fs::read_dir(backup_folder) {
        Ok(directory) => directory,
        Err(error) => {
            error!("{context}Could not read backup folder {backup_folder:?}: {error}");
            return;
        }
    };

    // The name and path of each regular file in the backup folder.
    let mut archives: Vec<(OsString, _)> = directory
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!("{context}Could not read entry: {error}");
                    return None;
                }
            };
            let path = entry.path();

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(error) => {
                    warn!("{context}Could not get entry '{path:?}' metadata: {error}");
                    return None;
                }
            };

            if !file_type.is_file() {
                return None;
            }

            Some((entry.file_name(), path))
        })
        .collect();

    // Sort by name, oldest first.
    archives.sort_by(|a, b| a.0.cmp(&b.0));

    if archives.len() <= max_archives {
        return;
    }

    let excess = archives.len() - max_archives;
    for (_, path) in archives.iter().take(excess) {
        if let Err(error) = fs::remove_file(path) {
            error!("{context}Could not remove archive {path:?}: {error}");
        } else {
            info!("{context}Pruned archive {path:?}");
        }
    }
}
