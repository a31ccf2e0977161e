use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Archive pruning limits.
#[derive(Serialize, Deserialize)]
pub struct Pruning {
    /// Whether archives over the threshold are removed after a backup.
    pub enabled: bool,

    /// The number of archives to keep per server.
    pub threshold: u64,
}

impl Default for Pruning {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 60,
        }
    }
}

/// The utility's config.
#[derive(Serialize, Deserialize)]
pub struct Config {
    /// The folder containing one subfolder per server.
    pub servers_directory: PathBuf,

    /// The folder receiving one backup subfolder per server.
    pub backups_directory: PathBuf,

    /// The logging level.
    pub log_level: String,

    /// Archive pruning limits.
    pub pruning: Pruning,
}

impl Config {
    /// Tries to load a config from a toml file.
    pub fn load_toml(file_path: PathBuf) -> Result<Self, LoadConfigError> {
        if !file_path.exists() {
            return Err(LoadConfigError::NoFile);
        }

        let contents = fs::read_to_string(file_path).map_err(LoadConfigError::Read)?;
        let config: Self = toml::from_str(&contents)?;

        if config.servers_directory.as_os_str().is_empty()
            || config.backups_directory.as_os_str().is_empty()
        {
            return Err(LoadConfigError::UnsetDirectories);
        }

        Ok(config)
    }

    /// The configured logging level.
    pub fn tracing_level(&self) -> Result<Level, LoadConfigError> {
        self.log_level
            .parse()
            .map_err(|_| LoadConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            servers_directory: PathBuf::new(),
            backups_directory: PathBuf::new(),
            log_level: "info".to_owned(),
            pruning: Pruning::default(),
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("The file does not exist.")]
    NoFile,

    #[error("Failed to read the file:\n{0}")]
    Read(#[source] io::Error),

    #[error("Failed to deserialize the file:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("The servers and backups directories must be set in the config.")]
    UnsetDirectories,

    #[error("The log level '{0}' is not valid.")]
    InvalidLogLevel(String),
}
