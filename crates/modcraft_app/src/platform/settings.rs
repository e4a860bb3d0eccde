use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use modcraft_logging::LogDestination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;

pub const SETTINGS_FILENAME: &str = "modcraft.ron";
const DEFAULT_OUTPUT_DIR: &str = "downloads";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Downloaded artifacts land here; created on first download.
    pub output_dir: PathBuf,
    pub log: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log: LogDestination::Terminal,
            log_file: modcraft_logging::default_log_path(),
        }
    }
}

impl AppSettings {
    /// Command-line flags win over the settings file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(target) = cli.log {
            self.log = target.into();
        }
        self
    }
}

/// Reads the settings file. A missing file is not an error and yields `None`.
pub fn load_settings(path: &Path) -> Result<Option<AppSettings>, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
