use crate::error::{MediaLogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "medialog.json";
pub const DEFAULT_DATA_FILE: &str = "medialog.txt";

/// Configuration for medialog, read from `medialog.json` in the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MediaLogConfig {
    /// Path of the pipe-delimited data file, relative to the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for MediaLogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl MediaLogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MediaLogError::Storage)?;
        serde_json::from_str(&content).map_err(|e| {
            MediaLogError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Overrides the data file, e.g. from a command-line flag.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}
