/// Dashboard configuration.
///
/// Loaded from an optional JSON file; every key has a default. The watched
/// path may also come from the command line, which takes precedence.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::animation::AnimationSettings;

pub const DEFAULT_TITLE: &str = "Home NAS (Network Attached Storage)";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory to watch. Falls back to the working directory.
    pub watch_path: Option<PathBuf>,
    /// Window and header title.
    pub title: String,
    pub rain_interval_ms: u64,
    pub mouth_interval_ms: u64,
    pub rain_rows: usize,
    pub rain_columns: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let animation = AnimationSettings::default();
        Self {
            watch_path: None,
            title: DEFAULT_TITLE.to_owned(),
            rain_interval_ms: animation.rain_interval.as_millis() as u64,
            mouth_interval_ms: animation.mouth_interval.as_millis() as u64,
            rain_rows: animation.rain_rows,
            rain_columns: animation.rain_columns,
        }
    }
}

impl DashboardConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rain_interval_ms == 0 || self.mouth_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation intervals must be at least 1 ms".to_owned(),
            ));
        }
        if self.rain_rows == 0 || self.rain_columns == 0 {
            return Err(ConfigError::Invalid(
                "rain_rows and rain_columns must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }

    /// Pick the watched path: `cli` wins, then the config file, then the
    /// working directory.
    pub fn resolve_watch_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.watch_path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn animation(&self) -> AnimationSettings {
        AnimationSettings {
            rain_interval: Duration::from_millis(self.rain_interval_ms),
            mouth_interval: Duration::from_millis(self.mouth_interval_ms),
            rain_rows: self.rain_rows,
            rain_columns: self.rain_columns,
        }
    }
}
