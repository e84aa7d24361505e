use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use quotes_engine::{EngineConfig, FetchSettings, DEFAULT_ENDPOINT};
use quotes_logging::{parse_level, LogDestination};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Args;

const CONFIG_FILENAME: &str = "config.ron";
const LOG_FILENAME: &str = "quotes.log";
const APP_DIR_NAME: &str = "quote-manager";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("Config validation failed: {message}")]
    Invalid { message: String },
}

/// On-disk configuration; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub endpoint: String,
    pub fetch_limit: usize,
    pub sync_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub auto_sync: bool,
    pub offline: bool,
    pub log_level: String,
    pub log_destination: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fetch_limit: 5,
            sync_interval_secs: 20,
            request_timeout_secs: 15,
            auto_sync: true,
            offline: false,
            log_level: "info".to_string(),
            log_destination: "file".to_string(),
        }
    }
}

/// Validated settings the app runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    /// `None` in offline mode.
    pub engine: Option<EngineConfig>,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn resolve(args: &Args) -> Result<Settings, ConfigError> {
        let default_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| default_dir.join(CONFIG_FILENAME));
        let required = args.config.is_some();

        let mut config = Self::load_from(&path, required)?;
        config.apply_args(args);
        config.into_settings(default_dir)
    }

    /// Missing files yield defaults unless `required` is set.
    pub fn load_from(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() && !required {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(dir) = &args.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(secs) = args.sync_interval {
            self.sync_interval_secs = secs;
        }
        if args.no_sync {
            self.auto_sync = false;
        }
        if args.offline {
            self.offline = true;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if let Some(dest) = &args.log_to {
            self.log_destination = dest.clone();
        }
    }

    fn into_settings(self, default_dir: PathBuf) -> Result<Settings, ConfigError> {
        let invalid = |message: String| ConfigError::Invalid { message };

        if self.endpoint.trim().is_empty() {
            return Err(invalid("endpoint cannot be empty".to_string()));
        }
        if self.fetch_limit == 0 {
            return Err(invalid("fetch_limit must be at least 1".to_string()));
        }
        if self.sync_interval_secs == 0 {
            return Err(invalid("sync_interval_secs must be at least 1".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs must be at least 1".to_string()));
        }
        let log_level = parse_level(&self.log_level)
            .ok_or_else(|| invalid(format!("unsupported log level `{}`", self.log_level)))?;
        let log_destination = LogDestination::parse(&self.log_destination).ok_or_else(|| {
            invalid(format!(
                "unsupported log destination `{}`; expected file|terminal|both",
                self.log_destination
            ))
        })?;

        let data_dir = self.data_dir.unwrap_or(default_dir);
        let engine = (!self.offline).then(|| EngineConfig {
            fetch: FetchSettings {
                endpoint: self.endpoint.trim().to_string(),
                limit: self.fetch_limit,
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
            sync_period: self
                .auto_sync
                .then(|| Duration::from_secs(self.sync_interval_secs)),
        });

        Ok(Settings {
            log_path: data_dir.join(LOG_FILENAME),
            data_dir,
            engine,
            log_level,
            log_destination,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
