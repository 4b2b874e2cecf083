//! Application configuration.
//!
//! Loaded from the JSON file named by `DRILLLOG_CONFIG`, or `drilllog.json` in
//! the working directory when present. Every field has a default, so a partial
//! file (or no file at all) is valid.

use crate::error::ConfigError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use std::{env, fs};

pub const CONFIG_ENV: &str = "DRILLLOG_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "drilllog.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
    /// Route shown at startup, e.g. `/upload`.
    pub start_route: String,
    pub toast_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub step_delay_ms: u64,
    /// Share of processed files that end with validation errors.
    pub error_rate: f64,
    pub accepted_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            upload: UploadConfig::default(),
            logging: LoggingConfig::default(),
            start_route: "/".to_string(),
            toast_seconds: 4,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 200,
            error_rate: crate::upload::DEFAULT_ERROR_RATE,
            accepted_extensions: vec!["xlsx".into(), "xls".into(), "csv".into()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl UploadConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

impl AppConfig {
    /// Resolves the config file location and loads it, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.step_delay_ms == 0 {
            return Err(ConfigError::ZeroStepDelay);
        }
        if self.toast_seconds == 0 {
            return Err(ConfigError::ZeroToastLifetime);
        }
        if !(0.0..=1.0).contains(&self.upload.error_rate) {
            return Err(ConfigError::ErrorRateOutOfRange(self.upload.error_rate));
        }
        if self
            .upload
            .accepted_extensions
            .iter()
            .all(|ext| ext.trim().is_empty())
        {
            return Err(ConfigError::NoExtensions);
        }
        self.logging.level_filter()?;
        Ok(())
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_seconds)
    }
}
