use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("upload.step_delay_ms must be greater than zero")]
    ZeroStepDelay,
    #[error("toast_seconds must be greater than zero")]
    ZeroToastLifetime,
    #[error("upload.error_rate must be between 0 and 1, got {0}")]
    ErrorRateOutOfRange(f64),
    #[error("upload.accepted_extensions must list at least one extension")]
    NoExtensions,
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("window terminated with an error: {0}")]
    Window(String),
}
