//! DrillLog Pro: a desktop console for oil well job logs, spreadsheet
//! uploads, reports and system error tracking.
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod upload;
pub mod utils;

pub use app::DrillLogApp;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
