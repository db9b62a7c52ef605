//! Textproc Configuration Management
//!
//! Loads [`AppConfig`] from an optional TOML file layered under
//! `TEXTPROC_*` environment variables, validates it, and saves it back.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AppConfig, ConfigStore, LoggingConfig, OutputConfig, RegexConfig};
