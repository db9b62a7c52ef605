//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Regex engine configuration
    pub regex: RegexConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Result rendering configuration
    pub output: OutputConfig,
}

/// Regex engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegexConfig {
    /// Compiled patterns kept in memory; 0 disables the cache
    pub cache_capacity: usize,
    /// Size limit for a compiled pattern, in bytes
    pub size_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    pub level: String,
}

/// Result rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Line shown when a search finds nothing
    pub no_match_message: String,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 64,
            size_limit: 10 * (1 << 20),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_match_message: "No matches found.".to_string(),
        }
    }
}

impl LoggingConfig {
    /// The configured level as a tracing level
    pub fn max_level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

/// Loading, saving and validating configuration
pub trait ConfigStore {
    fn load_config(&self) -> Result<AppConfig>;
    fn save_config(&self, config: &AppConfig) -> Result<()>;
    fn validate_config(&self, config: &AppConfig) -> Result<()>;
}
