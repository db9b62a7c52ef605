//! Logging initialization

use textproc_config::LoggingConfig;
use tracing::Level;

/// Pick the max log level from configuration and CLI flags
pub fn log_level(config: &LoggingConfig, verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        config.max_level().unwrap_or(Level::INFO)
    }
}

/// Install the stderr subscriber; stdout carries results only
pub fn init_logging(config: &LoggingConfig, verbose: bool, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level(config, verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
