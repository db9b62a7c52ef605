// Textproc CLI Entry Point

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use textproc_cli::{logging, router, Cli};
use textproc_config::{ConfigManager, ConfigStore};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load_config().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            manager.config_path().display()
        )
    })?;

    logging::init_logging(&config.logging, cli.verbose, cli.quiet);
    tracing::debug!("Starting textproc");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    match router::run(cli.command, &config, stdin.lock(), &mut output) {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
