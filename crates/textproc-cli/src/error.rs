//! Error types for the command-line front end

use textproc_regex::RegexError;
use textproc_registry::RegistryError;
use thiserror::Error;

/// Result type for front end operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the user by the front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid age: {0}")]
    InvalidAge(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Pattern(#[from] RegexError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Message shown to the user in place of a dialog box
    pub fn user_message(&self) -> String {
        match self {
            CliError::MissingArgument(message) => message.clone(),
            CliError::InvalidAge(_) => "Age must be a valid number.".to_string(),
            CliError::UnknownCommand(command) => {
                format!("Unknown command '{}'. Type 'help' for a list of commands.", command)
            }
            CliError::Pattern(err) => format!("Invalid regex pattern: {}", err.description()),
            CliError::Registry(RegistryError::NotFound(name)) => {
                format!("Person with name {} not found.", name)
            }
            CliError::Registry(RegistryError::DuplicateKey(name)) => {
                format!("Person with name {} already exists.", name)
            }
            CliError::Registry(err) => err.to_string(),
            CliError::Io(err) => format!("Failed to save file: {}", err),
            CliError::Serialize(err) => format!("Failed to render output: {}", err),
        }
    }
}
