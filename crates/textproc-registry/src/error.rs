//! Error types for registry operations

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur in the person registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Person with name {0} not found")]
    NotFound(String),

    #[error("Person with name {0} already exists")]
    DuplicateKey(String),

    #[error("Registry views are inconsistent: {0}")]
    Inconsistent(String),
}
