//! Error types for regex operations

use thiserror::Error;

/// Result type for fallible regex operations
pub type Result<T> = std::result::Result<T, RegexError>;

/// Errors that can occur while compiling a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RegexError {
    pub(crate) fn invalid_pattern(pattern: &str, source: &regex::Error) -> Self {
        RegexError::InvalidPattern {
            pattern: pattern.to_string(),
            message: source.to_string(),
        }
    }

    /// The compiler's description of what is wrong with the pattern
    pub fn description(&self) -> &str {
        match self {
            RegexError::InvalidPattern { message, .. } => message,
        }
    }
}
