//! Regex processing for textproc
//!
//! This crate provides the pattern side of the text-processing tool:
//! - Pattern validation that never fails the caller
//! - Left-to-right search returning every non-overlapping match
//! - Replace-all with the regex crate's native `$group` substitution syntax
//! - A static catalogue of illustrative patterns and a feature demo
//! - Word and character statistics for input text
//!
//! Malformed patterns are an expected outcome of user input. The
//! non-`try_` operations log them and degrade (empty match list, unchanged
//! text) instead of returning an error.

pub mod catalogue;
pub mod engine;
pub mod error;
pub mod stats;

pub use catalogue::{FeatureDemo, PatternExample, FEATURE_DEMOS, PATTERN_EXAMPLES};
pub use engine::{EngineOptions, RegexEngine};
pub use error::{RegexError, Result};
pub use stats::{char_count, word_count, TextStats};
