//! In-memory person registry
//!
//! Records are keyed by name and reachable through three views:
//! - insertion-ordered listing
//! - a set with name-based equality
//! - name lookup
//!
//! All mutation goes through [`PersonRegistry`], which keeps the views
//! consistent. Lookups of unknown names report `NotFound` and leave the
//! registry untouched.

pub mod error;
pub mod models;
pub mod registry;

pub use error::{RegistryError, Result};
pub use models::{Person, PersonName};
pub use registry::PersonRegistry;
