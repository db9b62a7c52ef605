//! Textproc command-line front end
//!
//! Wires the regex engine and the person registry to a terminal:
//! - [`facade::TextProcessor`] composes both components
//! - [`session::Session`] keeps input text, the last result and one registry
//!   alive for an interactive shell
//! - [`router::run`] dispatches one-shot subcommands

pub mod cli;
pub mod command;
pub mod error;
pub mod facade;
pub mod logging;
pub mod output;
pub mod router;
pub mod session;

pub use cli::{Cli, Commands};
pub use command::Command;
pub use error::{CliError, CliResult};
pub use facade::TextProcessor;
pub use session::{run_shell, Reply, Session};
