//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Textproc command-line interface
#[derive(Parser, Debug)]
#[command(name = "textproc")]
#[command(version, about = "Regex text processing and a small person registry")]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/textproc/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every match of a pattern
    Search {
        /// Regex pattern
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Replace every match of a pattern
    Replace {
        /// Regex pattern
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Replacement; $1 and ${name} expand capture groups
        #[arg(allow_hyphen_values = true)]
        replacement: String,
        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether a pattern compiles
    Validate {
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },
    /// Show example patterns
    Examples,
    /// Run the example patterns against some text
    Demo {
        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Word and character counts
    Stats {
        /// Input text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read commands from stdin, keeping one person registry for the session
    Shell {
        /// Print person listings as JSON
        #[arg(long)]
        json: bool,
    },
}
