//! Shell command parsing
//!
//! One command per line. The first word selects the command and everything
//! after the single separator that follows it is the argument text, kept
//! exactly as typed. Input checks that a form would do before calling the
//! core (empty pattern, missing name or age, non-numeric age) happen here.

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

const MISSING_PATTERN: &str = "Please enter a valid regex pattern.";
const MISSING_NAME_AND_AGE: &str = "Please enter both name and age.";
const MISSING_NAME: &str = "Please enter the name of the person.";
const MISSING_PATH: &str = "Please enter a file path.";

/// Separates pattern and replacement when either contains whitespace
pub const REPLACE_DELIMITER: &str = " => ";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input text
    Text(String),
    /// Append a line to the input text
    Append(String),
    Search(String),
    Replace { pattern: String, replacement: String },
    Validate(String),
    Examples,
    Demo,
    Stats,
    Create { name: String, age: u32 },
    Update { name: String, age: u32 },
    Delete(String),
    Lookup(String),
    List,
    Unique,
    /// Print the current result
    Result,
    Save(PathBuf),
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; blank lines and `#` comments yield `None`
    pub fn parse(line: &str) -> CliResult<Option<Command>> {
        let line = line.trim_start();
        if line.trim_end().is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match word.to_lowercase().as_str() {
            "text" => Command::Text(rest.to_string()),
            "append" => Command::Append(rest.to_string()),
            "search" | "find" => Command::Search(required(rest, MISSING_PATTERN)?),
            "replace" => {
                let (pattern, replacement) = split_replace(rest);
                Command::Replace {
                    pattern: required(pattern, MISSING_PATTERN)?,
                    replacement: replacement.to_string(),
                }
            }
            "validate" => Command::Validate(required(rest, MISSING_PATTERN)?),
            "examples" => Command::Examples,
            "demo" => Command::Demo,
            "stats" => Command::Stats,
            "create" | "add" => {
                let (name, age) = name_and_age(rest)?;
                Command::Create { name, age }
            }
            "update" => {
                let (name, age) = name_and_age(rest)?;
                Command::Update { name, age }
            }
            "delete" | "remove" => Command::Delete(required(rest.trim(), MISSING_NAME)?),
            "lookup" | "get" => Command::Lookup(required(rest.trim(), MISSING_NAME)?),
            "list" => Command::List,
            "unique" => Command::Unique,
            "result" => Command::Result,
            "save" => Command::Save(PathBuf::from(required(rest.trim(), MISSING_PATH)?)),
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CliError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(value: &str, message: &str) -> CliResult<String> {
    if value.is_empty() {
        Err(CliError::MissingArgument(message.to_string()))
    } else {
        Ok(value.to_string())
    }
}

/// Split `"<pattern> => <replacement>"`, or `"<pattern> <replacement>"` at the
/// first whitespace when there is no delimiter
fn split_replace(rest: &str) -> (&str, &str) {
    rest.split_once(REPLACE_DELIMITER)
        .or_else(|| rest.split_once(char::is_whitespace))
        .unwrap_or((rest, ""))
}

/// Split `"<name> <age>"`, where the name may itself contain spaces
fn name_and_age(rest: &str) -> CliResult<(String, u32)> {
    let (name, age) = rest
        .trim()
        .rsplit_once(char::is_whitespace)
        .map(|(name, age)| (name.trim(), age))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| CliError::MissingArgument(MISSING_NAME_AND_AGE.to_string()))?;

    let age = age
        .parse::<u32>()
        .map_err(|_| CliError::InvalidAge(age.to_string()))?;
    Ok((name.to_string(), age))
}

/// Lines printed by `help`
pub const HELP_LINES: &[&str] = &[
    "text <input>                  set the input text",
    "append <line>                 append a line to the input text",
    "search <pattern>              list every match in the input text",
    "replace <pattern> [repl]      replace every match ($1, ${name} expand groups)",
    "replace <pattern> => <repl>   same, when pattern or replacement has spaces",
    "validate <pattern>            check whether a pattern compiles",
    "examples                      show example patterns",
    "demo                          run the example patterns against the input text",
    "stats                         word and character counts of the input text",
    "create <name> <age>           add a person",
    "update <name> <age>           change a person's age",
    "delete <name>                 remove a person",
    "lookup <name>                 show a person",
    "list                          all persons in insertion order",
    "unique                        all persons as a set",
    "result                        show the current result",
    "save <path>                   write the current result to a file",
    "clear                         clear input and results",
    "quit                          leave the shell",
];
