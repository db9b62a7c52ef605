//! Interactive session state
//!
//! A session plays the part of the form: it holds the input text and the
//! last result, runs commands against the [`TextProcessor`], and turns
//! outcomes into lines of output.

use std::io::{BufRead, Write};

use textproc_config::AppConfig;
use textproc_registry::Person;
use tracing::warn;

use crate::command::{Command, HELP_LINES};
use crate::error::CliResult;
use crate::facade::TextProcessor;
use crate::output::{render_matches, render_people, render_people_json};

/// Outcome of a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Quit,
}

/// Front end state for one shell run
#[derive(Debug)]
pub struct Session {
    processor: TextProcessor,
    input: String,
    /// Matches of the last search, `None` before any search
    matches: Option<Vec<String>>,
    /// Text produced by the last replace
    replaced: String,
    no_match_message: String,
    json: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Session {
            processor: TextProcessor::from_config(config),
            input: String::new(),
            matches: None,
            replaced: String::new(),
            no_match_message: config.output.no_match_message.clone(),
            json: false,
        }
    }

    /// Print person listings as JSON instead of rows
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn processor(&self) -> &TextProcessor {
        &self.processor
    }

    /// Text that copy or save would use: the replaced text if it is not
    /// empty, otherwise the last match list joined by newlines
    pub fn current_result(&self) -> String {
        if !self.replaced.is_empty() {
            return self.replaced.clone();
        }
        match &self.matches {
            Some(matches) => render_matches(matches, &self.no_match_message).join("\n"),
            None => String::new(),
        }
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> CliResult<Reply> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Reply::Lines(Vec::new())),
        }
    }

    pub fn execute(&mut self, command: Command) -> CliResult<Reply> {
        let lines = match command {
            Command::Text(text) => {
                self.input = text;
                vec![self.stats_line()]
            }
            Command::Append(line) => {
                if !self.input.is_empty() {
                    self.input.push('\n');
                }
                self.input.push_str(&line);
                vec![self.stats_line()]
            }
            Command::Search(pattern) => {
                let matches = self.processor.search_text(&self.input, &pattern);
                let lines = render_matches(&matches, &self.no_match_message);
                self.matches = Some(matches);
                lines
            }
            Command::Replace {
                pattern,
                replacement,
            } => {
                let replaced = self.processor.replace_text(&self.input, &pattern, &replacement);
                self.replaced = replaced.clone();
                vec![replaced]
            }
            Command::Validate(pattern) => match self.processor.check_pattern(&pattern) {
                Ok(()) => vec![format!("Pattern is valid: {}", pattern)],
                Err(e) => vec![format!("Pattern is invalid: {}", e.description())],
            },
            Command::Examples => self.processor.list_examples().to_vec(),
            Command::Demo => self.processor.feature_demo(&self.input),
            Command::Stats => {
                let stats = self.processor.text_stats(&self.input);
                vec![
                    format!("Word Count: {}", stats.words),
                    format!("Character Count: {}", stats.chars),
                ]
            }
            Command::Create { name, age } => {
                self.processor.create_person(&name, age)?;
                vec![format!("Person created: {}", name)]
            }
            Command::Update { name, age } => {
                self.processor.update_person(&name, age)?;
                vec![format!("Person updated: {}", name)]
            }
            Command::Delete(name) => {
                self.processor.delete_person(&name)?;
                vec![format!("Person deleted: {}", name)]
            }
            Command::Lookup(name) => match self.processor.lookup_by_name(&name) {
                Some(person) => vec![person.to_string()],
                None => vec![format!("Person with name {} not found.", name)],
            },
            Command::List => self.render_listing(self.processor.list_all())?,
            Command::Unique => {
                let mut people: Vec<&Person> = self.processor.list_unique().into_iter().collect();
                people.sort_by(|a, b| a.name().cmp(b.name()));
                self.render_listing(people)?
            }
            Command::Result => vec![self.current_result()],
            Command::Save(path) => {
                self.processor.save_result(&path, &self.current_result())?;
                vec!["Result saved successfully!".to_string()]
            }
            Command::Clear => {
                self.input.clear();
                self.matches = None;
                self.replaced.clear();
                vec![self.stats_line()]
            }
            Command::Help => HELP_LINES.iter().map(|line| line.to_string()).collect(),
            Command::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Lines(lines))
    }

    fn render_listing(&self, people: Vec<&Person>) -> CliResult<Vec<String>> {
        if self.json {
            Ok(vec![render_people_json(&people)?])
        } else {
            Ok(render_people(people))
        }
    }

    fn stats_line(&self) -> String {
        let stats = self.processor.text_stats(&self.input);
        format!("Word Count: {}, Character Count: {}", stats.words, stats.chars)
    }
}

/// Read commands from `input` until end of input or `quit`
///
/// A failing command prints its message and the shell keeps going.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(Reply::Lines(lines)) => {
                for line in lines {
                    writeln!(output, "{}", line)?;
                }
            }
            Ok(Reply::Quit) => break,
            Err(e) => {
                warn!(error = %e, "Command failed");
                writeln!(output, "Error: {}", e.user_message())?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
