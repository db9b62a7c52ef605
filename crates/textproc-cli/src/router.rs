//! Dispatch of one-shot subcommands

use std::io::{BufRead, Read, Write};

use textproc_config::AppConfig;
use tracing::debug;

use crate::cli::Commands;
use crate::error::CliResult;
use crate::facade::TextProcessor;
use crate::output::render_matches;
use crate::session::{run_shell, Session};

/// Run `command`, reading text from `input` when it is not given inline
///
/// Returns `false` when the command ran but reports failure, as `validate`
/// does for a pattern that does not compile.
pub fn run<R: BufRead, W: Write>(
    command: Commands,
    config: &AppConfig,
    mut input: R,
    output: &mut W,
) -> CliResult<bool> {
    debug!(?command, "Running command");
    let processor = TextProcessor::from_config(config);

    match command {
        Commands::Search { pattern, text } => {
            let text = text_or_input(text, &mut input)?;
            let matches = processor.search_text(&text, &pattern);
            write_lines(output, &render_matches(&matches, &config.output.no_match_message))?;
        }
        Commands::Replace {
            pattern,
            replacement,
            text,
            output: path,
        } => {
            let text = text_or_input(text, &mut input)?;
            let replaced = processor.replace_text(&text, &pattern, &replacement);
            match path {
                Some(path) => {
                    processor.save_result(&path, &replaced)?;
                    writeln!(output, "Result saved successfully!")?;
                }
                None => writeln!(output, "{}", replaced)?,
            }
        }
        Commands::Validate { pattern } => match processor.check_pattern(&pattern) {
            Ok(()) => writeln!(output, "Pattern is valid: {}", pattern)?,
            Err(e) => {
                writeln!(output, "Pattern is invalid: {}", e.description())?;
                return Ok(false);
            }
        },
        Commands::Examples => write_lines(output, processor.list_examples())?,
        Commands::Demo { text } => {
            let text = text_or_input(text, &mut input)?;
            write_lines(output, &processor.feature_demo(&text))?;
        }
        Commands::Stats { text, json } => {
            let text = text_or_input(text, &mut input)?;
            let stats = processor.text_stats(&text);
            if json {
                writeln!(output, "{}", serde_json::to_string(&stats)?)?;
            } else {
                writeln!(output, "Word Count: {}", stats.words)?;
                writeln!(output, "Character Count: {}", stats.chars)?;
            }
        }
        Commands::Shell { json } => {
            let mut session = Session::new(config).with_json(json);
            run_shell(&mut session, input, output)?;
        }
    }

    output.flush()?;
    Ok(true)
}

fn text_or_input<R: BufRead>(text: Option<String>, input: &mut R) -> CliResult<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            input.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> CliResult<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
