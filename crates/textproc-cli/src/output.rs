//! Rendering of results for display

use textproc_registry::Person;

use crate::error::CliResult;

/// Match list one per line, or `no_match_message` when there is none
pub fn render_matches(matches: &[String], no_match_message: &str) -> Vec<String> {
    if matches.is_empty() {
        vec![no_match_message.to_string()]
    } else {
        matches.to_vec()
    }
}

/// Person rows as `"<name> (<age> years)"`
pub fn render_people<'a>(people: impl IntoIterator<Item = &'a Person>) -> Vec<String> {
    people.into_iter().map(ToString::to_string).collect()
}

/// Person rows as a pretty-printed JSON array
pub fn render_people_json(people: &[&Person]) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(people)?)
}
