//! Tests for the interactive session
//! Commands run against a live session the way a user would type them.

use std::io::Cursor;

use tempfile::TempDir;
use textproc_cli::*;
use textproc_config::AppConfig;

fn new_session() -> Session {
    Session::new(&AppConfig::default())
}

fn lines(reply: Reply) -> Vec<String> {
    match reply {
        Reply::Lines(lines) => lines,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn test_search_and_replace_on_input() {
    let mut session = new_session();
    session.handle_line("text cat dog 42").unwrap();

    assert_eq!(lines(session.handle_line(r"search \d+").unwrap()), vec!["42"]);
    assert_eq!(
        lines(session.handle_line(r"replace \d+ #").unwrap()),
        vec!["cat dog #"]
    );
    assert_eq!(session.input(), "cat dog 42");
}

#[test]
fn test_search_without_match_shows_message() {
    let mut session = new_session();
    session.handle_line("text hello").unwrap();
    assert_eq!(
        lines(session.handle_line("search z+").unwrap()),
        vec!["No matches found."]
    );
}

#[test]
fn test_invalid_pattern_keeps_session_usable() {
    let mut session = new_session();
    session.handle_line("text hello").unwrap();

    assert_eq!(
        lines(session.handle_line("search [a-z").unwrap()),
        vec!["No matches found."]
    );
    assert_eq!(
        lines(session.handle_line("replace (h X").unwrap()),
        vec!["hello"]
    );
    let reply = lines(session.handle_line("validate [a-z").unwrap());
    assert!(reply[0].starts_with("Pattern is invalid"));
    assert_eq!(
        lines(session.handle_line("search l+").unwrap()),
        vec!["ll"]
    );
}

#[test]
fn test_person_lifecycle() {
    let mut session = new_session();
    assert_eq!(
        lines(session.handle_line("create Ann 30").unwrap()),
        vec!["Person created: Ann"]
    );
    session.handle_line("create Bob 40").unwrap();
    session.handle_line("update Ann 31").unwrap();

    assert_eq!(
        lines(session.handle_line("list").unwrap()),
        vec!["Ann (31 years)", "Bob (40 years)"]
    );
    assert_eq!(
        lines(session.handle_line("lookup Ann").unwrap()),
        vec!["Ann (31 years)"]
    );

    session.handle_line("delete Ann").unwrap();
    assert_eq!(
        lines(session.handle_line("unique").unwrap()),
        vec!["Bob (40 years)"]
    );
}

#[test]
fn test_registry_errors_are_reported() {
    let mut session = new_session();
    let err = session.handle_line("update Ghost 1").unwrap_err();
    assert_eq!(err.user_message(), "Person with name Ghost not found.");

    let err = session.handle_line("delete Ghost").unwrap_err();
    assert!(matches!(err, CliError::Registry(_)));

    session.handle_line("create Ann 30").unwrap();
    let err = session.handle_line("create Ann 31").unwrap_err();
    assert_eq!(err.user_message(), "Person with name Ann already exists.");

    let err = session.handle_line("create Cid abc").unwrap_err();
    assert_eq!(err.user_message(), "Age must be a valid number.");

    assert_eq!(
        lines(session.handle_line("list").unwrap()),
        vec!["Ann (30 years)"]
    );
}

#[test]
fn test_json_listing() {
    let mut session = new_session().with_json(true);
    session.handle_line("create Ann 30").unwrap();

    let output = lines(session.handle_line("list").unwrap()).join("\n");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!([{ "name": "Ann", "age": 30 }]));
}

#[test]
fn test_stats_and_demo() {
    let mut session = new_session();
    session.handle_line("text  the  quick fox ").unwrap();
    assert_eq!(
        lines(session.handle_line("stats").unwrap()),
        vec!["Word Count: 3", "Character Count: 16"]
    );
    assert_eq!(lines(session.handle_line("demo").unwrap()).len(), 6);
}

#[test]
fn test_input_is_kept_as_typed() {
    let mut session = new_session();
    session.handle_line("text  padded ").unwrap();
    assert_eq!(session.input(), " padded ");

    session.handle_line("append  tail").unwrap();
    assert_eq!(session.input(), " padded \n tail");
}

#[test]
fn test_replace_with_single_space() {
    let mut session = new_session();
    session.handle_line("text a   b    c").unwrap();
    assert_eq!(
        lines(session.handle_line("replace \\s+  ").unwrap()),
        vec!["a b c"]
    );
    assert_eq!(
        lines(session.handle_line("replace \\s+ =>  ").unwrap()),
        vec!["a b c"]
    );
}

#[test]
fn test_replace_pattern_with_space() {
    let mut session = new_session();
    session.handle_line("text hot dog, hot cat").unwrap();
    assert_eq!(
        lines(session.handle_line("replace hot dog => sausage").unwrap()),
        vec!["sausage, hot cat"]
    );
    assert_eq!(
        lines(session.handle_line(r"replace (\w+) (\w+) => $2 $1").unwrap()),
        vec!["dog hot, cat hot"]
    );
}

#[test]
fn test_current_result_falls_back_to_matches_when_replaced_is_empty() {
    let mut session = new_session();
    session.handle_line("text abc").unwrap();
    session.handle_line("search b").unwrap();
    session.handle_line("replace .*").unwrap();
    assert_eq!(session.current_result(), "b");
}

#[test]
fn test_current_result_prefers_replaced_text() {
    let mut session = new_session();
    session.handle_line("text a1 b2").unwrap();
    session.handle_line(r"search \d").unwrap();
    assert_eq!(session.current_result(), "1\n2");

    session.handle_line(r"replace \d _").unwrap();
    assert_eq!(session.current_result(), "a_ b_");

    session.handle_line("clear").unwrap();
    assert_eq!(session.current_result(), "");
}

#[test]
fn test_save_writes_result_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");
    let mut session = new_session();
    session.handle_line("text x1 y22").unwrap();
    session.handle_line(r"search \d+").unwrap();

    let reply = lines(session.handle_line(&format!("save {}", path.display())).unwrap());
    assert_eq!(reply, vec!["Result saved successfully!"]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n22");
}

#[test]
fn test_run_shell_continues_after_errors() {
    let script = "\
text order 66 shipped
search [0-9
search [0-9]+
update Ghost 3
create Ann 30
list
quit
create Never 1
";
    let mut session = new_session();
    let mut output = Vec::new();
    run_shell(&mut session, Cursor::new(script), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let printed: Vec<&str> = output.lines().collect();
    assert_eq!(
        printed,
        vec![
            "Word Count: 3, Character Count: 16",
            "No matches found.",
            "66",
            "Error: Person with name Ghost not found.",
            "Person created: Ann",
            "Ann (30 years)",
        ]
    );
    assert!(session.processor().lookup_by_name("Never").is_none());
}

#[test]
fn test_session_debug_output() {
    let mut session = new_session();
    session.handle_line("text hello").unwrap();
    let debug = format!("{:?}", session);
    assert!(debug.starts_with("Session"));
    assert!(debug.contains("hello"));
}
