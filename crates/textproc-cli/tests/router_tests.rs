use std::io::Cursor;

use tempfile::TempDir;
use textproc_cli::{router, Commands};
use textproc_config::AppConfig;

fn run(command: Commands, stdin: &str) -> (bool, String) {
    let mut output = Vec::new();
    let ok = router::run(command, &AppConfig::default(), Cursor::new(stdin), &mut output).unwrap();
    (ok, String::from_utf8(output).unwrap())
}

#[test]
fn test_search_inline_text() {
    let (ok, output) = run(
        Commands::Search {
            pattern: r"\d+".to_string(),
            text: Some("cat dog 42".to_string()),
        },
        "",
    );
    assert!(ok);
    assert_eq!(output, "42\n");
}

#[test]
fn test_search_reads_stdin() {
    let (_, output) = run(
        Commands::Search {
            pattern: "[A-Z][a-z]+".to_string(),
            text: None,
        },
        "Alice met Bob\nin Paris",
    );
    assert_eq!(output, "Alice\nBob\nParis\n");
}

#[test]
fn test_replace_to_stdout() {
    let (_, output) = run(
        Commands::Replace {
            pattern: r"\d+".to_string(),
            replacement: "#".to_string(),
            text: Some("cat dog 42".to_string()),
            output: None,
        },
        "",
    );
    assert_eq!(output, "cat dog #\n");
}

#[test]
fn test_replace_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    let (ok, output) = run(
        Commands::Replace {
            pattern: "o".to_string(),
            replacement: "0".to_string(),
            text: Some("foo\nbar".to_string()),
            output: Some(path.clone()),
        },
        "",
    );
    assert!(ok);
    assert_eq!(output, "Result saved successfully!\n");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "f00\nbar");
}

#[test]
fn test_validate_reports_status() {
    let (ok, output) = run(
        Commands::Validate {
            pattern: "[a-z]+".to_string(),
        },
        "",
    );
    assert!(ok);
    assert!(output.starts_with("Pattern is valid"));

    let (ok, output) = run(
        Commands::Validate {
            pattern: "[a-z".to_string(),
        },
        "",
    );
    assert!(!ok);
    assert!(output.starts_with("Pattern is invalid"));
}

#[test]
fn test_examples() {
    let (_, output) = run(Commands::Examples, "");
    assert!(output.lines().count() >= 10);
    assert!(output.contains(r"\bword\b  : "));
}

#[test]
fn test_stats_json() {
    let (_, output) = run(
        Commands::Stats {
            text: None,
            json: true,
        },
        "one  two\nthree",
    );
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["words"], 3);
    assert_eq!(value["chars"], 14);
}

#[test]
fn test_shell_subcommand() {
    let (ok, output) = run(
        Commands::Shell { json: false },
        "create Ann 30\ncreate Bob 25\ndelete Ann\nlist\n",
    );
    assert!(ok);
    assert!(output.ends_with("Bob (25 years)\n"));
}
