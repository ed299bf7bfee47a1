//! End-to-end tests for the chatpulse binary.
//!
//! These tests run the compiled binary against real files in a temp
//! directory and inspect its output and exit status.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BASIC_LOG: &str = "\
# Log started: 2024-01-01 10:00:00 +0000
[10:00:05] <alice> hello world hello
[10:00:45] <bob> world of code
[10:02:10] <alice> testing again
# Log closed: 2024-01-01 10:03:00 +0000
";

fn write_log(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn chatpulse() -> Command {
    Command::cargo_bin("chatpulse").unwrap()
}

#[test]
fn test_basic_run_writes_json() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "stream.log", BASIC_LOG);
    let output = dir.path().join("series.json");

    chatpulse()
        .arg(&input)
        .arg("-o")
        .arg(output.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Done!"))
        .stdout(predicate::str::contains("3 messages"));

    let content = fs::read_to_string(&output).unwrap();
    let series: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(series["timestamps"].as_array().unwrap().len(), 3);
    assert_eq!(series["counts"][0], 2);
    assert_eq!(series["counts"][1], 0);
    assert_eq!(series["counts"][2], 1);
}

#[test]
fn test_csv_format() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "stream.log", BASIC_LOG);
    let output = dir.path().join("series.csv");

    chatpulse()
        .arg(&input)
        .arg("--format")
        .arg("csv")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("Timestamp;Count;TopWords"));
    assert_eq!(content.lines().count(), 4); // header + 3 minutes
}

#[test]
fn test_top_words_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "stream.log", BASIC_LOG);
    let output = dir.path().join("series.json");

    chatpulse()
        .arg(&input)
        .arg("-n")
        .arg("1")
        .arg("--no-stop-words")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top-N:   1"));

    let content = fs::read_to_string(&output).unwrap();
    let series: serde_json::Value = serde_json::from_str(&content).unwrap();
    let label = series["labels"][0].as_str().unwrap();
    assert!(label.contains("hello"));
    assert!(!label.contains("world"));
}

#[test]
fn test_assume_date_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_log(
        &dir,
        "undated.log",
        "[10:00:05] <alice> no marker here\n",
    );
    let output = dir.path().join("series.json");

    chatpulse()
        .arg(&input)
        .arg("--assume-date")
        .arg("2024-01-01")
        .arg("-o")
        .arg(output.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("(assumed)"));
}

#[test]
fn test_missing_start_marker_fails_without_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_log(
        &dir,
        "undated.log",
        "[10:00:05] <alice> no marker here\n",
    );

    chatpulse()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.json").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("session-start marker"));
}

#[test]
fn test_invalid_assume_date_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_log(&dir, "stream.log", BASIC_LOG);

    chatpulse()
        .arg(&input)
        .arg("--assume-date")
        .arg("01/01/2024")
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    chatpulse()
        .arg(dir.path().join("nope.log").to_str().unwrap())
        .arg("-o")
        .arg(dir.path().join("out.json").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_malformed_message_fails_with_line_number() {
    let dir = TempDir::new().unwrap();
    let input = write_log(
        &dir,
        "broken.log",
        "\
# Log started: 2024-01-01 10:00:00 +0000
[10:00:05] <alice> fine
[oops] <bob> broken
",
    );

    chatpulse()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.json").to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_help_lists_examples() {
    chatpulse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES:"))
        .stdout(predicate::str::contains("--top-words"));
}

#[test]
fn test_version_flag() {
    chatpulse()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
