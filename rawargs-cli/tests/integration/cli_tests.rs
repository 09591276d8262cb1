//! Integration tests for the rawargs CLI.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rawargs() -> Command {
    let mut command = Command::cargo_bin("rawargs").unwrap();
    command.arg("--no-color");
    command
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    rawargs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--output-format"))
        .stdout(predicate::str::contains("--switch"))
        .stdout(predicate::str::contains("--drop-pending"))
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_version() {
    rawargs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_output_format_fails() {
    rawargs()
        .args(["--output-format", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_no_tokens() {
    rawargs()
        .assert()
        .success()
        .stdout(predicate::str::contains("----------- named -----------"))
        .stdout(predicate::str::contains("----------- positional -----------"));
}

#[test]
fn test_plain_classification() {
    rawargs()
        .args(["--", "-i", "input", "--output=output", "-b", "file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i = input"))
        .stdout(predicate::str::contains("output = output"))
        .stdout(predicate::str::contains("b = file"));
}

#[test]
fn test_switches_keep_positionals() {
    rawargs()
        .args(["-s", "u", "--switch", "v", "--", "-u", "out.lar", "-v", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: out.lar"))
        .stdout(predicate::str::contains("1: test"));
}

#[test]
fn test_json_output() {
    let output = rawargs()
        .args(["-f", "json", "-q", "n:i32", "-q", "#0", "--", "-n", "1234", "pos"])
        .output()
        .expect("Command should run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

    assert_eq!(json["named"][0]["key"], "n");
    assert_eq!(json["named"][0]["value"], "1234");
    assert_eq!(json["positional"][0], "pos");
    assert_eq!(json["queries"][0]["value"], 1234);
    assert_eq!(json["queries"][1]["value"], "pos");
}

#[test]
fn test_drop_pending() {
    let output = rawargs()
        .args(["-f", "json", "--drop-pending", "--", "-v", "--long"])
        .output()
        .expect("Command should run");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    let named = json["named"].as_array().unwrap();

    assert_eq!(named.len(), 1);
    assert_eq!(named[0]["key"], "long");
}

#[test]
fn test_malformed_query_is_reported() {
    rawargs()
        .args(["-q", "n:u8", "--", "-n", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n:u8 error: Malformed u8 value: '300'"));
}

#[test]
fn test_unknown_query_kind_fails() {
    rawargs()
        .args(["-q", "n:i128"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid type: i128"));
}

// ============================================================================
// Output file
// ============================================================================

#[test]
fn test_output_file_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    rawargs()
        .args(["-o", path.to_str().unwrap(), "--", "pos"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("0: pos"));
}

#[test]
fn test_unopenable_output_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.txt");

    rawargs()
        .args(["-o", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open file"));
}
