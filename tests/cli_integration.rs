//! Integration tests for flag handling, output and exit codes.

use std::fs;

use clap::Parser;
use paramlimit::cli::{run_to, Cli, EXIT_FAILED, EXIT_SUCCESS};
use tempfile::TempDir;

fn source_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("main.go"),
        "package main\n\nfunc main() {}\n\nfunc add(a, b, c int) int { return a + b + c }\n",
    )
    .unwrap();
    temp
}

fn run(args: &[&str]) -> (i32, String) {
    let mut argv = vec!["paramlimit"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    let code = run_to(&cli, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_issues_without_exit_status() {
    let temp = source_dir();
    let dir = temp.path().to_str().unwrap();

    let (code, output) = run(&["--max", "2", dir]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.contains("main.go:5:1"), "got: {}", output);
    assert!(output.contains("add"));
    assert!(output.contains("has 3 parameters (max 2)"));
}

#[test]
fn test_issues_with_exit_status() {
    let temp = source_dir();
    let dir = temp.path().to_str().unwrap();

    let (code, _) = run(&["--max", "2", "--set_exit_status", dir]);
    assert_eq!(code, EXIT_FAILED);
}

#[test]
fn test_clean_run_with_exit_status() {
    let temp = source_dir();
    let dir = temp.path().to_str().unwrap();

    let (code, output) = run(&["--private-max", "3", "--set_exit_status", dir]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.is_empty());
}

#[test]
fn test_no_limit_reports_nothing() {
    let temp = source_dir();
    let dir = temp.path().to_str().unwrap();

    let (code, output) = run(&["--set_exit_status", dir]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(output.is_empty());
}

#[test]
fn test_json_output() {
    let temp = source_dir();
    let dir = temp.path().to_str().unwrap();

    let (_, output) = run(&["--max", "0", "--format", "json", dir]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["files_scanned"], 1);
    assert_eq!(value["issue_count"], 1);
    assert_eq!(value["issues"][0]["name"], "add");
}

#[test]
fn test_parse_failure_is_error() {
    let temp = source_dir();
    fs::write(temp.path().join("bad.go"), "package main\nfunc (\n").unwrap();

    let cli = Cli::try_parse_from(["paramlimit", "--max", "1", temp.path().to_str().unwrap()])
        .unwrap();
    let mut out = Vec::new();
    let err = run_to(&cli, &mut out).expect_err("parse failure should be fatal");
    assert!(err.to_string().contains("bad.go"), "got: {}", err);
    assert!(out.is_empty());
}

#[test]
fn test_bad_exclude_aborts_before_analysis() {
    let temp = source_dir();
    fs::write(temp.path().join("bad.go"), "package main\nfunc (\n").unwrap();

    let cli = Cli::try_parse_from([
        "paramlimit",
        "--max",
        "1",
        "--excludes",
        "gen/*.go",
        temp.path().to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = run_to(&cli, &mut out).expect_err("config error should be fatal");
    assert!(err.to_string().contains("invalid configuration"), "got: {}", err);
    assert!(out.is_empty());
}
