// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for junit-csv
//!
//! These tests cover argument parsing and the exit status of the built binary
//! for usage errors, skipped reports and output failures.


use std::process::{Command, Output};

use clap::Parser;
use junit_csv::config::Config;
use test_utils::{TempTestDir, malformed_report, read_csv_rows, single_suite_report};
use tracing::Level;

fn junit_csv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_junit-csv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run junit-csv binary")
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_positional_arguments() {
    let config =
        Config::try_parse_from(["junit-csv", "reports", "out.csv"]).expect("parse should succeed");
    assert_eq!(config.xml_dir.to_str(), Some("reports"));
    assert_eq!(config.output_csv.to_str(), Some("out.csv"));
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_missing_output_argument_is_error() {
    let result = Config::try_parse_from(["junit-csv", "reports"]);
    assert!(result.is_err());
}

#[test]
fn test_extra_argument_is_error() {
    let result = Config::try_parse_from(["junit-csv", "reports", "out.csv", "extra"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_and_quiet_flags() {
    let config = Config::try_parse_from(["junit-csv", "-v", "reports", "out.csv"])
        .expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);

    let config = Config::try_parse_from(["junit-csv", "reports", "out.csv", "--quiet"])
        .expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

// ============================================================================
// Exit status
// ============================================================================

#[test]
fn test_no_arguments_exits_with_usage_status() {
    let output = junit_csv(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr should show usage: {stderr}");
}

#[test]
fn test_unknown_flag_exits_with_usage_status() {
    let output = junit_csv(&["--bogus", "reports", "out.csv"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_successfully() {
    let output = junit_csv(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("XML_DIR"));
}

#[test]
fn test_successful_run_with_skipped_file() {
    let temp = TempTestDir::new("cli_success");
    temp.create_file("reports/good.xml", single_suite_report());
    temp.create_file("reports/bad.xml", malformed_report());
    let reports = temp.path().join("reports");
    let csv_path = temp.path().join("output.csv");

    let output = junit_csv(&[
        reports.to_str().expect("utf-8 path"),
        csv_path.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found 2 XML file(s)."), "stderr: {stderr}");
    assert!(stderr.contains("not valid JUnit XML"), "stderr: {stderr}");
    assert!(stderr.contains("bad.xml"), "stderr: {stderr}");

    let rows = read_csv_rows(&csv_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][5], "PASSED");
}

#[test]
fn test_quiet_run_still_warns() {
    let temp = TempTestDir::new("cli_quiet");
    temp.create_file("reports/foo.xml", "<foo/>");
    let reports = temp.path().join("reports");
    let csv_path = temp.path().join("output.csv");

    let output = junit_csv(&[
        "-q",
        reports.to_str().expect("utf-8 path"),
        csv_path.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Found 1 XML file(s)."), "stderr: {stderr}");
    assert!(stderr.contains("Unexpected root tag"), "stderr: {stderr}");
}

#[test]
fn test_unwritable_output_exits_with_output_status() {
    let temp = TempTestDir::new("cli_unwritable");
    temp.create_file("reports/good.xml", single_suite_report());
    let reports = temp.path().join("reports");
    let csv_path = temp.path().join("no-such-dir/output.csv");

    let output = junit_csv(&[
        reports.to_str().expect("utf-8 path"),
        csv_path.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not open or write to CSV file"),
        "stderr: {stderr}"
    );
}
