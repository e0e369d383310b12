// crates/elevator-judge-cli/tests/judge_binary.rs
// ============================================================================
// Module: Judge Binary Integration Tests
// Description: Drives the compiled `elevator-judge` binary over temporary
//              input/output files.
// Purpose: Cover the CLI surface (flags, stdout text, exit code) that unit
//          tests over library functions cannot.
// ============================================================================

//! ## Overview
//! Runs `elevator-judge` against fixtures written to a [`tempfile::TempDir`],
//! asserting on stdout/stderr text and the process exit code.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions fail fast on the unexpected case"
)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn judge_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_elevator-judge"))
}

#[test]
fn accepts_a_well_formed_single_passenger_run() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");
    fs::write(&input_path, "[1.0]1-PRI-1-FROM-F1-TO-F2\n").unwrap();
    fs::write(
        &output_path,
        "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
[1.8]OUT-S-1-F2-1
[2.2]CLOSE-F2-1
",
    )
    .unwrap();

    let result = Command::new(judge_bin())
        .arg("--input-file")
        .arg(&input_path)
        .arg("--output-file")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout).trim(), "Accepted");
}

#[test]
fn rejects_a_log_with_an_open_door_at_the_end() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.txt");
    let output_path = dir.path().join("output.txt");
    fs::write(&input_path, "[1.0]1-PRI-1-FROM-F1-TO-F2\n").unwrap();
    fs::write(
        &output_path,
        "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
[1.8]OUT-S-1-F2-1
",
    )
    .unwrap();

    let result = Command::new(judge_bin())
        .arg("--input-file")
        .arg(&input_path)
        .arg("--output-file")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Validation Error:"));
    assert!(stderr.contains("FinalState"));
}

#[test]
fn rejects_a_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("does-not-exist.txt");
    let output_path = dir.path().join("output.txt");
    fs::write(&output_path, "").unwrap();

    let result = Command::new(judge_bin())
        .arg("--input-file")
        .arg(&input_path)
        .arg("--output-file")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(!result.status.success());
}
