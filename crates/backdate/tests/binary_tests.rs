// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tests that run the compiled `backdate` binary
//!
//! These cover what only `main` decides: which stream the summary goes to
//! and the process exit status.


use std::path::Path;
use std::process::{Command, Output};

use backdate::ledger::CONTRIBUTIONS_FILE;
use backdate::schedule::CommitEvent;
use test_utils::{TempTestDir, TestGitRepo};

fn backdate(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_backdate"))
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .env_remove("BACKDATE_WORKSPACE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run backdate")
}

#[test]
fn test_dry_run_stdout_is_only_json_lines() {
    let dir = TempTestDir::new("bin-dry-run");
    let output = backdate(
        dir.path(),
        &[
            "--dry-run",
            "--days_before",
            "2",
            "--frequency",
            "100",
            "--max_commits",
            "1",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let events: Vec<CommitEvent> = stdout
        .lines()
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("non-JSON line on stdout: {line:?} ({e})"))
        })
        .collect();
    assert_eq!(events.len(), 2);
    assert!(events[0].timestamp < events[1].timestamp);

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Planned 2 commits (dry run, repository untouched)."));
    assert!(!dir.file_exists(CONTRIBUTIONS_FILE));
}

#[test]
fn test_real_run_summary_on_stdout() {
    let scratch = TestGitRepo::new("bin-summary");
    let output = backdate(scratch.path(), &["--days_before", "3", "--frequency", "0"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Successfully generated 0 commits!"));
    assert!(stdout.contains("git push origin main --force"));
}

#[test]
fn test_negative_days_exit_with_error() {
    let dir = TempTestDir::with_git_marker("bin-negative");
    let output = backdate(dir.path(), &["--days_before", "-1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("days_before must not be negative (got -1)"));
    assert!(!dir.file_exists(CONTRIBUTIONS_FILE));
}
