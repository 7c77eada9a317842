// Integration tests for the gwscore CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument parsing.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the gwscore binary.
fn gwscore() -> Command {
    Command::cargo_bin("gwscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    gwscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gwscore"));
}

#[test]
fn cli_help_flag() {
    gwscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fantasy gameweek scoring"));
}

#[test]
fn score_requires_snapshot_path() {
    gwscore()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn finalize_requires_store() {
    gwscore()
        .args(["finalize", "gw01.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--store"));
}

#[test]
fn score_rejects_unknown_format() {
    gwscore()
        .args(["score", "gw01.json", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    gwscore()
        .args(["-q", "-v", "lint", "gw01.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
