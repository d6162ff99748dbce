//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("firebase-setup"))
        .stdout(predicate::str::contains("install-brew-deps"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cilane");
}

#[test]
fn test_missing_project_hint() {
    let t = Test::new();

    t.cmd()
        .arg("setup")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing required option: project"))
        .stderr(predicate::str::contains("XC_PROJECT"));
}

#[test]
fn test_missing_archive_hint() {
    let t = Test::new();

    t.cmd()
        .args(["firebase-setup", "--project", "Shop.xcodeproj", "--scheme", "Shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xcodebuild_archive"))
        .stderr(predicate::str::contains("XCODEBUILD_ARCHIVE"));
}

#[test]
fn test_missing_tool_hint() {
    let t = Test::new();
    std::fs::remove_file(t.bin.path().join("security")).unwrap();

    t.cmd()
        .env("PATH", t.bin.path())
        .args(["--ci", "setup", "--project", "Shop.xcodeproj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("security not found on PATH"))
        .stderr(predicate::str::contains("xcode-select --install"));
}

#[test]
fn test_ci_and_no_ci_conflict() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--ci", "--no-ci", "setup", "--project", "Shop.xcodeproj"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_invalid_config_file() {
    let t = Test::new();
    t.write(".cilane.toml", "[project]\nunknown = 1\n");

    let output = t.cmd().args(["setup", "--project", "Shop.xcodeproj"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse .cilane.toml");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cilane");
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert!(!stdout(&output).is_empty());
}
