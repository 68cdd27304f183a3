use crate::cli::support::{fixture_workspace, idea_factory, idea_factory_in};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    idea_factory()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: idea-factory"))
        .stdout(predicate::str::contains("create-batch"))
        .stdout(predicate::str::contains("find-similar"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("idea-factory --help"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    idea_factory().arg("frobnicate").assert().code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    idea_factory()
        .args(["--format", "json", "develop", "20250101-001", "not-a-number"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_data_error_json_envelope() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["--format", "json", "show", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"code\":3"))
        .stderr(predicate::str::contains("\"type\":\"not_found\""));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["--quiet", "show", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_root_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    idea_factory_in(&missing).arg("list").assert().code(3);
}
