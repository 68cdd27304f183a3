use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_list_all_newest_first() {
    let dir = fixture_workspace();

    let listed = run_json(dir.path(), &["list"]);

    assert_eq!(
        ids(&listed),
        vec![
            "ember-crown-1735689600",
            "20250103-001",
            "20250102-001",
            "20250101-001"
        ]
    );
}

#[test]
fn test_list_batches_by_count() {
    let dir = fixture_workspace();

    let listed = run_json(dir.path(), &["list", "--kind", "batches", "--sort", "count"]);

    assert_eq!(
        ids(&listed),
        vec!["20250102-001", "20250101-001", "20250103-001"]
    );
}

#[test]
fn test_list_filters_by_status_and_genre() {
    let dir = fixture_workspace();

    let developing = run_json(dir.path(), &["list", "--status", "developing"]);
    assert_eq!(
        ids(&developing),
        vec!["ember-crown-1735689600", "20250102-001"]
    );

    let fantasy = run_json(dir.path(), &["list", "--kind", "batches", "--genre", "fant"]);
    assert_eq!(ids(&fantasy), vec!["20250101-001"]);
}

#[test]
fn test_list_human_output() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["list", "--kind", "stories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ember Crown"))
        .stdout(predicate::str::contains("[stories]"))
        .stdout(predicate::str::contains("1 record(s)"));
}

#[test]
fn test_list_rejects_unknown_status() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["list", "--status", "shelved"])
        .assert()
        .code(2);
}
