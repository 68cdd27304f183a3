use std::fs;

use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_export_all_as_json_to_stdout() {
    let dir = fixture_workspace();

    let exported = run_json(dir.path(), &["export"]);

    assert_eq!(exported["batches"].as_array().unwrap().len(), 3);
    assert_eq!(exported["stories"].as_array().unwrap().len(), 1);
    assert_eq!(exported["batches"][0]["id"], "20250101-001");
    assert_eq!(exported["batches"][0]["extra"]["llm_model"], "\"test-model\"");
    assert_eq!(exported["stories"][0]["title"], "Ember Crown");
}

#[test]
fn test_export_stories_only() {
    let dir = fixture_workspace();

    let exported = run_json(dir.path(), &["export", "--type", "stories"]);

    assert!(exported.get("batches").is_none());
    assert_eq!(exported["stories"].as_array().unwrap().len(), 1);
}

#[test]
fn test_export_yaml_to_file() {
    let dir = fixture_workspace();
    let out = dir.path().join("export.yaml");

    idea_factory_in(dir.path())
        .args(["export", "--type", "batches", "--output-format", "yaml", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 record(s)"));

    let yaml = fs::read_to_string(&out).unwrap();
    assert!(yaml.contains("batches:"));
    assert!(yaml.contains("20250102-001"));
    assert!(!yaml.contains("stories:"));
}

#[test]
fn test_export_all_as_csv_to_stdout() {
    let dir = fixture_workspace();

    let output = idea_factory_in(dir.path())
        .args(["export", "--output-format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let csv = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "type,id,title,genre,date,status,count_or_length");
    assert_eq!(
        lines[1],
        "batch,20250101-001,Batch 20250101-001,Fantasy,2025-01-01,generated,2"
    );
    assert_eq!(
        lines[4],
        "story,ember-crown-1735689600,Ember Crown,Fantasy,2025-01-05,developing,"
    );
}

#[test]
fn test_export_batches_csv_to_file() {
    let dir = fixture_workspace();
    let out = dir.path().join("batches.csv");

    idea_factory_in(dir.path())
        .args(["export", "--type", "batches", "--output-format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 record(s)"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("batch_id,date_generated,genre,tropes,count,status,location,llm_model"));
    assert!(csv.contains("20250101-001,2025-01-01,Fantasy,\"dragons, prophecy\",2,generated,generated,test-model"));
    assert!(csv.contains(",favorite,favorites,"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["export", "--output-format", "xml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("json, yaml or csv"));
}
