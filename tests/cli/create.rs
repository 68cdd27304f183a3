use std::fs;

use crate::cli::support::{empty_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_create_batch_writes_generated_file() {
    let dir = empty_workspace();

    let created = run_json(
        dir.path(),
        &[
            "create-batch",
            "--genre",
            "Cozy Mystery",
            "--tropes",
            "small town, amateur sleuth",
            "--model",
            "test-model",
            "--count",
            "5",
        ],
    );

    let path = created["path"].as_str().unwrap();
    assert!(path.starts_with("concepts/generated/"));
    assert!(path.ends_with("-001.md"));

    let content = fs::read_to_string(dir.path().join(path)).unwrap();
    assert!(content.contains("genre: Cozy Mystery"));
    assert!(content.contains("tropes: [small town, amateur sleuth]"));
    assert!(content.contains("count: 5"));
    assert!(content.contains("llm_model: \"test-model\""));
    assert_eq!(created["tropes"][1], "amateur sleuth");
}

#[test]
fn test_create_batch_numbers_same_day_batches() {
    let dir = empty_workspace();
    let args = [
        "create-batch",
        "--genre",
        "Horror",
        "--tropes",
        "cabin",
        "--model",
        "m",
    ];

    let first = run_json(dir.path(), &args);
    let second = run_json(dir.path(), &args);

    assert!(first["id"].as_str().unwrap().ends_with("-001"));
    assert!(second["id"].as_str().unwrap().ends_with("-002"));
}

#[test]
fn test_create_batch_uses_default_count() {
    let dir = empty_workspace();
    fs::write(dir.path().join("idea-factory.toml"), "default_count = 7\n").unwrap();

    let created = run_json(
        dir.path(),
        &["create-batch", "-g", "Western", "-t", "duel", "-m", "m"],
    );

    let content = fs::read_to_string(dir.path().join(created["path"].as_str().unwrap())).unwrap();
    assert!(content.contains("count: 7"));
}

#[test]
fn test_create_batch_rejects_count_out_of_range() {
    let dir = empty_workspace();

    idea_factory_in(dir.path())
        .args(["create-batch", "-g", "Horror", "-t", "cabin", "-m", "m", "-c", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("count"));
}

#[test]
fn test_create_batch_rejects_blank_tropes() {
    let dir = empty_workspace();

    idea_factory_in(dir.path())
        .args(["create-batch", "-g", "Horror", "-t", " , ", "-m", "m"])
        .assert()
        .code(2);
}

#[test]
fn test_create_story_uses_slug_and_keeps_existing() {
    let dir = empty_workspace();
    let args = ["create-story", "--title", "The Glass Orchard", "--genre", "Fantasy"];

    let first = run_json(dir.path(), &args);
    assert_eq!(first["path"], "stories/the-glass-orchard.md");
    assert!(first["id"]
        .as_str()
        .unwrap()
        .starts_with("the-glass-orchard-"));

    let content = fs::read_to_string(dir.path().join("stories/the-glass-orchard.md")).unwrap();
    assert!(content.contains("title: \"The Glass Orchard\""));
    assert!(content.contains("# The Glass Orchard"));
    assert!(content.contains("origin_batch: none"));

    let second = run_json(dir.path(), &args);
    let second_path = second["path"].as_str().unwrap();
    assert_ne!(second_path, "stories/the-glass-orchard.md");
    assert!(second_path.starts_with("stories/the-glass-orchard-"));
}

#[test]
fn test_create_story_human_output() {
    let dir = empty_workspace();

    idea_factory_in(dir.path())
        .args(["create-story", "-t", "Salt Road", "-g", "Adventure", "-o", "20250101-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created story salt-road-"))
        .stdout(predicate::str::contains("stories/salt-road.md"));

    let content = fs::read_to_string(dir.path().join("stories/salt-road.md")).unwrap();
    assert!(content.contains("origin_batch: 20250101-001"));
}

#[test]
fn test_create_batch_rejects_line_break_in_genre() {
    let dir = empty_workspace();

    idea_factory_in(dir.path())
        .args([
            "--format",
            "json",
            "create-batch",
            "-g",
            "Fantasy\nbatch_id: hijacked",
            "-t",
            "cabin",
            "-m",
            "m",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid_value"));

    assert!(!dir.path().join("concepts/generated/hijacked.md").exists());
    assert_eq!(
        fs::read_dir(dir.path().join("concepts/generated"))
            .unwrap()
            .count(),
        0
    );
}
