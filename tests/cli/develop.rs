use std::fs;

use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_develop_creates_story_from_concept() {
    let dir = fixture_workspace();

    let developed = run_json(dir.path(), &["develop", "20250101-001", "1"]);

    assert_eq!(developed["path"], "stories/the-last-dragon-rider.md");
    assert_eq!(developed["genre"], "Fantasy");

    let content =
        fs::read_to_string(dir.path().join("stories/the-last-dragon-rider.md")).unwrap();
    assert!(content.contains("title: \"The Last Dragon Rider\""));
    assert!(content.contains("origin_batch: 20250101-001"));
    assert!(content.contains("tropes: [dragons, prophecy]"));
    assert!(content.contains("A stable boy bonds with the last dragon egg."));
    assert!(content.contains("From Batch 20250101-001, Concept #1"));
    assert!(content.contains("- Hidden dragon egg\n- Royal hunters"));
    assert!(content.contains("**Initial Thoughts:**\nClassic but fun."));
}

#[test]
fn test_develop_out_of_range_writes_nothing() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["--format", "json", "develop", "20250101-001", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("index_out_of_range"));

    let stories: Vec<_> = fs::read_dir(dir.path().join("stories")).unwrap().collect();
    assert_eq!(stories.len(), 1);
}

#[test]
fn test_develop_unknown_batch() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["develop", "19990101-001", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("batch '19990101-001' not found"));
}

#[test]
fn test_develop_twice_uses_dated_name() {
    let dir = fixture_workspace();

    run_json(dir.path(), &["develop", "20250102-001", "1"]);
    let second = run_json(dir.path(), &["develop", "20250102-001", "1"]);

    let path = second["path"].as_str().unwrap();
    assert_ne!(path, "stories/the-quiet-floor.md");
    assert!(path.starts_with("stories/the-quiet-floor-"));
}
