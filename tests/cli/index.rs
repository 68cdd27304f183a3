use std::fs;

use crate::cli::support::{empty_workspace, fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_update_index_writes_document() {
    let dir = fixture_workspace();

    let written = run_json(dir.path(), &["update-index"]);
    assert_eq!(written["total_batches"], 3);
    assert_eq!(written["total_concepts"], 5);
    assert_eq!(written["stories_in_development"], 1);
    assert_eq!(written["preserved_manual_section"], false);

    let index = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();
    assert!(index.starts_with("# Story Concepts Index\n"));
    assert!(index.contains("- Total Concepts: 5"));
    assert!(index.contains("### GENERATED"));
    assert!(index.contains("- **[20250101-001]** Fantasy (2 concepts) - 2025-01-01"));
    assert!(index.contains("- **[20250103-001]** Science Fiction (0 concepts)"));
    assert!(index.contains("- **Ember Crown** [developing]"));
    assert!(index.ends_with(
        "## Manual Updates\nYou can manually add notes and cross-references below this line.\n\n"
    ));
}

#[test]
fn test_update_index_is_stable_and_keeps_manual_notes() {
    let dir = fixture_workspace();
    let path = dir.path().join("INDEX.md");

    idea_factory_in(dir.path())
        .arg("update-index")
        .assert()
        .success();
    let first = fs::read_to_string(&path).unwrap();

    fs::write(
        &path,
        format!("{}- Ember Crown pairs well with Prophecy Clerk\n", first),
    )
    .unwrap();

    let written = run_json(dir.path(), &["update-index"]);
    assert_eq!(written["preserved_manual_section"], true);

    let second = fs::read_to_string(&path).unwrap();
    assert!(second.starts_with(&first));
    assert!(second.ends_with("- Ember Crown pairs well with Prophecy Clerk\n"));
}

#[test]
fn test_update_index_on_empty_workspace() {
    let dir = empty_workspace();

    idea_factory_in(dir.path())
        .arg("update-index")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 batches"));

    let index = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();
    assert!(index.contains("- Total Batches: 0"));
    assert!(!index.contains("### GENERATED"));
}
