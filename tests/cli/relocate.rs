use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_move_batch_between_collections() {
    let dir = fixture_workspace();

    let moved = run_json(dir.path(), &["move", "20250101-001", "favorites"]);

    assert_eq!(moved["from"], "generated");
    assert_eq!(moved["to"], "favorites");
    assert_eq!(moved["path"], "concepts/favorites/20250101-001.md");
    assert!(dir.path().join("concepts/favorites/20250101-001.md").is_file());
    assert!(!dir.path().join("concepts/generated/20250101-001.md").exists());
}

#[test]
fn test_move_to_current_collection_is_usage_error() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["move", "20250102-001", "developing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already in developing"));
}

#[test]
fn test_move_to_stories_is_rejected() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["move", "20250101-001", "stories"])
        .assert()
        .code(2);
    assert!(dir.path().join("concepts/generated/20250101-001.md").is_file());
}

#[test]
fn test_move_unknown_batch() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["move", "19990101-001", "favorites"])
        .assert()
        .code(3);
}
