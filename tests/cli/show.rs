use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_show_batch_with_metadata() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["show", "20250101-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 20250101-001"))
        .stdout(predicate::str::contains("Genre: Fantasy"))
        .stdout(predicate::str::contains("Tropes: dragons, prophecy"))
        .stdout(predicate::str::contains("## Concept 1: The Last Dragon Rider"));
}

#[test]
fn test_show_single_concept() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["show", "20250101-001", "--concept", "2", "--no-metadata"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Concept 2: Prophecy Clerk"))
        .stdout(predicate::str::contains("Last Dragon Rider").not());
}

#[test]
fn test_show_concept_out_of_range() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["--format", "json", "show", "20250101-001", "--concept", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"index_out_of_range\""));
}

#[test]
fn test_show_story_by_file_name_and_section() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["show", "ember-crown", "--section", "core", "--no-metadata"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Core Concept"))
        .stdout(predicate::str::contains("dragon-blooded queen"))
        .stdout(predicate::str::contains("## Characters").not());
}

#[test]
fn test_show_story_json_by_id() {
    let dir = fixture_workspace();

    let shown = run_json(dir.path(), &["show", "ember-crown-1735689600"]);

    assert_eq!(shown["kind"], "story");
    assert_eq!(shown["collection"], "stories");
    assert_eq!(shown["title"], "Ember Crown");
    assert_eq!(shown["origin"], "20250101-001");
    assert_eq!(shown["path"], "stories/ember-crown.md");
}

#[test]
fn test_show_unknown_record() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["show", "nothing-here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}
