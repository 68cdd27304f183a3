use std::fs;

use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

fn story(dir: &tempfile::TempDir) -> String {
    fs::read_to_string(dir.path().join("stories/ember-crown.md")).unwrap()
}

#[test]
fn test_note_goes_under_development_notes() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["note", "ember-crown", "Try a heist structure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Development Notes"));

    let content = story(&dir);
    let notes = content.find("## Development Notes").unwrap();
    let note = content.find("Try a heist structure").unwrap();
    let research = content.find("## Research").unwrap();
    assert!(notes < note && note < research);
    assert!(!content.contains("date_updated: 2025-01-05"));
    assert!(content.contains("date_created: 2025-01-05"));
}

#[test]
fn test_note_in_named_section() {
    let dir = fixture_workspace();

    let outcome = run_json(
        dir.path(),
        &["note", "ember-crown", "Add a rival", "--section", "characters"],
    );
    assert_eq!(outcome["fell_back"], false);

    let content = story(&dir);
    let characters = content.find("## Characters").unwrap();
    let note = content.find("Add a rival").unwrap();
    let notes = content.find("## Development Notes").unwrap();
    assert!(characters < note && note < notes);
}

#[test]
fn test_note_missing_section_falls_back() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["note", "ember-crown", "Map the river", "--section", "Geography"])
        .assert()
        .success()
        .stderr(predicate::str::contains("section 'Geography' not found"));

    let content = story(&dir);
    let notes = content.find("## Development Notes").unwrap();
    assert!(content.find("Map the river").unwrap() > notes);
}

#[test]
fn test_note_unknown_story() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["--format", "json", "note", "missing-story", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("story_not_found"));
}

#[test]
fn test_note_keeps_multiline_text() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["note", "ember-crown", "Line one\nLine two"])
        .assert()
        .success();

    assert!(story(&dir).contains("Line one\nLine two"));
}
