use std::fs;

use crate::cli::support::{empty_workspace, fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

const LIGHTHOUSE: &str = "## Concept 1: The Drowned Lighthouse
**High Concept**: A lighthouse keeper guides ghost ships through the fog.

---
";

fn batch(id: &str, concepts: &str) -> String {
    format!(
        "---\nbatch_id: {id}\ndate_generated: 2025-02-01\ngenre: Gothic\ncount: 1\n---\n\n{concepts}"
    )
}

#[test]
fn test_find_similar_pairs_across_batches() {
    let dir = empty_workspace();
    let generated = dir.path().join("concepts/generated");
    fs::write(
        generated.join("20250201-001.md"),
        batch("20250201-001", LIGHTHOUSE),
    )
    .unwrap();
    fs::write(
        generated.join("20250201-002.md"),
        batch("20250201-002", LIGHTHOUSE),
    )
    .unwrap();

    let found = run_json(dir.path(), &["find-similar", "--threshold", "0.9"]);

    let pairs = found["pairs"].as_array().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0]["a"]["batch_id"], "20250201-001");
    assert_eq!(pairs[0]["b"]["batch_id"], "20250201-002");
    assert!(pairs[0]["score"].as_f64().unwrap() > 0.99);

    idea_factory_in(dir.path())
        .args(["find-similar", "--threshold", "0.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Similarity: 100%"));
}

#[test]
fn test_find_similar_ignores_concepts_within_one_batch() {
    let dir = fixture_workspace();

    let found = run_json(dir.path(), &["find-similar", "--threshold", "0.0"]);

    for pair in found["pairs"].as_array().unwrap() {
        assert_ne!(pair["a"]["batch_id"], pair["b"]["batch_id"]);
    }
}

#[test]
fn test_find_similar_rejects_bad_threshold() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["find-similar", "--threshold", "1.5"])
        .assert()
        .code(2);
}
