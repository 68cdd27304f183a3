use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_search_matches_batches_then_stories() {
    let dir = fixture_workspace();

    let found = run_json(dir.path(), &["search", "dragon"]);

    assert_eq!(found["count"], 2);
    let results = found["results"].as_array().unwrap();
    assert_eq!(results[0]["id"], "20250101-001");
    assert_eq!(results[0]["kind"], "batch");
    assert_eq!(results[0]["concepts"][0]["ordinal"], 1);
    assert_eq!(results[0]["concepts"].as_array().unwrap().len(), 1);
    assert_eq!(results[1]["id"], "ember-crown-1735689600");
    assert_eq!(results[1]["kind"], "story");
}

#[test]
fn test_search_status_filter() {
    let dir = fixture_workspace();

    let found = run_json(dir.path(), &["search", "dragon", "--status", "developing"]);

    assert_eq!(found["count"], 1);
    assert_eq!(found["results"][0]["id"], "ember-crown-1735689600");
}

#[test]
fn test_search_empty_term_returns_everything() {
    let dir = fixture_workspace();

    let found = run_json(dir.path(), &["search", ""]);

    assert_eq!(found["count"], 4);
}

#[test]
fn test_search_trope_filter_and_limit() {
    let dir = fixture_workspace();

    let haunted = run_json(dir.path(), &["search", "", "--trope", "HAUNTED"]);
    assert_eq!(haunted["count"], 1);
    assert_eq!(haunted["results"][0]["id"], "20250102-001");

    let limited = run_json(dir.path(), &["search", "", "--limit", "2"]);
    assert_eq!(limited["count"], 2);
}

#[test]
fn test_search_no_results() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["search", "submarine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'submarine'"));
}

#[test]
fn test_search_rejects_zero_limit() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["search", "dragon", "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_search_survives_record_with_invalid_utf8() {
    let dir = fixture_workspace();
    std::fs::write(
        dir.path().join("concepts/generated/20250104-001.md"),
        b"---\nbatch_id: 20250104-001\ngenre: Caf\xe9\ncount: 1\n---\n\nA dragon cafe.\n",
    )
    .unwrap();

    let found = run_json(dir.path(), &["search", "dragon"]);
    assert_eq!(found["count"], 3);

    let stats = run_json(dir.path(), &["stats"]);
    assert_eq!(stats["total_batches"], 4);
}

#[test]
fn test_search_fuzzy_tolerates_typos() {
    let dir = fixture_workspace();

    let plain = run_json(dir.path(), &["search", "signal gardn"]);
    assert_eq!(plain["count"], 0);

    let fuzzy = run_json(dir.path(), &["search", "signal gardn", "--fuzzy"]);
    assert_eq!(fuzzy["fuzzy"], true);
    assert_eq!(fuzzy["count"], 1);
    assert_eq!(fuzzy["results"][0]["id"], "20250103-001");
    let score = fuzzy["results"][0]["score"].as_f64().unwrap();
    assert!(score > 0.6 && score < 1.0);
}

#[test]
fn test_search_fuzzy_scores_exact_story_match() {
    let dir = fixture_workspace();

    let plain = run_json(dir.path(), &["search", "dragon"]);
    assert_eq!(plain["results"][0]["kind"], "batch");
    assert!(plain["results"][0].get("score").is_none());

    let fuzzy = run_json(dir.path(), &["search", "ember crown", "-f"]);
    assert_eq!(fuzzy["results"][0]["id"], "ember-crown-1735689600");
    assert_eq!(fuzzy["results"][0]["score"], 1.0);
}

#[test]
fn test_search_fuzzy_human_output_shows_score() {
    let dir = fixture_workspace();

    idea_factory_in(dir.path())
        .args(["search", "signal gardn", "--fuzzy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20250103-001"))
        .stdout(predicate::str::contains("Score: 92%"));
}
