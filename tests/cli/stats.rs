use crate::cli::support::{fixture_workspace, idea_factory_in, run_json};
use predicates::prelude::*;

#[test]
fn test_stats_totals_and_rankings() {
    let dir = fixture_workspace();

    let stats = run_json(dir.path(), &["stats"]);

    assert_eq!(stats["total_batches"], 3);
    assert_eq!(stats["total_concepts"], 5);
    assert_eq!(stats["total_stories"], 1);
    assert_eq!(stats["stories_in_development"], 1);
    assert_eq!(stats["top_genres"][0]["name"], "Fantasy");
    assert_eq!(stats["top_genres"][0]["count"], 2);
    assert_eq!(stats["top_tropes"][0]["name"], "dragons");
    assert_eq!(stats["recent_batches"].as_array().unwrap().len(), 0);
}

#[test]
fn test_stats_detailed_lists_recent_batches() {
    let dir = fixture_workspace();

    let stats = run_json(dir.path(), &["stats", "--detailed"]);
    assert_eq!(stats["recent_batches"][0]["id"], "20250103-001");

    idea_factory_in(dir.path())
        .args(["stats", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Concepts: 5"))
        .stdout(predicate::str::contains("Recent batches:"))
        .stdout(predicate::str::contains("20250102-001 [developing] Horror"));
}

#[test]
fn test_stats_counts_each_genre_in_a_list() {
    let dir = fixture_workspace();
    std::fs::write(
        dir.path().join("concepts/generated/20250104-001.md"),
        "---\nbatch_id: 20250104-001\ngenre: [Horror, Fantasy]\ncount: 1\n---\n",
    )
    .unwrap();

    let stats = run_json(dir.path(), &["stats"]);

    let genres = stats["top_genres"].as_array().unwrap();
    assert_eq!(genres[0]["name"], "Fantasy");
    assert_eq!(genres[0]["count"], 3);
    assert_eq!(genres[1]["name"], "Horror");
    assert_eq!(genres[1]["count"], 2);
    assert!(genres.iter().all(|g| g["name"] != "Horror, Fantasy"));
}
