use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

pub const FANTASY_BATCH: &str = "---
batch_id: 20250101-001
date_generated: 2025-01-01
genre: Fantasy
tropes: [dragons, prophecy]
count: 2
status: generated
llm_model: \"test-model\"
---

# Concept Batch 20250101-001

## Concept 1: The Last Dragon Rider
**High Concept**: A stable boy bonds with the last dragon egg.

**Synopsis**: The kingdom hunts dragons to extinction. One egg survives.

**Key Elements**:
- Hidden dragon egg
- Royal hunters

**Initial Thoughts**: Classic but fun.

---

## Concept 2: Prophecy Clerk
**High Concept**: The archivist who files prophecies finds one about herself.

**Synopsis**: Bureaucracy meets destiny.

---
";

pub const HORROR_BATCH: &str = "---
batch_id: 20250102-001
date_generated: 2025-01-02
genre: Horror
tropes: [haunted house, unreliable narrator]
count: 3
status: developing
---

# Concept Batch 20250102-001

## Concept 1: The Quiet Floor
**High Concept**: A hotel floor where no sound carries.

---
";

pub const SCIFI_BATCH: &str = "---
batch_id: 20250103-001
date_generated: 2025-01-03
genre: Science Fiction
tropes: [first contact]
status: favorite
---

# Concept Batch 20250103-001

## Concept 1: Signal Garden
**High Concept**: Plants that answer radio signals.

---
";

pub const DRAGON_STORY: &str = "---
story_id: ember-crown-1735689600
title: \"Ember Crown\"
genre: Fantasy
tropes: [dragons]
status: developing
origin_batch: 20250101-001
date_created: 2025-01-05
date_updated: 2025-01-05
---

# Ember Crown

## Core Concept

A dragon-blooded queen fights for her throne.

## Characters

## Development Notes

## Research
";

/// Get a Command for idea-factory
pub fn idea_factory() -> Command {
    cargo_bin_cmd!("idea-factory")
}

/// Command pointed at `root`
pub fn idea_factory_in(root: &Path) -> Command {
    let mut cmd = idea_factory();
    cmd.arg("--root").arg(root);
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A workspace with one batch per batch collection and one story
pub fn fixture_workspace() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "concepts/generated/20250101-001.md", FANTASY_BATCH);
    write(root, "concepts/developing/20250102-001.md", HORROR_BATCH);
    write(root, "concepts/favorites/20250103-001.md", SCIFI_BATCH);
    write(root, "stories/ember-crown.md", DRAGON_STORY);
    dir
}

/// An empty workspace with its collection directories in place
pub fn empty_workspace() -> TempDir {
    let dir = tempdir().unwrap();
    for sub in [
        "concepts/generated",
        "concepts/developing",
        "concepts/favorites",
        "stories",
    ] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    dir
}

/// Run `args` with `--format json` and parse stdout
pub fn run_json(root: &Path, args: &[&str]) -> serde_json::Value {
    let output = idea_factory_in(root)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
