use std::fmt::{self, Write};

use super::{BatchEntry, IndexDocument, StoryEntry};
use crate::record::DATE_FORMAT;

/// First line of the user-owned tail of the index
pub const MANUAL_MARKER: &str = "## Manual Updates";

/// Manual section written when the index has none yet
pub const DEFAULT_MANUAL_SECTION: &str =
    "## Manual Updates\nYou can manually add notes and cross-references below this line.\n\n";

const MISSING: &str = "N/A";

pub(super) fn render(doc: &IndexDocument, manual_section: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.push_str("# Story Concepts Index\n\n");
    out.push_str("This file tracks every story concept in the workspace.\n\n");

    render_stats(&mut out, doc)?;
    out.push_str("\n---\n\n## Concept Batches\n\n");

    for (collection, entries) in &doc.batches {
        if entries.is_empty() {
            continue;
        }
        writeln!(out, "### {}\n", collection.label().to_uppercase())?;
        for entry in entries {
            render_batch(&mut out, entry)?;
        }
        out.push('\n');
    }

    out.push_str("---\n\n## Stories in Development\n\n");
    for story in &doc.stories {
        render_story(&mut out, story)?;
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str(manual_section);
    Ok(out)
}

fn render_stats(out: &mut String, doc: &IndexDocument) -> fmt::Result {
    let stats = &doc.stats;
    out.push_str("## Statistics\n");
    writeln!(out, "- Total Batches: {}", stats.total_batches)?;
    writeln!(out, "- Total Concepts: {}", stats.total_concepts)?;
    writeln!(out, "- Stories in Development: {}", stats.stories_in_development)?;
    writeln!(out, "- Total Stories: {}", stats.total_stories)?;
    for (collection, count) in &stats.per_collection {
        if collection.is_batch() {
            writeln!(out, "- Batches ({}): {}", collection.label(), count)?;
        }
    }
    Ok(())
}

fn render_batch(out: &mut String, entry: &BatchEntry) -> fmt::Result {
    writeln!(
        out,
        "- **[{}]** {} ({} concepts) - {} - `{}`",
        entry.id,
        or_missing(&entry.genre),
        entry.count,
        date_or_missing(entry.date),
        entry.path
    )
}

fn render_story(out: &mut String, story: &StoryEntry) -> fmt::Result {
    let status = story.status.map(|s| s.as_str()).unwrap_or(MISSING);
    let tropes = if story.tags.is_empty() {
        MISSING.to_string()
    } else {
        story.tags.join(", ")
    };
    writeln!(out, "- **{}** [{}]", story.title, status)?;
    writeln!(out, "  - Genre: {}", or_missing(&story.genre))?;
    writeln!(out, "  - Tropes: {}", tropes)?;
    writeln!(out, "  - File: `{}`", story.path)
}

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING
    } else {
        value
    }
}

fn date_or_missing(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
