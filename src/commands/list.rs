//! `idea-factory list` - list batches and stories
//!
//! Filters are the same as search's metadata filters. Sorting is stable,
//! so records that compare equal keep scan order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::cli::{Cli, ListArgs, ListKind, OutputFormat, SortKey};
use crate::commands::helpers::{or_na, print_json, record_path};
use idea_factory_core::error::Result;
use idea_factory_core::query::RecordFilter;
use idea_factory_core::record::{RecordKind, Status};
use idea_factory_core::scan::{Collection, ScannedRecord};
use idea_factory_core::store::Workspace;
use idea_factory_core::validation::{self, MAX_TEXT_LEN};

#[derive(Debug, Serialize)]
struct ListEntry {
    id: String,
    kind: RecordKind,
    collection: Collection,
    title: String,
    genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<Status>,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    path: String,
}

/// Execute the list command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &ListArgs) -> Result<()> {
    let collections: &[Collection] = match args.kind {
        ListKind::Batches => &Collection::BATCHES,
        ListKind::Stories => &Collection::STORIES,
        ListKind::All => &Collection::ALL,
    };

    let filter = RecordFilter::new()
        .with_genre(validation::optional_text(
            "genre",
            args.genre.as_deref(),
            MAX_TEXT_LEN,
        )?)
        .with_status(args.status);

    let mut records: Vec<ScannedRecord> = workspace
        .scanner()
        .collect(collections)?
        .into_iter()
        .filter(|s| filter.matches(&s.record))
        .collect();
    records.sort_by(|a, b| compare(args.sort, a, b));

    let entries: Vec<ListEntry> = records
        .iter()
        .map(|s| ListEntry {
            id: s.record.id().to_string(),
            kind: s.record.kind,
            collection: s.collection,
            title: s.record.title().to_string(),
            genre: s.record.genre().to_string(),
            status: s.record.status(),
            date: s.record.date_display(),
            count: s.record.frontmatter.count,
            path: record_path(workspace, &s.record),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Human => output_human(cli, &entries),
    }

    Ok(())
}

fn compare(key: SortKey, a: &ScannedRecord, b: &ScannedRecord) -> Ordering {
    let (a, b) = (&a.record, &b.record);
    match key {
        // Undated records sort last
        SortKey::Date => b.frontmatter.date.cmp(&a.frontmatter.date),
        SortKey::Count => b.count_or_zero().cmp(&a.count_or_zero()),
        SortKey::Genre => a.genre().to_lowercase().cmp(&b.genre().to_lowercase()),
        SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
    }
}

fn output_human(cli: &Cli, entries: &[ListEntry]) {
    if entries.is_empty() {
        if !cli.quiet {
            println!("No records found");
        }
        return;
    }

    for entry in entries {
        let detail = match entry.kind {
            RecordKind::Batch => format!("{} concepts", entry.count.unwrap_or(0)),
            RecordKind::Story => entry
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        };
        println!(
            "{} [{}] {} | {} | {} | {}",
            entry.id,
            entry.collection,
            entry.title,
            or_na(&entry.genre),
            entry.date,
            detail
        );
    }

    if !cli.quiet {
        println!();
        println!("{} record(s)", entries.len());
    }
}
