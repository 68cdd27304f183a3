//! `idea-factory show` - display a batch or story
//!
//! The identifier is tried as a batch first, then as a story.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, ShowArgs};
use crate::commands::helpers::{or_na, print_json, record_path};
use idea_factory_core::error::{FactoryError, Result};
use idea_factory_core::record::{Record, RecordKind};
use idea_factory_core::scan::Collection;
use idea_factory_core::store::Workspace;

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    id: &'a str,
    kind: RecordKind,
    collection: Collection,
    title: &'a str,
    genre: &'a str,
    tropes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<&'a str>,
    path: String,
    content: String,
}

/// Execute the show command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &ShowArgs) -> Result<()> {
    let (record, collection) = lookup(workspace, &args.id)?;
    let content = select_content(&record, args)?;

    match cli.format {
        OutputFormat::Json => {
            let output = ShowOutput {
                id: record.id(),
                kind: record.kind,
                collection,
                title: record.title(),
                genre: record.genre(),
                tropes: record.tags(),
                status: record.status().map(|s| s.to_string()),
                date: record.date_display(),
                count: record.frontmatter.count,
                origin: record.frontmatter.origin.as_deref(),
                path: record_path(workspace, &record),
                content,
            };
            print_json(&output)?;
        }
        OutputFormat::Human => {
            if !args.no_metadata {
                print_metadata(workspace, &record, collection);
                println!();
            }
            println!("{}", content.trim_end());
        }
    }

    Ok(())
}

fn lookup(workspace: &Workspace, id: &str) -> Result<(Record, Collection)> {
    match workspace.find_batch(id) {
        Ok(scanned) => return Ok((scanned.record, scanned.collection)),
        Err(FactoryError::BatchNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    match workspace.find_story(id) {
        Ok(record) => Ok((record, Collection::Stories)),
        Err(FactoryError::StoryNotFound { .. }) => {
            Err(FactoryError::not_found("batch or story", id))
        }
        Err(e) => Err(e),
    }
}

/// Body, single concept or single section, per the arguments
fn select_content(record: &Record, args: &ShowArgs) -> Result<String> {
    if let Some(ordinal) = args.concept {
        if record.kind != RecordKind::Batch {
            idea_factory_core::bail_usage!("--concept applies to batches only");
        }
        let concepts = record.concepts();
        let concept = ordinal
            .checked_sub(1)
            .and_then(|i| concepts.get(i))
            .ok_or_else(|| FactoryError::ConceptOutOfRange {
                batch_id: record.id().to_string(),
                ordinal,
                available: concepts.len(),
            })?;
        return Ok(concept.to_markdown());
    }

    if let Some(name) = &args.section {
        if record.kind != RecordKind::Story {
            idea_factory_core::bail_usage!("--section applies to stories only");
        }
        return record
            .section(name)
            .ok_or_else(|| FactoryError::not_found("section", name));
    }

    Ok(record.body.trim_start_matches('\n').to_string())
}

fn print_metadata(workspace: &Workspace, record: &Record, collection: Collection) {
    println!("ID: {}", record.id());
    println!("Title: {}", record.title());
    println!("Collection: {}", collection);
    println!("Genre: {}", or_na(record.genre()));
    if !record.tags().is_empty() {
        println!("Tropes: {}", record.tags().join(", "));
    }
    if let Some(status) = record.status() {
        println!("Status: {}", status);
    }
    println!("Date: {}", record.date_display());
    match record.kind {
        RecordKind::Batch => println!("Count: {}", record.count_or_zero()),
        RecordKind::Story => {
            if let Some(origin) = &record.frontmatter.origin {
                println!("Origin: {}", origin);
            }
        }
    }
    println!("Path: {}", record_path(workspace, record));
}
