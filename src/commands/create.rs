//! `idea-factory create-batch` / `create-story` - instantiate templates

use chrono::NaiveDateTime;

use crate::cli::{Cli, CreateBatchArgs, CreateStoryArgs, OutputFormat};
use crate::commands::helpers::{print_json, record_path};
use idea_factory_core::error::Result;
use idea_factory_core::record::Record;
use idea_factory_core::store::{NewBatch, NewStory, Workspace};
use idea_factory_core::validation::{self, MAX_TEXT_LEN};

/// Execute `create-batch`
pub fn execute_batch(
    cli: &Cli,
    workspace: &Workspace,
    args: &CreateBatchArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let batch = NewBatch {
        genre: validation::required_text("genre", &args.genre, MAX_TEXT_LEN)?,
        tropes: split_tropes(&args.tropes)?,
        model: validation::required_text("model", &args.model, MAX_TEXT_LEN)?,
        count: validation::count(args.count.unwrap_or(workspace.config().default_count))?,
    };

    let record = workspace.create_batch(&batch, now.date())?;
    print_created(cli, workspace, &record, "batch")
}

/// Execute `create-story`
pub fn execute_story(
    cli: &Cli,
    workspace: &Workspace,
    args: &CreateStoryArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let story = NewStory {
        title: validation::required_text("title", &args.title, MAX_TEXT_LEN)?,
        genre: validation::required_text("genre", &args.genre, MAX_TEXT_LEN)?,
        origin: validation::optional_text("origin", args.origin.as_deref(), MAX_TEXT_LEN)?,
    };

    let record = workspace.create_story(&story, now)?;
    print_created(cli, workspace, &record, "story")
}

/// Comma-separated tropes, trimmed; at least one is required
fn split_tropes(raw: &str) -> Result<Vec<String>> {
    let tropes = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| validation::required_text("trope", t, MAX_TEXT_LEN))
        .collect::<Result<Vec<_>>>()?;

    if tropes.is_empty() {
        idea_factory_core::bail_invalid!("tropes", "at least one trope is required");
    }
    Ok(tropes)
}

fn print_created(cli: &Cli, workspace: &Workspace, record: &Record, kind: &str) -> Result<()> {
    let path = record_path(workspace, record);
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "kind": kind,
            "id": record.id(),
            "title": record.title(),
            "genre": record.genre(),
            "tropes": record.tags(),
            "path": path,
        })),
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", path);
            } else {
                println!("Created {} {}", kind, record.id());
                println!("  {}", path);
            }
            Ok(())
        }
    }
}
