//! `idea-factory note` - append a timestamped note to a story

use chrono::NaiveDateTime;

use crate::cli::{Cli, NoteArgs, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::Result;
use idea_factory_core::store::Workspace;
use idea_factory_core::validation::{self, MAX_TERM_LEN, MAX_TEXT_LEN};

/// Execute the note command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &NoteArgs, now: NaiveDateTime) -> Result<()> {
    let text = validation::body_text("note", &args.text, MAX_TERM_LEN)?;
    let section = validation::optional_text("section", args.section.as_deref(), MAX_TEXT_LEN)?;

    let outcome = workspace.add_note(&args.story, &text, section.as_deref(), now)?;
    let path = workspace.relative(&outcome.path);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path,
            "section": outcome.section,
            "fell_back": outcome.fell_back,
        }))?,
        OutputFormat::Human => {
            if outcome.fell_back {
                eprintln!(
                    "warning: section '{}' not found, note added to {}",
                    section.as_deref().unwrap_or_default(),
                    outcome.section
                );
            }
            if !cli.quiet {
                println!("Added note to {} ({})", path, outcome.section);
            }
        }
    }

    Ok(())
}
