//! `idea-factory update-index` - regenerate the index document

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::Result;
use idea_factory_core::index::IndexDocument;
use idea_factory_core::store::Workspace;

/// Execute the update-index command
pub fn execute(cli: &Cli, workspace: &Workspace) -> Result<()> {
    let written = IndexDocument::write(workspace)?;
    let stats = &written.document.stats;
    let path = workspace.relative(&written.path);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "status": "ok",
            "path": path,
            "total_batches": stats.total_batches,
            "total_concepts": stats.total_concepts,
            "total_stories": stats.total_stories,
            "stories_in_development": stats.stories_in_development,
            "preserved_manual_section": written.preserved_manual,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Updated {} ({} batches, {} concepts, {} stories)",
                    path, stats.total_batches, stats.total_concepts, stats.total_stories
                );
            }
        }
    }

    Ok(())
}
