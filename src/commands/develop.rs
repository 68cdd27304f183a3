//! `idea-factory develop` - turn a concept into a story document

use chrono::NaiveDateTime;

use crate::cli::{Cli, DevelopArgs, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::Result;
use idea_factory_core::promote::Promoter;
use idea_factory_core::store::Workspace;

/// Execute the develop command
pub fn execute(
    cli: &Cli,
    workspace: &Workspace,
    args: &DevelopArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let promotion = Promoter::new(workspace).promote(&args.batch_id, args.ordinal, now)?;
    let path = workspace.relative(&promotion.path);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "batch_id": promotion.batch_id,
            "ordinal": promotion.ordinal,
            "story_id": promotion.record.id(),
            "title": promotion.title,
            "genre": promotion.genre,
            "path": path,
        }))?,
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", path);
            } else {
                println!(
                    "Developed concept #{} from batch {}: {}",
                    promotion.ordinal, promotion.batch_id, promotion.title
                );
                println!("  {}", path);
            }
        }
    }

    Ok(())
}
