//! `idea-factory move` - relocate a batch between collections

use crate::cli::{Cli, MoveArgs, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::Result;
use idea_factory_core::store::Workspace;

/// Execute the move command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &MoveArgs) -> Result<()> {
    let outcome = workspace.move_batch(&args.batch_id, args.collection)?;
    let path = workspace.relative(&outcome.path);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "id": outcome.id,
            "from": outcome.from,
            "to": outcome.to,
            "path": path,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Moved {} from {} to {}", outcome.id, outcome.from, outcome.to);
            }
        }
    }

    Ok(())
}
