//! `idea-factory export` - dump record headers as JSON, YAML or CSV

use std::fs;

use crate::cli::{Cli, ExportArgs, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::{FactoryError, Result};
use idea_factory_core::export::Export;
use idea_factory_core::store::Workspace;

/// Execute the export command.
///
/// Without `--output` the export itself is the command output and is
/// written to stdout in the requested serialization.
pub fn execute(cli: &Cli, workspace: &Workspace, args: &ExportArgs) -> Result<()> {
    let export = Export::gather(workspace, args.r#type)?;
    let rendered = export.render(args.output_format)?;

    let Some(output) = &args.output else {
        print!("{}", rendered);
        return Ok(());
    };

    fs::write(output, rendered)
        .map_err(|e| FactoryError::io_operation("write", output.display(), e))?;
    tracing::info!(path = %output.display(), records = export.len(), "export written");

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "status": "ok",
            "type": args.r#type.to_string(),
            "format": args.output_format.to_string(),
            "records": export.len(),
            "path": output.display().to_string(),
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Exported {} record(s) to {}",
                    export.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}
