//! `idea-factory find-similar` - near-duplicate concepts across batches

use crate::cli::{Cli, FindSimilarArgs, OutputFormat};
use crate::commands::helpers::print_json;
use idea_factory_core::error::Result;
use idea_factory_core::similarity::{SimilarPair, SimilarityEngine};
use idea_factory_core::store::Workspace;
use idea_factory_core::validation;

/// Execute the find-similar command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &FindSimilarArgs) -> Result<()> {
    let threshold =
        validation::threshold(args.threshold.unwrap_or(workspace.config().similarity_threshold))?;

    let engine = SimilarityEngine::build(workspace)?;
    let pairs = engine.find_similar(threshold);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "threshold": threshold,
            "concepts": engine.len(),
            "pairs": pairs,
        }))?,
        OutputFormat::Human => output_human(cli, threshold, &pairs),
    }

    Ok(())
}

fn output_human(cli: &Cli, threshold: f64, pairs: &[SimilarPair]) {
    if pairs.is_empty() {
        if !cli.quiet {
            println!(
                "No similar concepts found above {:.0}% similarity",
                threshold * 100.0
            );
        }
        return;
    }

    if !cli.quiet {
        println!("Found {} similar pair(s):", pairs.len());
        println!();
    }
    for (i, pair) in pairs.iter().enumerate() {
        println!("{}. Similarity: {:.0}%", i + 1, pair.score * 100.0);
        println!(
            "   A: {} #{} - {}",
            pair.a.batch_id, pair.a.ordinal, pair.a.title
        );
        println!(
            "   B: {} #{} - {}",
            pair.b.batch_id, pair.b.ordinal, pair.b.title
        );
        println!();
    }
}
