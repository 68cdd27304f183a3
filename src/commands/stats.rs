//! `idea-factory stats` - workspace statistics

use crate::cli::{Cli, OutputFormat, StatsArgs};
use crate::commands::helpers::{or_na, print_json};
use idea_factory_core::error::Result;
use idea_factory_core::stats::{Tally, WorkspaceStats};
use idea_factory_core::store::Workspace;

/// Execute the stats command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &StatsArgs) -> Result<()> {
    let mut stats = WorkspaceStats::collect(workspace)?;
    if !args.detailed {
        stats.recent_batches.clear();
    }

    match cli.format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Human => output_human(&stats, args.detailed),
    }

    Ok(())
}

fn output_human(stats: &WorkspaceStats, detailed: bool) {
    println!("Batches: {}", stats.total_batches);
    println!("Concepts: {}", stats.total_concepts);
    println!("Stories: {}", stats.total_stories);
    println!("Stories in development: {}", stats.stories_in_development);

    print_tallies("Batches by collection", &stats.batches_by_collection);
    print_tallies("Batches by status", &stats.batches_by_status);
    print_tallies("Top genres", &stats.top_genres);
    print_tallies("Top tropes", &stats.top_tropes);

    if detailed {
        println!();
        println!("Recent batches:");
        if stats.recent_batches.is_empty() {
            println!("  (none)");
        }
        for batch in &stats.recent_batches {
            let date = batch
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            println!(
                "  {} [{}] {} | {} | {} concepts",
                batch.id,
                batch.collection,
                or_na(&batch.genre),
                date,
                batch.count
            );
        }
    }
}

fn print_tallies(heading: &str, tallies: &[Tally]) {
    if tallies.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for tally in tallies {
        println!("  {}: {}", tally.name, tally.count);
    }
}
