//! `idea-factory search` - full-text search across all collections

use crate::cli::{Cli, OutputFormat, SearchArgs};
use crate::commands::helpers::{or_na, print_json};
use idea_factory_core::error::Result;
use idea_factory_core::query::{search, RecordFilter, SearchHit, SearchQuery};
use idea_factory_core::store::Workspace;
use idea_factory_core::validation::{self, MAX_TEXT_LEN};

/// Execute the search command
pub fn execute(cli: &Cli, workspace: &Workspace, args: &SearchArgs) -> Result<()> {
    let term = validation::search_term(&args.term)?;
    let limit = args
        .limit
        .or(workspace.config().search_limit)
        .map(validation::limit)
        .transpose()?;

    let filter = RecordFilter::new()
        .with_genre(validation::optional_text("genre", args.genre.as_deref(), MAX_TEXT_LEN)?)
        .with_tag(validation::optional_text("trope", args.trope.as_deref(), MAX_TEXT_LEN)?)
        .with_status(args.status);

    let query = SearchQuery::new(term)
        .with_filter(filter)
        .with_limit(limit)
        .with_fuzzy(args.fuzzy);
    let hits = search(workspace, &query)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "term": query.term,
            "fuzzy": query.fuzzy,
            "count": hits.len(),
            "results": hits,
        }))?,
        OutputFormat::Human => output_human(cli, &query.term, &hits),
    }

    Ok(())
}

fn output_human(cli: &Cli, term: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", term);
        }
        return;
    }

    if !cli.quiet {
        println!("Found {} result(s) for '{}':", hits.len(), term);
        println!();
    }

    for hit in hits {
        println!("{} [{}] {}", hit.id, hit.collection, hit.title);
        println!("  Genre: {}", or_na(&hit.genre));
        if let Some(status) = hit.status {
            println!("  Status: {}", status);
        }
        println!("  Path: {}", hit.path);
        if let Some(score) = hit.score {
            println!("  Score: {:.0}%", score * 100.0);
        }
        if !hit.preview.is_empty() {
            println!("  {}", hit.preview);
        }
        for concept in &hit.concepts {
            println!("  -> Concept {}: {}", concept.ordinal, concept.title);
        }
        println!();
    }
}
