//! Command argument structures

use clap::Args;

use super::output::{ListKind, SortKey};
use super::parse::{parse_collection, parse_export_format, parse_export_type, parse_status};
use idea_factory_core::export::{ExportFormat, ExportType};
use idea_factory_core::record::Status;
use idea_factory_core::scan::Collection;

#[derive(Args, Debug)]
pub struct CreateBatchArgs {
    /// Genre of the concepts
    #[arg(long, short)]
    pub genre: String,

    /// Tropes, comma-separated
    #[arg(long, short)]
    pub tropes: String,

    /// Model that generated the concepts
    #[arg(long, short)]
    pub model: String,

    /// Number of concepts (1-100; workspace default when omitted)
    #[arg(long, short)]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CreateStoryArgs {
    /// Working title
    #[arg(long, short)]
    pub title: String,

    /// Story genre
    #[arg(long, short)]
    pub genre: String,

    /// Originating batch id
    #[arg(long, short)]
    pub origin: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Which records to list
    #[arg(long, short, value_enum, default_value = "all")]
    pub kind: ListKind,

    /// Filter by status
    #[arg(long, short, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Filter by genre (case-insensitive substring)
    #[arg(long, short)]
    pub genre: Option<String>,

    /// Sort order
    #[arg(long, short = 'S', value_enum, default_value = "date")]
    pub sort: SortKey,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub term: String,

    /// Filter by genre (case-insensitive substring)
    #[arg(long, short)]
    pub genre: Option<String>,

    /// Filter by trope (case-insensitive substring)
    #[arg(long, short)]
    pub trope: Option<String>,

    /// Filter by status
    #[arg(long, short, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Maximum number of results (1-1000)
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Approximate matching, ranked by score
    #[arg(long, short)]
    pub fuzzy: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Batch id, story name or story id
    pub id: String,

    /// Show only the concept at this position (batches)
    #[arg(long, short)]
    pub concept: Option<usize>,

    /// Show only the named section (stories)
    #[arg(long, short, conflicts_with = "concept")]
    pub section: Option<String>,

    /// Hide the header
    #[arg(long)]
    pub no_metadata: bool,
}

#[derive(Args, Debug)]
pub struct DevelopArgs {
    /// Batch id
    pub batch_id: String,

    /// Concept position within the batch, starting at 1
    pub ordinal: usize,
}

#[derive(Args, Debug)]
pub struct NoteArgs {
    /// Story name or story id
    pub story: String,

    /// Note text
    pub text: String,

    /// Section to file the note under (defaults to Development Notes)
    #[arg(long, short)]
    pub section: Option<String>,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Batch id
    pub batch_id: String,

    /// Destination: generated, developing or favorites
    #[arg(value_parser = parse_collection)]
    pub collection: Collection,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Include recent activity
    #[arg(long, short)]
    pub detailed: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Which records to export
    #[arg(long, short, value_parser = parse_export_type, default_value = "all")]
    pub r#type: ExportType,

    /// Serialization format
    #[arg(long, value_parser = parse_export_format, default_value = "json")]
    pub output_format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<std::path::PathBuf>,
}

#[derive(Args, Debug)]
pub struct FindSimilarArgs {
    /// Minimum similarity score (0.0-1.0; workspace default when omitted)
    #[arg(long)]
    pub threshold: Option<f64>,
}
