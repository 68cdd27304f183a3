//! CLI argument parsing for idea-factory
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{
    CreateBatchArgs, CreateStoryArgs, DevelopArgs, ExportArgs, FindSimilarArgs, ListArgs, MoveArgs,
    NoteArgs, SearchArgs, ShowArgs, StatsArgs,
};
pub use output::{ListKind, OutputFormat, SortKey};

/// Environment variable naming the workspace root
pub const ROOT_ENV_VAR: &str = "IDEA_FACTORY_ROOT";

/// idea-factory - organize AI-generated story concepts
#[derive(Parser, Debug)]
#[command(name = "idea-factory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace directory (searched upwards for the workspace root)
    #[arg(long, global = true, env = ROOT_ENV_VAR)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `idea_factory_core::scan=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new concept batch in concepts/generated
    CreateBatch(CreateBatchArgs),

    /// Create a new story-development document
    CreateStory(CreateStoryArgs),

    /// List batches and stories
    List(ListArgs),

    /// Search batches and stories for a term
    Search(SearchArgs),

    /// Show a batch or story
    Show(ShowArgs),

    /// Develop a concept from a batch into a story
    Develop(DevelopArgs),

    /// Add a timestamped note to a story
    Note(NoteArgs),

    /// Move a batch to another collection
    Move(MoveArgs),

    /// Regenerate the index document
    UpdateIndex,

    /// Show workspace statistics
    Stats(StatsArgs),

    /// Export record metadata as JSON or YAML
    Export(ExportArgs),

    /// Find similar concepts across batches
    FindSimilar(FindSimilarArgs),
}
