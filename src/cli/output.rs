use clap::ValueEnum;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable text
    Human,
    /// One JSON document on stdout
    Json,
}

/// Record selection for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Batches,
    Stories,
    All,
}

/// Sort order for `list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Newest first
    Date,
    /// Largest batches first
    Count,
    Genre,
    Title,
}
