//! Index document generation
//!
//! The index is recomputed from the collection files on every rebuild and
//! rendered without timestamps, so rebuilding an unchanged workspace is
//! byte-identical. Everything from the manual-updates marker onwards is
//! owned by the user and carried over verbatim.

mod render;

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{write_error, FactoryError, Result};
use crate::record::Status;
use crate::scan::{Collection, ScannedRecord};
use crate::store::Workspace;

pub use render::{DEFAULT_MANUAL_SECTION, MANUAL_MARKER};

/// Aggregate figures shown in the statistics block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub total_batches: usize,
    /// Sum of declared `count` fields; missing counts contribute zero
    pub total_concepts: u64,
    /// Stories whose status is `developing`
    pub stories_in_development: usize,
    pub total_stories: usize,
    /// Record count per collection, in traversal order
    pub per_collection: Vec<(Collection, usize)>,
}

/// One batch line in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub id: String,
    pub genre: String,
    pub count: u32,
    pub date: Option<NaiveDate>,
    pub path: String,
}

/// One story block in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryEntry {
    pub title: String,
    pub status: Option<Status>,
    pub genre: String,
    pub tags: Vec<String>,
    pub date: Option<NaiveDate>,
    pub path: String,
}

/// The generated part of the index document
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexDocument {
    pub stats: IndexStats,
    /// Batch entries grouped by collection, newest first within each
    pub batches: Vec<(Collection, Vec<BatchEntry>)>,
    /// Story entries, newest first
    pub stories: Vec<StoryEntry>,
}

/// Result of writing the index to disk
#[derive(Debug, Clone)]
pub struct IndexWrite {
    pub path: PathBuf,
    /// Whether a previous manual section was carried over
    pub preserved_manual: bool,
    pub document: IndexDocument,
}

impl IndexDocument {
    /// Recompute the index from the workspace files
    #[tracing::instrument(skip(workspace), fields(root = %workspace.root().display()))]
    pub fn rebuild(workspace: &Workspace) -> Result<Self> {
        let start = std::time::Instant::now();
        let mut doc = IndexDocument::default();

        for collection in Collection::BATCHES {
            let scanned = workspace.scanner().collect(&[collection])?;
            doc.stats.total_batches += scanned.len();
            doc.stats.per_collection.push((collection, scanned.len()));

            let mut entries: Vec<BatchEntry> = scanned
                .iter()
                .map(|s| batch_entry(workspace, s))
                .collect();
            for entry in &entries {
                doc.stats.total_concepts += u64::from(entry.count);
            }
            entries.sort_by(|a, b| b.date.cmp(&a.date));
            doc.batches.push((collection, entries));
        }

        let stories = workspace.scanner().collect(&Collection::STORIES)?;
        doc.stats.total_stories = stories.len();
        doc.stats
            .per_collection
            .push((Collection::Stories, stories.len()));
        doc.stats.stories_in_development = stories
            .iter()
            .filter(|s| s.record.status() == Some(Status::Developing))
            .count();

        doc.stories = stories.iter().map(|s| story_entry(workspace, s)).collect();
        doc.stories.sort_by(|a, b| b.date.cmp(&a.date));

        crate::trace_time!(
            start,
            "index_rebuild",
            batches = doc.stats.total_batches,
            stories = doc.stats.total_stories
        );
        Ok(doc)
    }

    /// Render the full document followed by `manual_section`
    pub fn render(&self, manual_section: &str) -> Result<String> {
        Ok(render::render(self, manual_section)?)
    }

    /// Rebuild the index and write it, keeping the previous manual section
    pub fn write(workspace: &Workspace) -> Result<IndexWrite> {
        let document = Self::rebuild(workspace)?;
        let path = workspace.index_path();

        let previous = match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(FactoryError::io_operation("read", path.display(), e)),
        };
        let manual = previous.as_deref().and_then(manual_section);
        let preserved_manual = manual.is_some();

        let content = document.render(manual.unwrap_or(DEFAULT_MANUAL_SECTION))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }
        fs::write(&path, content).map_err(|e| write_error(&path, e))?;
        tracing::info!(path = %path.display(), preserved_manual, "index written");

        Ok(IndexWrite {
            path,
            preserved_manual,
            document,
        })
    }
}

/// The manual-updates marker line and everything after it
pub fn manual_section(content: &str) -> Option<&str> {
    if content.starts_with(MANUAL_MARKER) {
        return Some(content);
    }
    let needle = format!("\n{}", MANUAL_MARKER);
    content.find(&needle).map(|at| &content[at + 1..])
}

fn batch_entry(workspace: &Workspace, scanned: &ScannedRecord) -> BatchEntry {
    let record = &scanned.record;
    BatchEntry {
        id: record.id().to_string(),
        genre: record.genre().to_string(),
        count: record.count_or_zero(),
        date: record.frontmatter.date,
        path: scanned.path().map(|p| workspace.relative(p)).unwrap_or_default(),
    }
}

fn story_entry(workspace: &Workspace, scanned: &ScannedRecord) -> StoryEntry {
    let record = &scanned.record;
    StoryEntry {
        title: record.title().to_string(),
        status: record.status(),
        genre: record.genre().to_string(),
        tags: record.tags().to_vec(),
        date: record.frontmatter.date,
        path: scanned.path().map(|p| workspace.relative(p)).unwrap_or_default(),
    }
}
