//! Workspace statistics

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::record::{Record, Status};
use crate::scan::{Collection, ScannedRecord};
use crate::store::Workspace;

/// Number of entries kept in each ranking
pub const TOP_N: usize = 10;

const UNKNOWN: &str = "Unknown";
const NO_STATUS: &str = "unknown";

/// A label with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub name: String,
    pub count: usize,
}

/// Summary of a batch for the recent-activity list
#[derive(Debug, Clone, Serialize)]
pub struct RecentBatch {
    pub id: String,
    pub genre: String,
    pub date: Option<NaiveDate>,
    pub count: u32,
    pub collection: Collection,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceStats {
    pub total_batches: usize,
    pub total_concepts: u64,
    pub total_stories: usize,
    pub stories_in_development: usize,
    /// Batch count per collection
    pub batches_by_collection: Vec<Tally>,
    /// Batch count per header status, most frequent first
    pub batches_by_status: Vec<Tally>,
    pub top_genres: Vec<Tally>,
    pub top_tropes: Vec<Tally>,
    pub recent_batches: Vec<RecentBatch>,
}

impl WorkspaceStats {
    /// Scan the workspace and compute the statistics
    #[tracing::instrument(skip(workspace))]
    pub fn collect(workspace: &Workspace) -> Result<Self> {
        let batches = workspace.batches()?;
        let stories = workspace.stories()?;

        let batches_by_collection = Collection::BATCHES
            .iter()
            .map(|c| Tally {
                name: c.label().to_string(),
                count: batches.iter().filter(|b| b.collection == *c).count(),
            })
            .collect();

        let mut statuses = Counter::default();
        let mut genres = Counter::default();
        let mut tropes = Counter::default();
        for scanned in batches.iter().chain(stories.iter()) {
            let record = &scanned.record;
            if record.kind == crate::record::RecordKind::Batch {
                statuses.add(record.status().map(Status::as_str).unwrap_or(NO_STATUS));
            }
            let listed: Vec<&str> = record
                .frontmatter
                .genres()
                .into_iter()
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .collect();
            if listed.is_empty() {
                genres.add(UNKNOWN);
            }
            for genre in listed {
                genres.add(genre);
            }
            for trope in record.tags().iter().filter(|t| !t.trim().is_empty()) {
                tropes.add(trope);
            }
        }

        Ok(WorkspaceStats {
            total_batches: batches.len(),
            total_concepts: batches
                .iter()
                .map(|b| u64::from(b.record.count_or_zero()))
                .sum(),
            total_stories: stories.len(),
            stories_in_development: stories
                .iter()
                .filter(|s| s.record.status() == Some(Status::Developing))
                .count(),
            batches_by_collection,
            batches_by_status: statuses.ranked(usize::MAX),
            top_genres: genres.ranked(TOP_N),
            top_tropes: tropes.ranked(TOP_N),
            recent_batches: recent_batches(&batches, TOP_N),
        })
    }
}

fn genre_label(record: &Record) -> &str {
    match record.genre().trim() {
        "" => UNKNOWN,
        genre => genre,
    }
}

fn recent_batches(batches: &[ScannedRecord], limit: usize) -> Vec<RecentBatch> {
    let mut recent: Vec<RecentBatch> = batches
        .iter()
        .map(|b| RecentBatch {
            id: b.record.id().to_string(),
            genre: genre_label(&b.record).to_string(),
            date: b.record.frontmatter.date,
            count: b.record.count_or_zero(),
            collection: b.collection,
        })
        .collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Occurrence counter that remembers first-seen order for ties
#[derive(Default)]
struct Counter {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl Counter {
    fn add(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
                self.order.push(name.to_string());
            }
        }
    }

    /// Most frequent first; ties keep first-seen order
    fn ranked(&self, limit: usize) -> Vec<Tally> {
        let mut ranked: Vec<Tally> = self
            .order
            .iter()
            .map(|name| Tally {
                name: name.clone(),
                count: self.counts.get(name).copied().unwrap_or(0),
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}
