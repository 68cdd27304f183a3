//! Full-text search over the workspace
//!
//! Matching is a case-insensitive substring test against the whole record
//! text, header included. Results keep scan order: batch collections first,
//! then stories. There is no ranking.
//!
//! Fuzzy mode scores each concept (batches) or the title and body (stories)
//! with [`partial_ratio`] instead, keeps records scoring above
//! [`FUZZY_THRESHOLD`] and ranks them by score.

mod filter;

pub use filter::RecordFilter;

use serde::Serialize;

use crate::error::Result;
use crate::record::{RecordKind, Status};
use crate::scan::{Collection, ScannedRecord};
use crate::store::Workspace;
use crate::text::{contains_ignore_case, partial_ratio, preview};

/// Minimum fuzzy score (exclusive) for a record or concept to match
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// A search request
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Substring to look for; empty matches every record
    pub term: String,
    /// Metadata filters, checked before the text match
    pub filter: RecordFilter,
    /// Maximum number of hits; `None` is unlimited
    pub limit: Option<usize>,
    /// Score approximate matches and rank by score
    pub fuzzy: bool,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        SearchQuery {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

/// A concept inside a matching batch whose own text matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptMatch {
    pub ordinal: usize,
    pub title: String,
}

/// One matching record
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub kind: RecordKind,
    pub collection: Collection,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Path relative to the workspace root
    pub path: String,
    pub preview: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<ConceptMatch>,
    /// Fuzzy score in `0.0..=1.0`, only set in fuzzy mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Search every collection for records matching `query`
#[tracing::instrument(skip(workspace, query), fields(term = %query.term, limit = ?query.limit))]
pub fn search(workspace: &Workspace, query: &SearchQuery) -> Result<Vec<SearchHit>> {
    let start = std::time::Instant::now();
    let context = workspace.config().preview_context;
    let limit = query.limit.unwrap_or(usize::MAX);

    let mut hits = Vec::new();
    let mut scanned_count = 0usize;
    for scanned in workspace.scanner().scan(&Collection::ALL) {
        if !query.fuzzy && hits.len() >= limit {
            break;
        }
        let scanned = scanned?;
        scanned_count += 1;

        if !query.filter.matches(&scanned.record) {
            continue;
        }
        if query.fuzzy {
            hits.extend(fuzzy_hit(workspace, scanned, &query.term, context));
        } else if contains_ignore_case(&scanned.record.text(), &query.term) {
            hits.push(to_hit(workspace, scanned, &query.term, context));
        }
    }

    if query.fuzzy {
        // Stable sort: equal scores keep scan order
        hits.sort_by(|a, b| b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)));
        hits.truncate(limit);
    }

    crate::trace_time!(start, "search", scanned = scanned_count, hits = hits.len());
    Ok(hits)
}

fn to_hit(workspace: &Workspace, scanned: ScannedRecord, term: &str, context: usize) -> SearchHit {
    let record = &scanned.record;

    // Prefer an excerpt from the body; header-only matches fall back to the full text.
    let excerpt = if contains_ignore_case(&record.body, term) {
        preview(&record.body, term, context)
    } else {
        preview(&record.text(), term, context)
    };

    let concepts = match record.kind {
        RecordKind::Batch => record
            .concepts()
            .into_iter()
            .filter(|c| contains_ignore_case(&c.text(), term))
            .map(|c| ConceptMatch {
                ordinal: c.ordinal,
                title: c.display_title(),
            })
            .collect(),
        RecordKind::Story => Vec::new(),
    };

    SearchHit {
        id: record.id().to_string(),
        title: record.title().to_string(),
        kind: record.kind,
        collection: scanned.collection,
        genre: record.genre().to_string(),
        status: record.status(),
        path: record
            .path
            .as_deref()
            .map(|p| workspace.relative(p))
            .unwrap_or_default(),
        preview: excerpt,
        concepts,
        score: None,
    }
}

/// Score a record approximately; `None` when nothing clears the threshold.
fn fuzzy_hit(
    workspace: &Workspace,
    scanned: ScannedRecord,
    term: &str,
    context: usize,
) -> Option<SearchHit> {
    let record = &scanned.record;
    let (score, concepts) = match record.kind {
        RecordKind::Batch => {
            let scored: Vec<_> = record
                .concepts()
                .into_iter()
                .map(|c| (partial_ratio(term, &c.text()), c))
                .collect();
            if scored.is_empty() {
                (partial_ratio(term, &record.text()), Vec::new())
            } else {
                let best = scored.iter().map(|(s, _)| *s).fold(0.0, f64::max);
                let matched = scored
                    .into_iter()
                    .filter(|(s, _)| *s > FUZZY_THRESHOLD)
                    .map(|(_, c)| ConceptMatch {
                        ordinal: c.ordinal,
                        title: c.display_title(),
                    })
                    .collect();
                (best, matched)
            }
        }
        RecordKind::Story => {
            let text = format!("{}\n{}", record.title(), record.body);
            (partial_ratio(term, &text), Vec::new())
        }
    };
    if score <= FUZZY_THRESHOLD {
        return None;
    }

    tracing::trace!(id = record.id(), score, "fuzzy match");
    let mut hit = to_hit(workspace, scanned, term, context);
    hit.concepts = concepts;
    hit.score = Some(score);
    Some(hit)
}
