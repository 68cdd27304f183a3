//! Promote a concept from a batch into a story-development document

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{FactoryError, Result};
use crate::record::{Concept, ConceptDetails, Record, RecordKind, DATE_FORMAT};
use crate::store::lifecycle::insert_after_dev_notes_heading;
use crate::store::Workspace;
use crate::template::{story_placeholders, Template};

const UNKNOWN_GENRE: &str = "Unknown";

/// A story created from a concept
#[derive(Debug, Clone, Serialize)]
pub struct Promotion {
    pub batch_id: String,
    pub ordinal: usize,
    pub title: String,
    pub genre: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub record: Record,
}

/// Creates story documents from batch concepts
pub struct Promoter<'a> {
    workspace: &'a Workspace,
}

impl<'a> Promoter<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Promoter { workspace }
    }

    /// Develop concept `ordinal` (1-based, by position) of batch `batch_id`.
    ///
    /// Nothing is written when the batch or concept does not exist.
    #[tracing::instrument(skip(self, now))]
    pub fn promote(&self, batch_id: &str, ordinal: usize, now: NaiveDateTime) -> Result<Promotion> {
        let batch = self.workspace.find_batch(batch_id)?;
        let batch_id = batch.record.id().to_string();
        let concepts = batch.record.concepts();

        let concept = ordinal
            .checked_sub(1)
            .and_then(|i| concepts.get(i))
            .ok_or_else(|| FactoryError::ConceptOutOfRange {
                batch_id: batch_id.clone(),
                ordinal,
                available: concepts.len(),
            })?;

        let genre = match batch.record.genre().trim() {
            "" => UNKNOWN_GENRE.to_string(),
            g => g.to_string(),
        };
        let title = concept.display_title();
        let details = concept.details();

        let template = Template::load(self.workspace.root(), RecordKind::Story)?;
        let template = with_dev_notes(&template, &notes_entry(&batch_id, concept, &details, now));

        let tropes = format!("tropes: [{}]", batch.record.tags().join(", "));
        let mut extra = vec![(story_placeholders::TROPES, tropes.as_str())];
        if !details.high_concept.is_empty() {
            extra.push((story_placeholders::HIGH_CONCEPT, details.high_concept.as_str()));
        }
        if !details.synopsis.is_empty() {
            extra.push((story_placeholders::SYNOPSIS, details.synopsis.as_str()));
        }

        let record = self
            .workspace
            .write_story(&template, &title, &genre, &batch_id, &extra, now)?;
        let path = record
            .path
            .clone()
            .ok_or_else(|| FactoryError::Other("story has no file path".to_string()))?;
        tracing::info!(batch = %batch_id, ordinal, path = %path.display(), "concept developed");

        Ok(Promotion {
            batch_id,
            ordinal,
            title,
            genre,
            path,
            record,
        })
    }
}

/// The story template with the development-notes entry already filed
fn with_dev_notes(template: &Template, entry: &str) -> Template {
    Template::from_text(
        template.kind(),
        insert_after_dev_notes_heading(template.text(), entry),
    )
}

fn notes_entry(
    batch_id: &str,
    concept: &Concept,
    details: &ConceptDetails,
    now: NaiveDateTime,
) -> String {
    let mut entry = format!(
        "\n### [{}] From Batch {}, Concept #{}\n\n",
        now.date().format(DATE_FORMAT),
        batch_id,
        concept.number
    );
    if !details.key_elements.is_empty() {
        entry.push_str("**Key Elements from Concept:**\n");
        for element in &details.key_elements {
            entry.push_str("- ");
            entry.push_str(element);
            entry.push('\n');
        }
        entry.push('\n');
    }
    if !details.initial_thoughts.is_empty() {
        entry.push_str("**Initial Thoughts:**\n");
        entry.push_str(&details.initial_thoughts);
        entry.push('\n');
    }
    entry
}
