//! Record creation and lifecycle management

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::{read_error, write_error, FactoryError, Result};
use crate::record::{parse, Record, RecordKind, DATE_FORMAT};
use crate::scan::Collection;
use crate::template::{batch_placeholders, story_placeholders, Template};
use crate::text::slugify;
use crate::validation::{self, MAX_TEXT_LEN};

use super::io::{overwrite, write_new};
use super::paths::RECORD_EXTENSION;
use super::Workspace;

const DEV_NOTES_HEADING: &str = "## Development Notes";
const NOTE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
const BATCH_ID_DATE_FORMAT: &str = "%Y%m%d";
const MAX_BATCHES_PER_DAY: u32 = 999;

/// Parameters for a new concept batch
#[derive(Debug, Clone)]
pub struct NewBatch {
    pub genre: String,
    pub tropes: Vec<String>,
    pub model: String,
    pub count: u32,
}

/// Parameters for a new story-development document
#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub genre: String,
    /// Originating batch id, if any
    pub origin: Option<String>,
}

impl NewBatch {
    /// Reject values that would corrupt the generated header
    pub fn validate(&self) -> Result<()> {
        validation::required_text("genre", &self.genre, MAX_TEXT_LEN)?;
        validation::required_text("model", &self.model, MAX_TEXT_LEN)?;
        for trope in &self.tropes {
            validation::required_text("trope", trope, MAX_TEXT_LEN)?;
        }
        validation::count(self.count)?;
        Ok(())
    }
}

impl NewStory {
    /// Reject values that would corrupt the generated header
    pub fn validate(&self) -> Result<()> {
        validation::required_text("title", &self.title, MAX_TEXT_LEN)?;
        validation::required_text("genre", &self.genre, MAX_TEXT_LEN)?;
        validation::optional_text("origin", self.origin.as_deref(), MAX_TEXT_LEN)?;
        Ok(())
    }
}

/// Where a note ended up
#[derive(Debug, Clone)]
pub struct NoteOutcome {
    pub path: PathBuf,
    /// Heading the note was filed under, without the `## ` prefix
    pub section: String,
    /// True when the requested section was missing and the note went to
    /// the development notes instead
    pub fell_back: bool,
}

/// Result of relocating a batch
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub id: String,
    pub from: Collection,
    pub to: Collection,
    pub path: PathBuf,
}

impl Workspace {
    /// First free `YYYYMMDD-NNN` id for `date` across the batch collections
    pub fn next_batch_id(&self, date: NaiveDate) -> Result<String> {
        let prefix = date.format(BATCH_ID_DATE_FORMAT).to_string();
        for n in 1..=MAX_BATCHES_PER_DAY {
            let id = format!("{}-{:03}", prefix, n);
            let file_name = format!("{}.{}", id, RECORD_EXTENSION);
            let taken = Collection::BATCHES
                .iter()
                .any(|c| self.collection_dir(*c).join(&file_name).exists());
            if !taken {
                return Ok(id);
            }
        }

        Err(FactoryError::Other(format!(
            "no free batch id left for {} (limit {})",
            prefix, MAX_BATCHES_PER_DAY
        )))
    }

    /// Create a concept batch in `concepts/generated` from the batch template
    #[tracing::instrument(skip(self, batch), fields(genre = %batch.genre))]
    pub fn create_batch(&self, batch: &NewBatch, today: NaiveDate) -> Result<Record> {
        batch.validate()?;
        let id = self.next_batch_id(today)?;
        let date = today.format(DATE_FORMAT).to_string();
        let tropes = format!("[{}]", batch.tropes.join(", "));
        let count = format!("count: {}", batch.count);
        let model = format!("\"{}\"", batch.model);

        let template = Template::load(self.root(), RecordKind::Batch)?;
        let content = template.instantiate(&[
            (batch_placeholders::ID, id.as_str()),
            (batch_placeholders::ID, id.as_str()),
            (batch_placeholders::DATE, date.as_str()),
            (batch_placeholders::GENRE, batch.genre.as_str()),
            (batch_placeholders::TROPES, tropes.as_str()),
            (batch_placeholders::COUNT, count.as_str()),
            (batch_placeholders::MODEL, model.as_str()),
        ]);

        let path = self
            .collection_dir(Collection::Generated)
            .join(format!("{}.{}", id, RECORD_EXTENSION));
        write_new(&path, &content)?;
        tracing::info!(id = %id, path = %path.display(), "batch created");

        Ok(Record::parse(RecordKind::Batch, &content, Some(path)))
    }

    /// Story file for `slug`: `<slug>.md`, else `<slug>-<YYYYMMDD>.md`
    pub fn unique_story_path(&self, slug: &str, today: NaiveDate) -> Result<PathBuf> {
        let dir = self.stories_dir();
        let plain = dir.join(format!("{}.{}", slug, RECORD_EXTENSION));
        if !plain.exists() {
            return Ok(plain);
        }

        let dated = dir.join(format!(
            "{}-{}.{}",
            slug,
            today.format(BATCH_ID_DATE_FORMAT),
            RECORD_EXTENSION
        ));
        if !dated.exists() {
            return Ok(dated);
        }

        Err(FactoryError::already_exists("story file", dated.display()))
    }

    /// Create a story-development document from the story template
    #[tracing::instrument(skip(self, story, now), fields(title = %story.title))]
    pub fn create_story(&self, story: &NewStory, now: NaiveDateTime) -> Result<Record> {
        story.validate()?;
        let template = Template::load(self.root(), RecordKind::Story)?;
        let origin = story.origin.as_deref().unwrap_or("none");
        self.write_story(&template, &story.title, &story.genre, origin, &[], now)
    }

    /// Instantiate the story template and write it under `stories/`.
    ///
    /// `extra` substitutions are applied after the standard ones.
    pub(crate) fn write_story(
        &self,
        template: &Template,
        title: &str,
        genre: &str,
        origin: &str,
        extra: &[(&str, &str)],
        now: NaiveDateTime,
    ) -> Result<Record> {
        let today = now.date();
        let slug = slugify(title);
        let path = self.unique_story_path(&slug, today)?;
        let story_id = format!("{}-{}", slug, now.and_utc().timestamp());
        let date = today.format(DATE_FORMAT).to_string();

        let mut substitutions = vec![
            (story_placeholders::ID, story_id.as_str()),
            (story_placeholders::WORKING_TITLE, title),
            (story_placeholders::STORY_TITLE, title),
            (story_placeholders::GENRE, genre),
            (story_placeholders::ORIGIN, origin),
            (story_placeholders::DATE, date.as_str()),
            (story_placeholders::DATE, date.as_str()),
        ];
        substitutions.extend_from_slice(extra);

        let content = template.instantiate(&substitutions);
        write_new(&path, &content)?;
        tracing::info!(id = %story_id, path = %path.display(), "story created");

        Ok(Record::parse(RecordKind::Story, &content, Some(path)))
    }

    /// Append a timestamped note to a story.
    ///
    /// With `section`, the note goes to the end of the matching `## <section>`
    /// (case-insensitive); a missing section falls back to the development
    /// notes, which are created at the end of the file when absent. The
    /// header's `date_updated` is set to the note's date.
    #[tracing::instrument(skip(self, text, now))]
    pub fn add_note(
        &self,
        story: &str,
        text: &str,
        section: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<NoteOutcome> {
        let record = self.find_story(story)?;
        let path = record
            .path
            .clone()
            .ok_or_else(|| FactoryError::Other("story has no file path".to_string()))?;
        let content = fs::read_to_string(&path).map_err(|e| read_error(&path, e))?;

        let entry = format!("\n### [{}]\n{}\n", now.format(NOTE_TIMESTAMP_FORMAT), text);

        let mut fell_back = false;
        let targeted = match section {
            Some(name) => {
                let inserted = insert_at_section_end(&content, name, &entry)?;
                if inserted.is_none() {
                    tracing::warn!(section = name, "section not found, using development notes");
                    fell_back = true;
                }
                inserted.map(|c| (c, name.trim().to_string()))
            }
            None => None,
        };

        let (mut updated, filed_under) = match targeted {
            Some(found) => found,
            None => (
                insert_after_dev_notes_heading(&content, &entry),
                DEV_NOTES_HEADING.trim_start_matches("## ").to_string(),
            ),
        };

        let date = now.date().format(DATE_FORMAT).to_string();
        if let Some(with_date) = parse::set_header_value(&updated, "date_updated", &date) {
            updated = with_date;
        }

        overwrite(&path, &updated)?;
        Ok(NoteOutcome {
            path,
            section: filed_under,
            fell_back,
        })
    }

    /// Move a batch file into another batch collection; the id is unchanged
    #[tracing::instrument(skip(self))]
    pub fn move_batch(&self, id: &str, to: Collection) -> Result<MoveOutcome> {
        if !to.is_batch() {
            crate::bail_invalid!("destination (expected generated, developing or favorites)", to);
        }

        let scanned = self.find_batch(id)?;
        let from = scanned.collection;
        let source = scanned
            .path()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| FactoryError::Other("batch has no file path".to_string()))?;

        if from == to {
            return Err(FactoryError::UsageError(format!(
                "batch '{}' is already in {}",
                id, to
            )));
        }

        let file_name = source
            .file_name()
            .ok_or_else(|| FactoryError::Other("batch has no file name".to_string()))?;
        let target_dir = self.collection_dir(to);
        let target = target_dir.join(file_name);
        if target.exists() {
            return Err(FactoryError::already_exists("batch file", target.display()));
        }

        fs::create_dir_all(&target_dir).map_err(|e| write_error(&target_dir, e))?;
        fs::rename(&source, &target)
            .map_err(|e| FactoryError::io_operation("move", source.display(), e))?;
        tracing::info!(id, %from, %to, "batch moved");

        Ok(MoveOutcome {
            id: scanned.record.id().to_string(),
            from,
            to,
            path: target,
        })
    }
}

/// Insert `entry` directly below the development-notes heading, adding the
/// section at the end of the document when it is missing
pub(crate) fn insert_after_dev_notes_heading(content: &str, entry: &str) -> String {
    match content.find(DEV_NOTES_HEADING) {
        Some(at) => {
            let split = at + DEV_NOTES_HEADING.len();
            format!("{}{}{}", &content[..split], entry, &content[split..])
        }
        None => format!("{}\n\n{}{}", content, DEV_NOTES_HEADING, entry),
    }
}

/// Insert `entry` at the end of the `## <section>` block, before the next
/// level-2 heading. `None` when the section does not exist.
fn insert_at_section_end(content: &str, section: &str, entry: &str) -> Result<Option<String>> {
    let pattern = format!(r"(?mi)^##[ \t]+{}[ \t]*\r?$", regex::escape(section.trim()));
    let heading = Regex::new(&pattern)
        .map_err(|e| FactoryError::Other(format!("invalid section pattern: {}", e)))?;

    let Some(found) = heading.find(content) else {
        return Ok(None);
    };

    let rest = &content[found.end()..];
    let insert_at = match rest.find("\n## ") {
        Some(offset) => found.end() + offset,
        None => content.trim_end_matches('\n').len(),
    };

    Ok(Some(format!(
        "{}{}{}",
        &content[..insert_at],
        entry,
        &content[insert_at..]
    )))
}
