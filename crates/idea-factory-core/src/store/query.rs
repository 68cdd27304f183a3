//! Record lookup by identifier

use crate::error::{FactoryError, Result};
use crate::record::{Record, RecordKind};
use crate::scan::{Collection, ScannedRecord};

use super::io::read_record;
use super::paths::RECORD_EXTENSION;
use super::Workspace;

impl Workspace {
    /// Find a batch by identifier across the batch collections.
    ///
    /// Matches the header id first, then the file stem.
    #[tracing::instrument(skip(self))]
    pub fn find_batch(&self, id: &str) -> Result<ScannedRecord> {
        let mut by_stem = None;
        for scanned in self.scanner().scan(&Collection::BATCHES) {
            let scanned = scanned?;
            if scanned.record.frontmatter.id.as_deref() == Some(id) {
                return Ok(scanned);
            }
            let stem_matches = scanned
                .path()
                .and_then(|p| p.file_stem())
                .is_some_and(|stem| stem == id);
            if stem_matches && by_stem.is_none() {
                by_stem = Some(scanned);
            }
        }

        by_stem.ok_or_else(|| FactoryError::BatchNotFound { id: id.to_string() })
    }

    /// Find a story by file name (with or without `.md`) or story id
    #[tracing::instrument(skip(self))]
    pub fn find_story(&self, name: &str) -> Result<Record> {
        let dir = self.stories_dir();
        let file_name = if name.ends_with(&format!(".{}", RECORD_EXTENSION)) {
            name.to_string()
        } else {
            format!("{}.{}", name, RECORD_EXTENSION)
        };

        let direct = dir.join(&file_name);
        if !name.contains(&['/', '\\'][..]) && direct.is_file() {
            return read_record(&direct, RecordKind::Story);
        }

        for scanned in self.scanner().scan(&Collection::STORIES) {
            let scanned = scanned?;
            if scanned.record.frontmatter.id.as_deref() == Some(name) {
                return Ok(scanned.record);
            }
        }

        Err(FactoryError::StoryNotFound {
            name: name.to_string(),
        })
    }

    /// Every batch, in scan order
    pub fn batches(&self) -> Result<Vec<ScannedRecord>> {
        self.scanner().collect(&Collection::BATCHES)
    }

    /// Every story, in scan order
    pub fn stories(&self) -> Result<Vec<ScannedRecord>> {
        self.scanner().collect(&Collection::STORIES)
    }
}
