//! Record filtering utilities

use crate::record::{Record, Status};
use crate::text::contains_ignore_case;

/// Metadata filters applied before any text matching.
///
/// All configured filters must match (AND semantics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    /// Case-insensitive substring of the genre
    pub genre: Option<String>,
    /// Case-insensitive substring of any tag
    pub tag: Option<String>,
    /// Exact status
    pub status: Option<Status>,
}

impl RecordFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the genre filter
    pub fn with_genre(mut self, genre: Option<String>) -> Self {
        self.genre = genre;
        self
    }

    /// Set the tag filter
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// Set the status filter
    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.tag.is_none() && self.status.is_none()
    }

    /// Check if a record matches all configured filters
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_genre(record) && self.matches_tag(record) && self.matches_status(record)
    }

    fn matches_genre(&self, record: &Record) -> bool {
        match &self.genre {
            Some(genre) => contains_ignore_case(record.genre(), genre),
            None => true,
        }
    }

    fn matches_tag(&self, record: &Record) -> bool {
        match &self.tag {
            Some(tag) => record.tags().iter().any(|t| contains_ignore_case(t, tag)),
            None => true,
        }
    }

    fn matches_status(&self, record: &Record) -> bool {
        match self.status {
            Some(status) => record.status() == Some(status),
            None => true,
        }
    }
}
