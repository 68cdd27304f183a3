//! Record data structures
//!
//! Records are markdown files with a `---` delimited header followed by a
//! free-form body. Batches hold several generated concepts; stories track
//! one concept's development.

pub mod concept;
pub mod frontmatter;
pub(crate) mod parse;
pub mod types;

use std::borrow::Cow;
use std::path::PathBuf;

pub use concept::{extract_concepts, Concept, ConceptDetails};
pub use frontmatter::{Frontmatter, HeaderIssue, DATE_FORMAT};
pub use types::{RecordKind, Status};

/// A complete record (header + body)
#[derive(Debug, Clone)]
pub struct Record {
    /// Batch or story
    pub kind: RecordKind,
    /// Structured header fields
    pub frontmatter: Frontmatter,
    /// Markdown content after the header
    pub body: String,
    /// Path to the record file (if loaded from disk)
    pub path: Option<PathBuf>,
    /// Header lines that were ignored while parsing
    pub issues: Vec<HeaderIssue>,
    /// Text exactly as read, used for full-text matching
    source: Option<String>,
}

impl Record {
    /// Create a new in-memory record
    pub fn new(kind: RecordKind, frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Record {
            kind,
            frontmatter,
            body: body.into(),
            path: None,
            issues: Vec::new(),
            source: None,
        }
    }

    /// Parse a record from markdown content.
    ///
    /// Never fails: a missing header yields empty fields and one issue,
    /// unusable header lines are collected in [`Record::issues`].
    #[tracing::instrument(level = "debug", skip(content))]
    pub fn parse(kind: RecordKind, content: &str, path: Option<PathBuf>) -> Self {
        let (frontmatter, body, issues) = match parse::split_header(content) {
            Some((header, body)) => {
                let (frontmatter, issues) = frontmatter::parse_header(header, 2);
                (frontmatter, body.to_string(), issues)
            }
            None => {
                let issue = HeaderIssue {
                    line: 1,
                    text: content.lines().next().unwrap_or_default().trim().to_string(),
                    reason: "missing frontmatter block (---)".to_string(),
                };
                (Frontmatter::default(), content.to_string(), vec![issue])
            }
        };

        for issue in &issues {
            tracing::debug!(line = issue.line, reason = %issue.reason, "ignored_header_line");
        }

        Record {
            kind,
            frontmatter,
            body,
            path,
            issues,
            source: Some(content.to_string()),
        }
    }

    /// Serialize the record to markdown
    pub fn to_markdown(&self) -> String {
        format!(
            "---\n{}---\n\n{}",
            self.frontmatter.render(self.kind),
            self.body
        )
    }

    /// Identifier from the header, falling back to the file stem
    pub fn id(&self) -> &str {
        if let Some(id) = &self.frontmatter.id {
            return id;
        }
        self.path
            .as_ref()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Title from the header, falling back to the identifier
    pub fn title(&self) -> &str {
        self.frontmatter.title.as_deref().unwrap_or_else(|| self.id())
    }

    pub fn genre(&self) -> &str {
        &self.frontmatter.genre
    }

    pub fn tags(&self) -> &[String] {
        &self.frontmatter.tags
    }

    pub fn status(&self) -> Option<Status> {
        self.frontmatter.status
    }

    /// Declared concept count, zero when absent or unparseable
    pub fn count_or_zero(&self) -> u32 {
        self.frontmatter.count.unwrap_or(0)
    }

    /// Date formatted for display, `N/A` when absent
    pub fn date_display(&self) -> String {
        self.frontmatter
            .date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Full record text (header + body)
    pub fn text(&self) -> Cow<'_, str> {
        match &self.source {
            Some(source) => Cow::Borrowed(source),
            None => Cow::Owned(self.to_markdown()),
        }
    }

    /// Concept blocks in the body, in order
    pub fn concepts(&self) -> Vec<Concept> {
        extract_concepts(&self.body)
    }

    /// The body section whose `##` or `###` heading starts with `name`
    /// (case-insensitive), up to the next `#` or `##` heading
    pub fn section(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        let mut lines = Vec::new();
        let mut inside = false;
        for line in self.body.lines() {
            if inside {
                if line.starts_with("## ") || line.starts_with("# ") {
                    break;
                }
                lines.push(line);
                continue;
            }
            let lower = line.to_lowercase();
            let title = lower
                .strip_prefix("## ")
                .or_else(|| lower.strip_prefix("### "));
            if title.is_some_and(|t| t.trim_start().starts_with(&wanted)) {
                inside = true;
                lines.push(line);
            }
        }

        inside.then(|| lines.join("\n"))
    }

    /// Get the path as a display string (if available)
    pub fn path_display(&self) -> Option<String> {
        self.path.as_ref().map(|p| p.display().to_string())
    }
}
