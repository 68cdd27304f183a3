//! Record templates and placeholder substitution
//!
//! Templates are plain markdown files under `templates/`. Placeholders are
//! literal strings such as `[genre]` or `YYYY-MM-DD`; there is no escaping
//! or templating syntax beyond exact substring replacement.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{read_error, Result};
use crate::record::RecordKind;
use crate::store::paths::{BATCH_TEMPLATE_FILE, STORY_TEMPLATE_FILE, TEMPLATES_DIR};

/// Placeholders understood by the built-in batch template
pub mod batch_placeholders {
    pub const ID: &str = "YYYYMMDD-001";
    pub const DATE: &str = "YYYY-MM-DD";
    pub const GENRE: &str = "[genre]";
    pub const TROPES: &str = "[trope1, trope2, trope3]";
    pub const COUNT: &str = "count: 10";
    pub const MODEL: &str = "\"model used\"";
}

/// Placeholders understood by the built-in story template
pub mod story_placeholders {
    pub const ID: &str = "[unique-id]";
    pub const WORKING_TITLE: &str = "[Working Title]";
    pub const STORY_TITLE: &str = "[Story Title]";
    pub const GENRE: &str = "[genre]";
    pub const TROPES: &str = "tropes: []";
    pub const ORIGIN: &str = "[batch_id if from generated concepts]";
    pub const DATE: &str = "YYYY-MM-DD";
    pub const HIGH_CONCEPT: &str = "[One-line pitch that captures the essence]";
    pub const SYNOPSIS: &str = "[2-3 sentence compelling description]";
}

const DEFAULT_BATCH_TEMPLATE: &str = r#"---
batch_id: YYYYMMDD-001
date_generated: YYYY-MM-DD
genre: [genre]
tropes: [trope1, trope2, trope3]
count: 10
status: generated
llm_model: "model used"
---

# Concept Batch YYYYMMDD-001

## Concept 1: [Title]
**High Concept**: [One-line pitch]

**Synopsis**: [2-3 sentence description]

**Key Elements**:
- [Element]

**Initial Thoughts**: [Your reaction]

---
"#;

const DEFAULT_STORY_TEMPLATE: &str = r#"---
story_id: [unique-id]
title: "[Working Title]"
genre: [genre]
tropes: []
status: developing
origin_batch: [batch_id if from generated concepts]
date_created: YYYY-MM-DD
date_updated: YYYY-MM-DD
---

# [Story Title]

## Core Concept

### High Concept
[One-line pitch that captures the essence]

### Logline
[2-3 sentence compelling description]

## Characters

### Protagonist

### Antagonist

## Plot Outline

### Act I

### Act II

### Act III

## Worldbuilding

## Themes

## Development Notes

## Research
"#;

/// A template document ready for instantiation
#[derive(Debug, Clone)]
pub struct Template {
    kind: RecordKind,
    text: String,
    /// File the template was read from, `None` for the built-in default
    source: Option<PathBuf>,
}

impl Template {
    /// Load the workspace template for `kind`, falling back to the built-in one
    pub fn load(root: &Path, kind: RecordKind) -> Result<Self> {
        let path = root.join(TEMPLATES_DIR).join(file_name(kind));
        if !path.is_file() {
            tracing::debug!(%kind, "using built-in template");
            return Ok(Self::builtin(kind));
        }

        let text = fs::read_to_string(&path).map_err(|e| read_error(&path, e))?;
        Ok(Template {
            kind,
            text,
            source: Some(path),
        })
    }

    pub fn builtin(kind: RecordKind) -> Self {
        let text = match kind {
            RecordKind::Batch => DEFAULT_BATCH_TEMPLATE,
            RecordKind::Story => DEFAULT_STORY_TEMPLATE,
        };
        Template {
            kind,
            text: text.to_string(),
            source: None,
        }
    }

    /// A template built from text already in memory
    pub(crate) fn from_text(kind: RecordKind, text: String) -> Self {
        Template {
            kind,
            text,
            source: None,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Substitute placeholders into a copy of the template.
    ///
    /// Each `(placeholder, value)` pair replaces the first remaining
    /// occurrence only; list a placeholder twice to fill two occurrences.
    /// Placeholders absent from the text are skipped.
    pub fn instantiate(&self, substitutions: &[(&str, &str)]) -> String {
        let mut out = self.text.clone();
        for &(placeholder, value) in substitutions {
            match out.find(placeholder) {
                Some(at) => out.replace_range(at..at + placeholder.len(), value),
                None => {
                    tracing::trace!(placeholder, "placeholder not in template");
                }
            }
        }
        out
    }
}

fn file_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Batch => BATCH_TEMPLATE_FILE,
        RecordKind::Story => STORY_TEMPLATE_FILE,
    }
}
