//! Tolerant frontmatter extraction
//!
//! Headers are read line by line as `key: value` pairs rather than through a
//! YAML parser: hand-edited records routinely contain lines a strict parser
//! rejects (`genre: [genre]`, unquoted colons in prompts). Each line that
//! cannot be used is reported as a [`HeaderIssue`] and parsing carries on.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::{RecordKind, Status};

/// Date format used in headers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A header line that was skipped or whose value could not be used
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderIssue {
    /// 1-based line number within the file
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
    /// Why the line was ignored
    pub reason: String,
}

/// Structured header fields of a record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Identifier (`batch_id` / `story_id` / `id`)
    pub id: Option<String>,
    /// Working title (stories)
    pub title: Option<String>,
    /// Genre, empty when absent; list elements are joined with `, `
    pub genre: String,
    /// Whether `genre` was written as a bracketed list
    pub genre_is_list: bool,
    /// Tropes, in header order
    pub tags: Vec<String>,
    /// Lifecycle status
    pub status: Option<Status>,
    /// Creation date (`date_generated` / `date_created` / `date`)
    pub date: Option<NaiveDate>,
    /// Number of concepts in a batch
    pub count: Option<u32>,
    /// Originating batch of a story
    pub origin: Option<String>,
    /// Every other key, in header order, value kept verbatim
    pub extra: Vec<(String, String)>,
}

impl Frontmatter {
    /// Look up an unstructured header value by key
    pub fn extra_value(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an unstructured header value, replacing an existing key in place
    pub fn set_extra(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.extra.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.extra.push((key.to_string(), value)),
        }
    }

    /// Individual genres: each list element, or the whole scalar
    pub fn genres(&self) -> Vec<&str> {
        if self.genre_is_list {
            self.genre.split(", ").collect()
        } else if self.genre.is_empty() {
            Vec::new()
        } else {
            vec![self.genre.as_str()]
        }
    }

    /// Format tags as comma-separated values, using "-" for empty tags
    pub fn format_tags(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    /// Render the header lines (without delimiters) for a record of `kind`
    pub fn render(&self, kind: RecordKind) -> String {
        let mut out = String::new();

        if let Some(id) = &self.id {
            push_line(&mut out, kind.id_key(), &render_scalar(id));
        }
        if let Some(title) = &self.title {
            push_line(&mut out, "title", &render_scalar(title));
        }
        if self.genre_is_list {
            push_line(&mut out, "genre", &format!("[{}]", self.genre));
        } else if !self.genre.is_empty() {
            push_line(&mut out, "genre", &render_scalar(&self.genre));
        }
        if !self.tags.is_empty() {
            push_line(&mut out, "tropes", &format!("[{}]", self.tags.join(", ")));
        }
        if let Some(count) = self.count {
            push_line(&mut out, "count", &count.to_string());
        }
        if let Some(status) = self.status {
            push_line(&mut out, "status", status.as_str());
        }
        if let Some(origin) = &self.origin {
            push_line(&mut out, "origin_batch", &render_scalar(origin));
        }
        if let Some(date) = self.date {
            push_line(&mut out, kind.date_key(), &date.format(DATE_FORMAT).to_string());
        }
        for (key, value) in &self.extra {
            push_line(&mut out, key, value);
        }

        out
    }
}

fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

fn render_scalar(value: &str) -> String {
    let needs_quotes = value.starts_with(&['[', '"', '\''][..])
        || value.trim() != value
        || value.is_empty();
    if needs_quotes {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Strip one layer of matching surrounding quotes
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' || first == b'\'') && first == last {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a `[a, b]` list, or `None` when the value is not bracketed
fn parse_list(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    Some(split_items(inner))
}

fn split_items(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| unquote(item.trim()).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Extract structured fields from the header text.
///
/// `first_line` is the file line number of the first header line, used to
/// report issues against the file rather than the header block.
pub(crate) fn parse_header(header: &str, first_line: usize) -> (Frontmatter, Vec<HeaderIssue>) {
    let mut fm = Frontmatter::default();
    let mut issues = Vec::new();

    // A key with an empty value may be followed by a `- item` block list.
    let mut pending: Option<(String, usize, Vec<String>)> = None;

    for (idx, raw_line) in header.lines().enumerate() {
        let line_no = first_line + idx;
        let line = raw_line.trim_end();
        let trimmed = line.trim();

        if let Some((_, _, items)) = pending.as_mut() {
            if let Some(item) = trimmed.strip_prefix("- ") {
                items.push(unquote(item.trim()).to_string());
                continue;
            }
            if trimmed == "-" {
                continue;
            }
        }
        if let Some((key, key_line, items)) = pending.take() {
            apply_block(&mut fm, &mut issues, &key, key_line, items);
        }

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            issues.push(issue(line_no, trimmed, "expected `key: value`"));
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || key.contains(char::is_whitespace) {
            issues.push(issue(line_no, trimmed, "invalid key"));
            continue;
        }

        if value.is_empty() {
            pending = Some((key.to_string(), line_no, Vec::new()));
            continue;
        }

        apply_field(&mut fm, &mut issues, key, value, line_no, trimmed);
    }

    if let Some((key, key_line, items)) = pending.take() {
        apply_block(&mut fm, &mut issues, &key, key_line, items);
    }

    (fm, issues)
}

fn issue(line: usize, text: &str, reason: impl Into<String>) -> HeaderIssue {
    HeaderIssue {
        line,
        text: text.to_string(),
        reason: reason.into(),
    }
}

/// Apply a key whose value was given as an indented `- item` list
fn apply_block(
    fm: &mut Frontmatter,
    issues: &mut Vec<HeaderIssue>,
    key: &str,
    line_no: usize,
    items: Vec<String>,
) {
    if items.is_empty() {
        // `key:` with nothing after it is an explicit empty value.
        if !is_structured_key(key) {
            fm.extra.push((key.to_string(), String::new()));
        }
        return;
    }
    let value = format!("[{}]", items.join(", "));
    let text = format!("{}: {}", key, value);
    apply_field(fm, issues, key, &value, line_no, &text);
}

fn is_structured_key(key: &str) -> bool {
    matches!(
        key,
        "batch_id"
            | "story_id"
            | "id"
            | "title"
            | "genre"
            | "tropes"
            | "tags"
            | "status"
            | "date_generated"
            | "date_created"
            | "date"
            | "count"
            | "origin_batch"
    )
}

fn apply_field(
    fm: &mut Frontmatter,
    issues: &mut Vec<HeaderIssue>,
    key: &str,
    value: &str,
    line_no: usize,
    text: &str,
) {
    match key {
        "batch_id" | "story_id" | "id" => {
            let id = unquote(value).trim();
            if !id.is_empty() {
                fm.id = Some(id.to_string());
            }
        }
        "title" => fm.title = Some(unquote(value).to_string()),
        "genre" => {
            match parse_list(value) {
                Some(items) => {
                    fm.genre = items.join(", ");
                    fm.genre_is_list = !items.is_empty();
                }
                None => {
                    fm.genre = unquote(value).to_string();
                    fm.genre_is_list = false;
                }
            }
        }
        "tropes" | "tags" => {
            fm.tags = parse_list(value).unwrap_or_else(|| split_items(unquote(value)));
        }
        "status" => match unquote(value).parse::<Status>() {
            Ok(status) => fm.status = Some(status),
            Err(_) => issues.push(issue(line_no, text, format!("unknown status '{}'", value))),
        },
        "date_generated" | "date_created" | "date" => {
            match NaiveDate::parse_from_str(unquote(value), DATE_FORMAT) {
                Ok(date) => fm.date = Some(date),
                Err(e) => issues.push(issue(line_no, text, format!("invalid date: {}", e))),
            }
        }
        "count" => match unquote(value).parse::<u32>() {
            Ok(count) => fm.count = Some(count),
            Err(e) => issues.push(issue(line_no, text, format!("invalid count: {}", e))),
        },
        "origin_batch" => {
            let origin = unquote(value).trim();
            if !origin.is_empty() && !origin.eq_ignore_ascii_case("none") {
                fm.origin = Some(origin.to_string());
            }
        }
        _ => fm.extra.push((key.to_string(), value.to_string())),
    }
}
