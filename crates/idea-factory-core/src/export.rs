//! Metadata export in JSON, YAML or CSV
//!
//! Exports carry header fields only; record bodies and concept blocks are
//! left out. CSV has one table per export: batch columns, story columns,
//! or a combined table with a `type` column when both are exported.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{FactoryError, Result};
use crate::record::{RecordKind, Status};
use crate::scan::{Collection, ScannedRecord};
use crate::store::Workspace;

/// Which records to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportType {
    Batches,
    Stories,
    #[default]
    All,
}

impl ExportType {
    fn includes(self, kind: RecordKind) -> bool {
        matches!(
            (self, kind),
            (ExportType::All, _)
                | (ExportType::Batches, RecordKind::Batch)
                | (ExportType::Stories, RecordKind::Story)
        )
    }
}

impl FromStr for ExportType {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "batches" => Ok(ExportType::Batches),
            "stories" => Ok(ExportType::Stories),
            "all" => Ok(ExportType::All),
            other => Err(FactoryError::invalid_value(
                "export type (expected batches, stories or all)",
                other,
            )),
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExportType::Batches => "batches",
            ExportType::Stories => "stories",
            ExportType::All => "all",
        };
        f.write_str(s)
    }
}

/// Serialization format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(FactoryError::invalid_value(
                "export format (expected json, yaml or csv)",
                other,
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Yaml => f.write_str("yaml"),
            ExportFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Header fields of one record
#[derive(Debug, Clone, Serialize)]
pub struct ExportedRecord {
    pub id: String,
    pub collection: Collection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub genre: String,
    pub tropes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Export {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batches: Option<Vec<ExportedRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<ExportedRecord>>,
}

impl Export {
    /// Gather the records selected by `export_type`
    #[tracing::instrument(skip(workspace))]
    pub fn gather(workspace: &Workspace, export_type: ExportType) -> Result<Self> {
        let mut export = Export::default();
        if export_type.includes(RecordKind::Batch) {
            export.batches = Some(exported(workspace, workspace.batches()?));
        }
        if export_type.includes(RecordKind::Story) {
            export.stories = Some(exported(workspace, workspace.stories()?));
        }
        Ok(export)
    }

    /// Number of exported records
    pub fn len(&self) -> usize {
        self.batches.as_ref().map_or(0, Vec::len) + self.stories.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
            ExportFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            ExportFormat::Csv => self.render_csv(),
        }
    }

    fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        match (&self.batches, &self.stories) {
            (Some(batches), Some(stories)) => {
                writer.write_record(COMBINED_COLUMNS)?;
                for record in batches.iter().chain(stories) {
                    writer.write_record(record.combined_row())?;
                }
            }
            (Some(batches), None) => {
                writer.write_record(BATCH_COLUMNS)?;
                for record in batches {
                    writer.write_record(record.batch_row())?;
                }
            }
            (None, Some(stories)) => {
                writer.write_record(STORY_COLUMNS)?;
                for record in stories {
                    writer.write_record(record.story_row())?;
                }
            }
            (None, None) => {}
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| FactoryError::io_operation("flush", "csv export", e.error()))?;
        String::from_utf8(bytes).map_err(|e| FactoryError::Other(e.to_string()))
    }
}

const BATCH_COLUMNS: [&str; 8] = [
    "batch_id",
    "date_generated",
    "genre",
    "tropes",
    "count",
    "status",
    "location",
    "llm_model",
];

const STORY_COLUMNS: [&str; 8] = [
    "story_id",
    "title",
    "genre",
    "subgenre",
    "tropes",
    "status",
    "date_created",
    "target_length",
];

const COMBINED_COLUMNS: [&str; 7] = [
    "type",
    "id",
    "title",
    "genre",
    "date",
    "status",
    "count_or_length",
];

impl ExportedRecord {
    fn extra_field(&self, key: &str) -> String {
        self.extra
            .get(key)
            .map(|v| unquote(v).to_string())
            .unwrap_or_default()
    }

    fn date_field(&self) -> String {
        self.date.map(|d| d.to_string()).unwrap_or_default()
    }

    fn status_field(&self) -> String {
        self.status.map(|s| s.as_str().to_string()).unwrap_or_default()
    }

    fn count_field(&self) -> String {
        self.count.map(|c| c.to_string()).unwrap_or_default()
    }

    fn batch_row(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.date_field(),
            self.genre.clone(),
            self.tropes.join(", "),
            self.count_field(),
            self.status_field(),
            self.collection.label().to_string(),
            self.extra_field("llm_model"),
        ]
    }

    fn story_row(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.title.clone().unwrap_or_default(),
            self.genre.clone(),
            self.extra_field("subgenre"),
            self.tropes.join(", "),
            self.status_field(),
            self.date_field(),
            self.extra_field("target_length"),
        ]
    }

    fn combined_row(&self) -> [String; 7] {
        let (kind, title, size) = if self.collection.is_batch() {
            ("batch", format!("Batch {}", self.id), self.count_field())
        } else {
            (
                "story",
                self.title.clone().unwrap_or_default(),
                self.extra_field("target_length"),
            )
        };
        [
            kind.to_string(),
            self.id.clone(),
            title,
            self.genre.clone(),
            self.date_field(),
            self.status_field(),
            size,
        ]
    }
}

/// Header values keep their quotes; CSV cells should not
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn exported(workspace: &Workspace, records: Vec<ScannedRecord>) -> Vec<ExportedRecord> {
    records
        .into_iter()
        .map(|scanned| {
            let path = scanned
                .path()
                .map(|p| workspace.relative(p))
                .unwrap_or_default();
            let record = scanned.record;
            let id = record.id().to_string();
            let fm = record.frontmatter;
            ExportedRecord {
                id,
                collection: scanned.collection,
                title: fm.title,
                genre: fm.genre,
                tropes: fm.tags,
                status: fm.status,
                date: fm.date,
                count: fm.count,
                origin: fm.origin,
                extra: fm.extra.into_iter().collect(),
                path,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "concepts/generated/20250101-001.md",
            "---\nbatch_id: 20250101-001\ngenre: Fantasy\ntropes: [quest]\ncount: 5\nllm_model: \"Local 7B\"\ndate_generated: 2025-01-01\n---\n\n## Concept 1: Secret\nhidden body text\n",
        );
        write(
            dir.path(),
            "stories/tale.md",
            "---\nstory_id: tale-1\ntitle: Tale\nstatus: developing\n---\n\nStory body\n",
        );
        dir
    }

    #[test]
    fn test_json_export_omits_bodies() {
        let dir = fixture();
        let ws = Workspace::open(dir.path()).unwrap();
        let export = Export::gather(&ws, ExportType::All).unwrap();
        assert_eq!(export.len(), 2);

        let json = export.render(ExportFormat::Json).unwrap();
        assert!(!json.contains("hidden body text"));
        assert!(!json.contains("Story body"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let batch = &value["batches"][0];
        assert_eq!(batch["id"], "20250101-001");
        assert_eq!(batch["collection"], "generated");
        assert_eq!(batch["count"], 5);
        assert_eq!(batch["date"], "2025-01-01");
        assert_eq!(batch["extra"]["llm_model"], "\"Local 7B\"");
        assert_eq!(batch["path"], "concepts/generated/20250101-001.md");
        assert_eq!(value["stories"][0]["status"], "developing");
    }

    #[test]
    fn test_type_selects_sections() {
        let dir = fixture();
        let ws = Workspace::open(dir.path()).unwrap();
        let export = Export::gather(&ws, ExportType::Stories).unwrap();
        assert!(export.batches.is_none());
        let json = export.render(ExportFormat::Json).unwrap();
        assert!(!json.contains("\"batches\""));
        assert!(json.contains("tale-1"));
    }

    #[test]
    fn test_yaml_export() {
        let dir = fixture();
        let ws = Workspace::open(dir.path()).unwrap();
        let yaml = Export::gather(&ws, ExportType::Batches)
            .unwrap()
            .render(ExportFormat::Yaml)
            .unwrap();
        assert!(yaml.contains("batches:"));
        assert!(yaml.contains("20250101-001"));
        assert!(!yaml.contains("stories:"));
    }

    #[test]
    fn test_parse_type_and_format() {
        assert_eq!("Stories".parse::<ExportType>().unwrap(), ExportType::Stories);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_batches_use_batch_columns() {
        let dir = fixture();
        let ws = Workspace::open(dir.path()).unwrap();
        let csv = Export::gather(&ws, ExportType::Batches)
            .unwrap()
            .render(ExportFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "batch_id,date_generated,genre,tropes,count,status,location,llm_model"
        );
        assert_eq!(lines[1], "20250101-001,2025-01-01,Fantasy,quest,5,,generated,Local 7B");
        assert_eq!(lines.len(), 2);
        assert!(!csv.contains("hidden body text"));
    }

    #[test]
    fn test_csv_all_uses_combined_columns() {
        let dir = fixture();
        let ws = Workspace::open(dir.path()).unwrap();
        let csv = Export::gather(&ws, ExportType::All)
            .unwrap()
            .render(ExportFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "type,id,title,genre,date,status,count_or_length");
        assert_eq!(lines[1], "batch,20250101-001,Batch 20250101-001,Fantasy,2025-01-01,,5");
        assert_eq!(lines[2], "story,tale-1,Tale,,,developing,");
    }

    #[test]
    fn test_csv_quotes_joined_tropes() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "stories/heist.md",
            "---\nstory_id: heist-1\ntitle: The Heist\ngenre: Thriller\ntropes: [heist, betrayal]\nsubgenre: Caper\n---\n",
        );
        let ws = Workspace::open(dir.path()).unwrap();
        let csv = Export::gather(&ws, ExportType::Stories)
            .unwrap()
            .render(ExportFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "story_id,title,genre,subgenre,tropes,status,date_created,target_length"
        );
        assert_eq!(lines[1], "heist-1,The Heist,Thriller,Caper,\"heist, betrayal\",,,");
    }
}
