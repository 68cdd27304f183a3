//! Workspace configuration
//!
//! Configuration lives in an optional `idea-factory.toml` at the workspace
//! root. Every field has a default, so a workspace without the file behaves
//! exactly like one with an empty file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FactoryError, Result};

/// Configuration filename at the workspace root
pub const CONFIG_FILE: &str = "idea-factory.toml";

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Index document path, relative to the workspace root
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Concept count written into new batches when `--count` is omitted
    #[serde(default = "default_count")]
    pub default_count: u32,

    /// Default cap on search results (unlimited when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_limit: Option<usize>,

    /// Characters of context shown on each side of a search match
    #[serde(default = "default_preview_context")]
    pub preview_context: usize,

    /// Minimum score for `find-similar` pairs (0.0-1.0)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Enable stemming for similarity matching
    #[serde(default = "default_stemming")]
    pub stemming: bool,
}

fn default_index_file() -> String {
    "INDEX.md".to_string()
}

fn default_count() -> u32 {
    10
}

fn default_preview_context() -> usize {
    100
}

fn default_similarity_threshold() -> f64 {
    0.8
}

fn default_stemming() -> bool {
    true
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            default_count: default_count(),
            search_limit: None,
            preview_context: default_preview_context(),
            similarity_threshold: default_similarity_threshold(),
            stemming: default_stemming(),
        }
    }
}

impl WorkspaceConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WorkspaceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the configuration of a workspace root, falling back to defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FactoryError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
