//! Workspace management for idea-factory
//!
//! The workspace is the directory holding the collection folders
//! (`concepts/generated`, `concepts/developing`, `concepts/favorites`,
//! `stories`), the `templates` folder and the index document. Directories
//! are created lazily when a record is first written into them.

pub mod io;
pub(crate) mod lifecycle;
pub mod paths;
mod query;

use std::path::{Path, PathBuf};

use crate::config::{WorkspaceConfig, CONFIG_FILE};
use crate::error::{FactoryError, Result};
use crate::scan::{Collection, Scanner};

pub use lifecycle::{MoveOutcome, NewBatch, NewStory, NoteOutcome};

/// An idea-factory workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root directory of the workspace
    root: PathBuf,
    /// Workspace configuration
    config: WorkspaceConfig,
}

impl Workspace {
    /// Discover a workspace by walking up from `start`
    pub fn discover(start: &Path) -> Result<Self> {
        Self::open(&paths::discover_root(start))
    }

    /// Open the workspace rooted at `root`
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(FactoryError::not_found("workspace directory", root.display()));
        }

        let config = WorkspaceConfig::load_or_default(root)?;
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Use an explicit configuration instead of the one on disk
    pub fn with_config(root: &Path, config: WorkspaceConfig) -> Self {
        Workspace {
            root: root.to_path_buf(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Directory of a collection
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.relative_dir())
    }

    pub fn stories_dir(&self) -> PathBuf {
        self.collection_dir(Collection::Stories)
    }

    /// Location of the index document
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.config.index_file)
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.root)
    }

    /// Path relative to the workspace root, for display
    pub fn relative(&self, path: &Path) -> String {
        paths::relative_display(&self.root, path)
    }
}
