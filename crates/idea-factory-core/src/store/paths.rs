use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Root of the batch collections
pub const CONCEPTS_DIR: &str = "concepts";

/// Batch collection subdirectories
pub const GENERATED_DIR: &str = "generated";
pub const DEVELOPING_DIR: &str = "developing";
pub const FAVORITES_DIR: &str = "favorites";

/// Story-development documents
pub const STORIES_DIR: &str = "stories";

/// Record templates
pub const TEMPLATES_DIR: &str = "templates";
pub const BATCH_TEMPLATE_FILE: &str = "concept-batch.md";
pub const STORY_TEMPLATE_FILE: &str = "story-development.md";

/// Record file extension
pub const RECORD_EXTENSION: &str = "md";

/// Walk up from `start` to the first directory that looks like a workspace.
///
/// A directory qualifies when it holds the config file or one of the
/// collection roots. Falls back to `start` itself.
pub fn discover_root(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE).is_file()
            || current.join(CONCEPTS_DIR).is_dir()
            || current.join(STORIES_DIR).is_dir()
        {
            return current;
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return start.to_path_buf(),
        }
    }
}

/// Render `path` relative to `root` with forward slashes
pub fn relative_display(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.display().to_string();
    };
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
