//! Collection scanning
//!
//! Every operation rescans the collection directories; nothing is cached
//! between calls. Files are visited one level deep, in file-name order, so
//! two scans of an unchanged workspace produce the same sequence.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{FactoryError, Result};
use crate::record::{Record, RecordKind};
use crate::store::io::read_record;
use crate::store::paths::{
    CONCEPTS_DIR, DEVELOPING_DIR, FAVORITES_DIR, GENERATED_DIR, RECORD_EXTENSION, STORIES_DIR,
};

/// A directory of records sharing a lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Generated,
    Developing,
    Favorites,
    Stories,
}

impl Collection {
    /// Every collection, in traversal order
    pub const ALL: [Collection; 4] = [
        Collection::Generated,
        Collection::Developing,
        Collection::Favorites,
        Collection::Stories,
    ];

    /// Batch collections, in traversal order
    pub const BATCHES: [Collection; 3] = [
        Collection::Generated,
        Collection::Developing,
        Collection::Favorites,
    ];

    pub const STORIES: [Collection; 1] = [Collection::Stories];

    pub fn label(self) -> &'static str {
        match self {
            Collection::Generated => GENERATED_DIR,
            Collection::Developing => DEVELOPING_DIR,
            Collection::Favorites => FAVORITES_DIR,
            Collection::Stories => STORIES_DIR,
        }
    }

    /// Directory of the collection relative to the workspace root
    pub fn relative_dir(self) -> PathBuf {
        match self {
            Collection::Stories => PathBuf::from(STORIES_DIR),
            batch => Path::new(CONCEPTS_DIR).join(batch.label()),
        }
    }

    pub fn kind(self) -> RecordKind {
        match self {
            Collection::Stories => RecordKind::Story,
            _ => RecordKind::Batch,
        }
    }

    pub fn is_batch(self) -> bool {
        self.kind() == RecordKind::Batch
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Collection {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "generated" => Ok(Collection::Generated),
            "developing" => Ok(Collection::Developing),
            "favorites" | "favorite" => Ok(Collection::Favorites),
            "stories" => Ok(Collection::Stories),
            other => Err(FactoryError::invalid_value(
                "collection (expected generated, developing, favorites or stories)",
                other,
            )),
        }
    }
}

/// A record together with the collection it was found in
#[derive(Debug, Clone)]
pub struct ScannedRecord {
    pub record: Record,
    pub collection: Collection,
}

impl ScannedRecord {
    pub fn path(&self) -> Option<&Path> {
        self.record.path.as_deref()
    }
}

/// Enumerates records under a workspace root
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    root: &'a Path,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &'a Path) -> Self {
        Scanner { root }
    }

    /// Lazily read every record of `collections`, in the order given.
    ///
    /// Missing directories yield nothing. Unreadable files yield an error
    /// item and scanning continues with the next file.
    pub fn scan(
        self,
        collections: &'a [Collection],
    ) -> impl Iterator<Item = Result<ScannedRecord>> + 'a {
        let root = self.root;
        collections.iter().copied().flat_map(move |collection| {
            record_paths(&root.join(collection.relative_dir())).map(move |path| {
                let record = read_record(&path?, collection.kind())?;
                Ok(ScannedRecord { record, collection })
            })
        })
    }

    /// Read every record of `collections`, failing on the first error
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn collect(self, collections: &'a [Collection]) -> Result<Vec<ScannedRecord>> {
        let start = std::time::Instant::now();
        let records = self.scan(collections).collect::<Result<Vec<_>>>()?;
        crate::trace_time!(start, "scan", records = records.len());
        Ok(records)
    }
}

/// Paths of `*.md` files directly inside `dir`, sorted by file name
pub(crate) fn record_paths(dir: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    let display = dir.display().to_string();
    let walker = dir.is_dir().then(|| {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
    });

    walker
        .into_iter()
        .flatten()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.into_path();
                let is_record = path.is_file()
                    && path.extension().is_some_and(|ext| ext == RECORD_EXTENSION);
                is_record.then_some(Ok(path))
            }
            Err(e) => Some(Err(FactoryError::io_operation("scan", &display, e))),
        })
}
