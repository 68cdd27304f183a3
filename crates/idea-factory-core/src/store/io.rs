use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{read_error, write_error, FactoryError, Result};
use crate::record::{HeaderIssue, Record, RecordKind};

/// Read and parse the record at `path`.
///
/// A missing file is `NotFound`; header problems never fail the read.
/// Invalid UTF-8 is replaced with U+FFFD and reported as an issue.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn read_record(path: &Path, kind: RecordKind) -> Result<Record> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(Record::parse(kind, &content, Some(path.to_path_buf()))),
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            let bytes = e.into_bytes();
            let content = String::from_utf8_lossy(&bytes);
            let line = bytes[..valid_up_to].iter().filter(|&&b| b == b'\n').count() + 1;
            tracing::warn!(path = %path.display(), line, "record is not valid UTF-8");

            let mut record = Record::parse(kind, &content, Some(path.to_path_buf()));
            record.issues.push(HeaderIssue {
                line,
                text: content.lines().nth(line - 1).unwrap_or_default().trim().to_string(),
                reason: "invalid UTF-8 replaced".to_string(),
            });
            Ok(record)
        }
    }
}

/// Write `content` to a path that must not exist yet, creating parent
/// directories as needed.
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                FactoryError::already_exists("file", path.display())
            } else {
                write_error(path, e)
            }
        })?;
    file.write_all(content.as_bytes())
        .map_err(|e| write_error(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "created");
    Ok(())
}

/// Replace the contents of an existing file
pub(crate) fn overwrite(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| write_error(path, e))
}
