//! Error types and exit codes for idea-factory
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown batch, concept out of range, file already exists)

mod macros;

use std::path::Path;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing record, bad ordinal, existing file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during idea-factory operations
///
/// Malformed frontmatter is not an error: header problems are
/// recovered into [`crate::record::HeaderIssue`]s on the parsed record.
#[derive(Error, Debug)]
pub enum FactoryError {
    // Usage errors (exit code 2)
    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("batch '{id}' not found (run `idea-factory list --kind batches` to see available batches)")]
    BatchNotFound { id: String },

    #[error("story '{name}' not found (looked in stories/)")]
    StoryNotFound { name: String },

    #[error("concept #{ordinal} not found in batch '{batch_id}' (this batch has {available} concepts)")]
    ConceptOutOfRange {
        batch_id: String,
        ordinal: usize,
        available: usize,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl FactoryError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FactoryError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FactoryError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        FactoryError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FactoryError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FactoryError::DuplicateFormat
            | FactoryError::UsageError(_)
            | FactoryError::InvalidValue { .. } => ExitCode::Usage,

            FactoryError::BatchNotFound { .. }
            | FactoryError::StoryNotFound { .. }
            | FactoryError::ConceptOutOfRange { .. }
            | FactoryError::NotFound { .. }
            | FactoryError::AlreadyExists { .. } => ExitCode::Data,

            FactoryError::Io(_)
            | FactoryError::Yaml(_)
            | FactoryError::Json(_)
            | FactoryError::Toml(_)
            | FactoryError::Csv(_)
            | FactoryError::Fmt(_)
            | FactoryError::FailedOperationWithTarget { .. }
            | FactoryError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            FactoryError::DuplicateFormat => "duplicate_format",
            FactoryError::UsageError(_) => "usage_error",
            FactoryError::InvalidValue { .. } => "invalid_value",
            FactoryError::BatchNotFound { .. } => "batch_not_found",
            FactoryError::StoryNotFound { .. } => "story_not_found",
            FactoryError::ConceptOutOfRange { .. } => "index_out_of_range",
            FactoryError::NotFound { .. } => "not_found",
            FactoryError::AlreadyExists { .. } => "already_exists",
            FactoryError::Io(_) => "io_error",
            FactoryError::Yaml(_) => "yaml_error",
            FactoryError::Json(_) => "json_error",
            FactoryError::Toml(_) => "toml_error",
            FactoryError::Csv(_) => "csv_error",
            FactoryError::Fmt(_) => "fmt_error",
            FactoryError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FactoryError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Map a read failure on `path` to `NotFound` or a contextual IO error.
pub(crate) fn read_error(path: &Path, err: std::io::Error) -> FactoryError {
    if err.kind() == std::io::ErrorKind::NotFound {
        FactoryError::not_found("file", path.display())
    } else {
        FactoryError::io_operation("read", path.display(), err)
    }
}

/// Path-carrying helper for write failures.
pub(crate) fn write_error(path: &Path, err: std::io::Error) -> FactoryError {
    FactoryError::io_operation("write", path.display(), err)
}

/// Result type alias for idea-factory operations
pub type Result<T> = std::result::Result<T, FactoryError>;
