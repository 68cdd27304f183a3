//! Small output helpers shared by commands

use serde::Serialize;

use idea_factory_core::error::Result;
use idea_factory_core::record::Record;
use idea_factory_core::store::Workspace;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Record path relative to the workspace root, empty for in-memory records
pub fn record_path(workspace: &Workspace, record: &Record) -> String {
    record
        .path
        .as_deref()
        .map(|p| workspace.relative(p))
        .unwrap_or_default()
}

/// Value or `N/A` for display
pub fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
