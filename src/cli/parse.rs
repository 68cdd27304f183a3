use idea_factory_core::export::{ExportFormat, ExportType};
use idea_factory_core::record::Status;
use idea_factory_core::scan::Collection;

/// Parse a record status from string
pub fn parse_status(s: &str) -> std::result::Result<Status, String> {
    s.parse::<Status>().map_err(|e| e.to_string())
}

/// Parse a collection label from string
pub fn parse_collection(s: &str) -> std::result::Result<Collection, String> {
    s.parse::<Collection>().map_err(|e| e.to_string())
}

pub fn parse_export_type(s: &str) -> std::result::Result<ExportType, String> {
    s.parse::<ExportType>().map_err(|e| e.to_string())
}

pub fn parse_export_format(s: &str) -> std::result::Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| e.to_string())
}
