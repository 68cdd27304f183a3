//! Argument validation shared by the command surface

use crate::error::{FactoryError, Result};

/// Longest accepted free-text argument (titles, genres, tropes)
pub const MAX_TEXT_LEN: usize = 500;

/// Longest accepted search term
pub const MAX_TERM_LEN: usize = 1000;

pub const LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=1000;
pub const COUNT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Trim `value` and require it to be non-empty, single-line and at most
/// `max_len` chars.
///
/// These values end up in record headers, where a line break would start a
/// new header key.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = bounded_text(field, value, max_len)?;
    if value.chars().any(char::is_control) {
        crate::bail_invalid!(field, "control characters are not allowed");
    }
    Ok(value)
}

/// Like [`required_text`] but allows line breaks and tabs, for text that
/// only goes into a record body
pub fn body_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = bounded_text(field, value, max_len)?;
    if value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        crate::bail_invalid!(field, "control characters are not allowed");
    }
    Ok(value)
}

fn bounded_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        crate::bail_invalid!(field, "value cannot be empty");
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(FactoryError::invalid_value(
            field,
            format!("must be at most {} characters, got {}", max_len, len),
        ));
    }
    Ok(value.to_string())
}

/// Trim an optional filter value, treating blank as absent
pub fn optional_text(field: &str, value: Option<&str>, max_len: usize) -> Result<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => required_text(field, v, max_len).map(Some),
        None => Ok(None),
    }
}

/// Search terms may be empty (match everything) but not oversized
pub fn search_term(term: &str) -> Result<String> {
    let term = term.trim();
    let len = term.chars().count();
    if len > MAX_TERM_LEN {
        return Err(FactoryError::invalid_value(
            "search term",
            format!("must be at most {} characters, got {}", MAX_TERM_LEN, len),
        ));
    }
    Ok(term.to_string())
}

pub fn limit(value: usize) -> Result<usize> {
    if !LIMIT_RANGE.contains(&value) {
        crate::bail_invalid!("limit (expected 1-1000)", value);
    }
    Ok(value)
}

pub fn count(value: u32) -> Result<u32> {
    if !COUNT_RANGE.contains(&value) {
        crate::bail_invalid!("count (expected 1-100)", value);
    }
    Ok(value)
}

pub fn threshold(value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        crate::bail_invalid!("threshold (expected 0.0-1.0)", value);
    }
    Ok(value)
}
