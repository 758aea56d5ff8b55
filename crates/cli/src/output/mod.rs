//! Output formatting utilities
//!
//! This module provides formatters for CLI output in both human-readable
//! and JSON formats.

mod formatter;

pub use formatter::Formatter;

use yr_core::ShortUrl;

/// Output configuration derived from CLI flags
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

/// Render an entity as aligned detail lines for human output.
///
/// The management code line is only rendered where the user has a chance
/// of learning it (create and edit); it is never available on fetches.
pub fn entity_details(entity: &ShortUrl, include_management: bool) -> String {
    let mut lines = vec![
        format!("Code       : {}", entity.code),
        format!("URL        : {}", entity.url),
        format!("Short URL  : {}", entity.full_url),
        format!("Created    : {}", format_timestamp(&entity.created_at)),
    ];
    if let Some(modified) = &entity.modified_at {
        lines.push(format!("Modified   : {}", format_timestamp(modified)));
    }
    lines.push(format!("Position   : {}", entity.pos));
    lines.push(format!("Credit     : {}", entity.credit));
    if include_management {
        lines.push(format!(
            "Management : {}",
            entity.management_code.as_deref().unwrap_or("None")
        ));
    }
    lines.join("\n")
}

/// Pretty-print a service timestamp, falling back to the raw string when
/// it is not RFC 3339 (the service format is not contractually fixed).
fn format_timestamp(raw: &str) -> String {
    match raw.parse::<jiff::Timestamp>() {
        Ok(timestamp) => timestamp.strftime("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> ShortUrl {
        ShortUrl {
            code: "abc123".into(),
            url: "https://example.com/a.jpg".into(),
            created_at: "2024-01-01T00:00:00Z".into(),
            modified_at: None,
            pos: 42,
            credit: "Someone".into(),
            management_code: Some("mgmt-xyz".into()),
            full_url: "https://yiff.rocks/abc123".into(),
        }
    }

    #[test]
    fn test_entity_details_with_management() {
        let details = entity_details(&entity(), true);
        assert!(details.contains("Code       : abc123"));
        assert!(details.contains("Short URL  : https://yiff.rocks/abc123"));
        assert!(details.contains("Created    : 2024-01-01 00:00:00 UTC"));
        assert!(details.contains("Management : mgmt-xyz"));
        assert!(!details.contains("Modified"));
    }

    #[test]
    fn test_entity_details_without_management() {
        let details = entity_details(&entity(), false);
        assert!(!details.contains("Management"));
    }

    #[test]
    fn test_entity_details_absent_management_prints_none() {
        let mut record = entity();
        record.management_code = None;
        let details = entity_details(&record, true);
        assert!(details.contains("Management : None"));
    }

    #[test]
    fn test_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("yesterday-ish"), "yesterday-ish");
    }
}
