//! Tag parsing for the comma-separated tag input

use crate::domain::MAX_TAGS;

/// Parse a raw comma-separated tag input.
///
/// Segments are trimmed, empty segments dropped, and at most `MAX_TAGS`
/// kept in input order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .take(MAX_TAGS)
        .map(String::from)
        .collect()
}
