//! Section Segmenter — splits raw report text into named regions.
//!
//! Credit-report layouts vary by bureau and export tool, so a missing
//! boundary marker yields an empty section rather than an error.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Section;

/// Boundary markers for the collections region.
pub static COLLECTIONS_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcollections?\b").unwrap());
pub static COLLECTIONS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:public\s+records?|inquiries)\b").unwrap());

/// Boundary markers for the inquiries region.
pub static INQUIRIES_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\binquiries\b").unwrap());
pub static INQUIRIES_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bend\s+of\s+report\b").unwrap());

/// Extract the named region between the first `start` match and the first
/// subsequent `end` match (or end-of-text when `end` never matches).
///
/// Missing `start` yields an empty section. Deterministic: identical text
/// always yields identical boundaries.
pub fn segment(text: &str, name: &str, start: &Regex, end: &Regex) -> Section {
    let Some(start_match) = start.find(text) else {
        tracing::debug!(section = name, "section marker not found");
        return Section {
            name: name.to_string(),
            text: String::new(),
        };
    };

    let body = &text[start_match.end()..];
    let section_text = match end.find(body) {
        Some(end_match) => &body[..end_match.start()],
        None => body,
    };

    Section {
        name: name.to_string(),
        text: section_text.to_string(),
    }
}
