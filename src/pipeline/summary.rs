//! Summary Aggregator — pure assembly of the final report.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{EnrichedItem, Inquiry, ParsedReport, ReportSummary};

/// "score" followed by an optional separator and a 3-digit run.
/// The exactly-three check is finished in `find_score` (the regex crate has
/// no lookahead, so a 4-digit run must be rejected by inspecting the byte
/// after the match).
static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bscore\b[\s:=\-]*([0-9]{3})").unwrap());

/// First case-insensitive 3-digit score in the raw text, left to right.
pub fn find_score(raw_text: &str) -> Option<u16> {
    for caps in SCORE.captures_iter(raw_text) {
        let Some(digits) = caps.get(1) else { continue };
        let followed_by_digit = raw_text
            .as_bytes()
            .get(digits.end())
            .is_some_and(|b| b.is_ascii_digit());
        if followed_by_digit {
            continue;
        }
        if let Ok(score) = digits.as_str().parse() {
            return Some(score);
        }
    }
    None
}

/// Assemble the final report. Pure and deterministic — no external calls.
pub fn aggregate(
    raw_text: &str,
    collections: Vec<EnrichedItem>,
    inquiries: Vec<Inquiry>,
) -> ParsedReport {
    let summary = ReportSummary {
        score: find_score(raw_text),
        total_negative_items: collections.len(),
    };
    ParsedReport {
        raw_text_length: raw_text.len(),
        collections,
        inquiries,
        summary,
    }
}
