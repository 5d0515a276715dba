//! Candidate Extractor — heuristic scan for account-like records.
//!
//! The extraction unit is a blank-line-separated block: a block containing a
//! negative-status keyword yields exactly one `Candidate`; unmatched text
//! yields nothing. Inquiries use the same contract with a per-line span
//! keyed on an inquiry date.
//!
//! Extraction never errors — malformed or too-short text yields an empty
//! sequence rather than a guess.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Candidate, Inquiry};

/// Sections shorter than this cannot plausibly contain a record.
const MIN_SECTION_LEN: usize = 20;

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

static STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(collections?|charge[d]?[ -]?off|late\s+payment|delinquent|past\s+due|repossession|default)\b",
    )
    .unwrap()
});

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*\d[\d,]*(?:\.\d{2})?").unwrap());

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2}/\d{4}|\d{4}-\d{2}-\d{2})\b").unwrap()
});

/// Field-label lines that can never be the creditor name.
static FIELD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:status|amount|balance|date|opened|reported|original\s+creditor)\b").unwrap()
});

/// Optional label prefix in front of a creditor name.
static CREDITOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:creditor|account(?:\s+name)?)\s*[:#]\s*").unwrap());

/// Scan a collections-type section for negative-item records.
///
/// One `Candidate` per matched block; blocks with a status keyword but no
/// plausible creditor line are skipped rather than guessed at.
pub fn extract_candidates(section_text: &str) -> Vec<Candidate> {
    if section_text.trim().len() < MIN_SECTION_LEN {
        return vec![];
    }

    let mut candidates = Vec::new();
    for block in BLANK_LINE.split(section_text) {
        let Some(status_match) = STATUS.find(block) else {
            continue;
        };
        let Some(creditor) = creditor_line(block) else {
            tracing::debug!(
                status = status_match.as_str(),
                "status keyword without a creditor line, skipping block"
            );
            continue;
        };

        candidates.push(Candidate {
            creditor,
            amount: AMOUNT.find(block).map(|m| m.as_str().to_string()),
            status: normalize_status(status_match.as_str()),
            date_opened: DATE.find(block).map(|m| m.as_str().to_string()),
        });
    }
    candidates
}

/// Scan an inquiries-type section for hard-inquiry records.
///
/// One `Inquiry` per line carrying an inquiry date and a company name,
/// in either `date company` or `company date` order.
pub fn extract_inquiries(section_text: &str) -> Vec<Inquiry> {
    if section_text.trim().len() < MIN_SECTION_LEN {
        return vec![];
    }

    let mut inquiries = Vec::new();
    for line in section_text.lines() {
        let Some(date_match) = DATE.find(line) else {
            continue;
        };
        let mut company = String::with_capacity(line.len());
        company.push_str(&line[..date_match.start()]);
        company.push_str(&line[date_match.end()..]);
        let company = company
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '|' | ','))
            .to_string();

        // A company name needs at least a couple of letters.
        if company.chars().filter(|c| c.is_alphabetic()).count() < 2 {
            continue;
        }

        inquiries.push(Inquiry {
            company,
            date: Some(date_match.as_str().to_string()),
        });
    }
    inquiries
}

/// First line of a block that can plausibly name a creditor: not a field
/// label, not an amount, and carrying at least one letter.
fn creditor_line(block: &str) -> Option<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            !FIELD_LABEL.is_match(line)
                && !line.starts_with('$')
                && line.chars().any(|c| c.is_alphabetic())
        })
        .map(|line| {
            CREDITOR_PREFIX
                .replace(line, "")
                .trim_end_matches(':')
                .trim()
                .to_string()
        })
}

/// Collapse status-keyword spelling variants into a canonical form.
fn normalize_status(matched: &str) -> String {
    let lower = matched.to_ascii_lowercase();
    if lower.contains("charge") {
        "charge-off".to_string()
    } else if lower.starts_with("collection") {
        "collection".to_string()
    } else if lower.starts_with("late") {
        "late payment".to_string()
    } else if lower.contains("past") {
        "past due".to_string()
    } else {
        lower
    }
}
