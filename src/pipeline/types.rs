use serde::{Deserialize, Serialize};

/// Fixed fallback analysis substituted when an AI call fails.
pub const FALLBACK_REASONS: [&str; 3] = [
    "Verify account accuracy",
    "Request proof of debt",
    "Check statute of limitations",
];
pub const FALLBACK_PROBABILITY: u8 = 30;
pub const FALLBACK_STRATEGY: &str = "Standard validation request";

/// A named contiguous region of raw report text bounded by marker patterns.
///
/// `text` may be empty — a missing section is a document-layout variation,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub text: String,
}

/// A heuristically extracted negative item, prior to AI enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub creditor: String,
    pub amount: Option<String>,
    pub status: String,
    pub date_opened: Option<String>,
}

/// A hard inquiry record, structurally parallel to `Candidate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub company: String,
    pub date: Option<String>,
}

/// AI-generated dispute assessment for one candidate.
///
/// Constructed only by the reply parser (which enforces the shape) or by
/// `AiAnalysis::fallback`, so `reasons` always holds exactly three entries
/// and `probability` is within 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub reasons: Vec<String>,
    pub probability: u8,
    pub recommended_strategy: String,
}

impl AiAnalysis {
    /// The deterministic substitute used when enrichment fails.
    pub fn fallback() -> Self {
        Self {
            reasons: FALLBACK_REASONS.iter().map(|r| r.to_string()).collect(),
            probability: FALLBACK_PROBABILITY,
            recommended_strategy: FALLBACK_STRATEGY.to_string(),
        }
    }
}

/// A candidate merged with exactly one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub candidate: Candidate,
    pub analysis: AiAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// First 3-digit score pattern in the raw text, left to right.
    /// `None` when no such pattern occurs.
    pub score: Option<u16>,
    pub total_negative_items: usize,
}

/// Final aggregated result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReport {
    pub raw_text_length: usize,
    pub collections: Vec<EnrichedItem>,
    pub inquiries: Vec<Inquiry>,
    pub summary: ReportSummary,
}

/// Caller-supplied context carried through the pipeline unchanged.
/// The pipeline never interprets these fields; they exist for log
/// correlation and for downstream collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    pub customer_id: String,
    pub bureau: Option<String>,
}

/// Input to one pipeline invocation.
///
/// `raw_text` is `Option` because an absent document text is a caller
/// contract violation (rejected up front), while an empty string is a
/// legitimate — if useless — document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInput {
    pub raw_text: Option<String>,
    pub context: ReportContext,
}

/// Emitted to the enrichment observer on each fallback substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEvent {
    pub index: usize,
    pub creditor: String,
    pub error: String,
}
