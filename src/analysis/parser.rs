//! Reply parsing: turn the model's text into a validated `AiAnalysis`.
//!
//! Any shape violation is an error here; the orchestrator collapses it into
//! the fallback analysis, so strictness never costs availability.

use serde::Deserialize;

use super::AnalysisError;
use crate::pipeline::types::AiAnalysis;

#[derive(Deserialize)]
struct RawReply {
    reasons: Vec<String>,
    probability: i64,
    #[serde(alias = "recommendedStrategy")]
    recommended_strategy: String,
}

/// Parse the model reply into a well-formed analysis.
///
/// Accepts either a ```json fenced block or a bare JSON object, and enforces
/// the contract: exactly three reasons, probability within 0–100.
pub fn parse_analysis_reply(reply: &str) -> Result<AiAnalysis, AnalysisError> {
    let json_str = extract_json(reply)?;

    let raw: RawReply = serde_json::from_str(json_str)
        .map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

    if raw.reasons.len() != 3 {
        return Err(AnalysisError::MalformedReply(format!(
            "expected exactly 3 reasons, got {}",
            raw.reasons.len()
        )));
    }
    if !(0..=100).contains(&raw.probability) {
        return Err(AnalysisError::MalformedReply(format!(
            "probability {} outside 0-100",
            raw.probability
        )));
    }
    if raw.recommended_strategy.trim().is_empty() {
        return Err(AnalysisError::MalformedReply(
            "empty recommended_strategy".to_string(),
        ));
    }

    Ok(AiAnalysis {
        reasons: raw.reasons,
        probability: raw.probability as u8,
        recommended_strategy: raw.recommended_strategy,
    })
}

/// Locate the JSON object within the reply text.
fn extract_json(reply: &str) -> Result<&str, AnalysisError> {
    if let Some(fence_start) = reply.find("```json") {
        let content_start = fence_start + 7;
        let content_end = reply[content_start..]
            .find("```")
            .ok_or_else(|| AnalysisError::MalformedReply("unclosed JSON fence".to_string()))?;
        return Ok(reply[content_start..content_start + content_end].trim());
    }

    let start = reply
        .find('{')
        .ok_or_else(|| AnalysisError::MalformedReply("no JSON object found".to_string()))?;
    let end = reply
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| AnalysisError::MalformedReply("no JSON object found".to_string()))?;
    Ok(&reply[start..=end])
}
