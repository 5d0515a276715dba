//! Prompt construction for dispute analysis.

use crate::pipeline::types::Candidate;

pub const DISPUTE_SYSTEM_PROMPT: &str = r#"
You are a credit dispute analyst. Your ONLY role is to assess one negative
credit-report item and propose how a consumer could dispute it.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Base your assessment ONLY on the account fields provided.
2. NEVER invent account details that are not given.
3. Output MUST be a single valid JSON object and nothing else.
4. "reasons" MUST contain exactly three distinct dispute reasons.
5. "probability" MUST be an integer between 0 and 100.
6. "recommended_strategy" MUST be one sentence.
"#;

/// Build the per-candidate analysis prompt.
///
/// The candidate is embedded as JSON so field names survive verbatim and
/// absent fields show as null rather than vanishing.
pub fn build_dispute_prompt(candidate: &Candidate) -> String {
    let record =
        serde_json::to_string_pretty(candidate).expect("candidate serializes to JSON");

    format!(
        r#"<account>
{record}
</account>

Assess the negative item above and reply with this exact JSON structure:

```json
{{
  "reasons": ["reason 1", "reason 2", "reason 3"],
  "probability": 0,
  "recommended_strategy": "one sentence"
}}
```
"#
    )
}
