//! Flattened input record for the dispute-letter generator.
//!
//! The generator itself lives outside this crate; the pipeline's obligation
//! is a deterministic flattening of one enriched item plus the customer's
//! identity into the record the generator consumes.

use serde::{Deserialize, Serialize};

use crate::pipeline::types::{EnrichedItem, FALLBACK_REASONS};

/// Customer identity supplied by the host service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// One letter request: a single enriched item for a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterInput {
    pub user_id: String,
    pub user_name: String,
    pub user_address: String,
    pub creditor_name: String,
    pub creditor_address: Option<String>,
    pub account_number: Option<String>,
    pub amount: Option<String>,
    pub reason: String,
}

/// Flatten an enriched item into a letter request.
///
/// The dispute reason is the item's first analysis reason; enrichment
/// guarantees three reasons, so the fallback head only covers a
/// hand-constructed analysis.
pub fn letter_input(customer: &Customer, item: &EnrichedItem) -> LetterInput {
    let reason = item
        .analysis
        .reasons
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_REASONS[0].to_string());

    LetterInput {
        user_id: customer.id.clone(),
        user_name: customer.name.clone(),
        user_address: customer.address.clone(),
        creditor_name: item.candidate.creditor.clone(),
        creditor_address: None,
        account_number: None,
        amount: item.candidate.amount.clone(),
        reason,
    }
}
