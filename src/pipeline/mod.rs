//! Credit report analysis pipeline.
//!
//! A straight, stateless transformation of raw report text:
//! Segmenter → Extractor → Enrichment → Aggregator. Only the enrichment
//! stage performs I/O; everything else is a pure in-memory transform.
//! Nothing persists between invocations and no stage retries.

pub mod enrich;
pub mod extract;
pub mod segment;
pub mod summary;
pub mod types;

pub use enrich::{AiAnalyzer, EnrichmentOrchestrator};
pub use types::*;

use std::sync::Arc;

use thiserror::Error;

use crate::config::EnrichmentConfig;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Raw text was absent from the upload payload — a caller contract
    /// violation, distinct from an empty (but present) document.
    #[error("raw report text is missing from the upload payload")]
    MissingRawText,
}

/// Entry point for one report analysis.
pub struct ReportPipeline {
    orchestrator: EnrichmentOrchestrator,
}

impl ReportPipeline {
    pub fn new(analyzer: Arc<dyn AiAnalyzer>, config: EnrichmentConfig) -> Self {
        Self {
            orchestrator: EnrichmentOrchestrator::new(analyzer, config),
        }
    }

    /// Build from a pre-configured orchestrator (e.g. one carrying a
    /// fallback observer).
    pub fn with_orchestrator(orchestrator: EnrichmentOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Analyze one uploaded report.
    ///
    /// Rejects absent raw text before segmentation; every other
    /// document-quality problem degrades to empty sections, empty item
    /// lists, or fallback analyses rather than an error. The result is
    /// all-or-nothing — no partially enriched report is ever returned.
    pub async fn run(&self, input: ReportInput) -> Result<ParsedReport, PipelineError> {
        let raw_text = input.raw_text.ok_or(PipelineError::MissingRawText)?;
        tracing::debug!(
            customer_id = %input.context.customer_id,
            bureau = input.context.bureau.as_deref().unwrap_or("unknown"),
            raw_len = raw_text.len(),
            "starting report analysis"
        );

        let collections_section = segment::segment(
            &raw_text,
            "collections",
            &segment::COLLECTIONS_START,
            &segment::COLLECTIONS_END,
        );
        let inquiries_section = segment::segment(
            &raw_text,
            "inquiries",
            &segment::INQUIRIES_START,
            &segment::INQUIRIES_END,
        );

        let candidates = extract::extract_candidates(&collections_section.text);
        let inquiries = extract::extract_inquiries(&inquiries_section.text);
        tracing::debug!(
            candidates = candidates.len(),
            inquiries = inquiries.len(),
            "extraction complete"
        );

        let enriched = self.orchestrator.enrich(candidates).await;

        Ok(summary::aggregate(&raw_text, enriched, inquiries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::client::MockAnalyzer;

    const SAMPLE_REPORT: &str = "\
CREDIT REPORT
Bureau: Experian
Credit Score: 645

Collections

PORTFOLIO RECOVERY ASSOCIATES
Original creditor: SYNCHRONY BANK
Amount: $1,284.00
Status: Collection
Date opened: 03/15/2021

MIDLAND CREDIT MANAGEMENT
Amount: $612
Status: Charged off
Date opened: 11/02/2020

Public Records
None reported.

Inquiries

04/18/2024  CAPITAL ONE
09/30/2023  ROCKET MORTGAGE

End of Report
";

    fn make_input(raw_text: &str) -> ReportInput {
        ReportInput {
            raw_text: Some(raw_text.to_string()),
            context: ReportContext {
                customer_id: "cust-123".to_string(),
                bureau: Some("experian".to_string()),
            },
        }
    }

    fn make_pipeline(analyzer: MockAnalyzer) -> ReportPipeline {
        ReportPipeline::new(Arc::new(analyzer), EnrichmentConfig::default())
    }

    fn canned_analysis() -> AiAnalysis {
        AiAnalysis {
            reasons: vec![
                "No validation on file".into(),
                "Reported balance inconsistent".into(),
                "Account re-aged".into(),
            ],
            probability: 65,
            recommended_strategy: "Demand debt validation in writing".into(),
        }
    }

    #[tokio::test]
    async fn full_report_is_parsed_end_to_end() {
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let report = pipeline.run(make_input(SAMPLE_REPORT)).await.unwrap();

        assert_eq!(report.raw_text_length, SAMPLE_REPORT.len());
        assert_eq!(report.summary.score, Some(645));
        assert_eq!(report.collections.len(), 2);
        assert_eq!(report.summary.total_negative_items, 2);
        assert_eq!(
            report.collections[0].candidate.creditor,
            "PORTFOLIO RECOVERY ASSOCIATES"
        );
        assert_eq!(report.collections[1].candidate.status, "charge-off");
        assert_eq!(report.inquiries.len(), 2);
        assert_eq!(report.inquiries[0].company, "CAPITAL ONE");
        for item in &report.collections {
            assert_eq!(item.analysis, canned_analysis());
        }
    }

    #[tokio::test]
    async fn identical_input_yields_identical_report() {
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let first = pipeline.run(make_input(SAMPLE_REPORT)).await.unwrap();
        let second = pipeline.run(make_input(SAMPLE_REPORT)).await.unwrap();
        assert_eq!(first, second);

        // Byte-identical, not merely structurally equal.
        let a = serde_json::to_vec(&first).unwrap();
        let b = serde_json::to_vec(&second).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn missing_collections_marker_yields_zero_items() {
        let text = "CREDIT REPORT\nScore: 700\nAll accounts current.\n";
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let report = pipeline.run(make_input(text)).await.unwrap();

        assert!(report.collections.is_empty());
        assert_eq!(report.summary.total_negative_items, 0);
        assert_eq!(report.summary.score, Some(700));
    }

    #[tokio::test]
    async fn empty_raw_text_yields_zeroed_report() {
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let report = pipeline.run(make_input("")).await.unwrap();

        assert_eq!(report.raw_text_length, 0);
        assert!(report.collections.is_empty());
        assert!(report.inquiries.is_empty());
        assert_eq!(report.summary.score, None);
        assert_eq!(report.summary.total_negative_items, 0);
    }

    #[tokio::test]
    async fn absent_raw_text_is_rejected_up_front() {
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let input = ReportInput {
            raw_text: None,
            context: ReportContext::default(),
        };
        let result = pipeline.run(input).await;
        assert!(matches!(result, Err(PipelineError::MissingRawText)));
    }

    #[tokio::test]
    async fn failing_analyzer_yields_fallback_for_every_item() {
        let pipeline = make_pipeline(MockAnalyzer::failing("provider outage"));
        let report = pipeline.run(make_input(SAMPLE_REPORT)).await.unwrap();

        assert_eq!(report.collections.len(), 2);
        for item in &report.collections {
            assert_eq!(item.analysis, AiAnalysis::fallback());
        }
    }

    #[tokio::test]
    async fn single_account_block_yields_single_item() {
        let text = "\
Collections

NATIONAL CREDIT SYSTEMS
Amount: $233.00
Status: Collection
Date opened: 07/04/2022

Public Records
None reported.
";
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let report = pipeline.run(make_input(text)).await.unwrap();

        assert_eq!(report.collections.len(), 1);
        assert_eq!(report.summary.total_negative_items, 1);
        assert_eq!(
            report.collections[0].candidate.creditor,
            "NATIONAL CREDIT SYSTEMS"
        );
    }

    #[tokio::test]
    async fn no_score_pattern_yields_null_score() {
        let text = "Collections\n\nACME RECOVERY\nStatus: Collection account\n";
        let pipeline = make_pipeline(MockAnalyzer::returning(canned_analysis()));
        let report = pipeline.run(make_input(text)).await.unwrap();
        assert_eq!(report.summary.score, None);
    }
}
