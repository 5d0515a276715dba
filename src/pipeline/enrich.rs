//! Enrichment Orchestrator — fans out one AI analysis per candidate.
//!
//! Enrichment is a total function over its input: every candidate comes back
//! with exactly one analysis, in input order, regardless of how individual
//! calls complete. A failed call (connect error, HTTP error, timeout,
//! malformed reply) substitutes the fixed fallback in place — one attempt
//! per candidate, no retry.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{join_all, BoxFuture};
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::analysis::AnalysisError;
use crate::config::EnrichmentConfig;

use super::types::{AiAnalysis, Candidate, EnrichedItem, FallbackEvent};

/// Port for the external AI dispute-analysis capability.
///
/// Implementations must be stateless and re-entrant; the orchestrator issues
/// concurrent calls against a single shared handle.
pub trait AiAnalyzer: Send + Sync {
    fn analyze<'a>(
        &'a self,
        candidate: &'a Candidate,
    ) -> BoxFuture<'a, Result<AiAnalysis, AnalysisError>>;
}

/// Callback invoked on each fallback substitution, so hosts can observe
/// enrichment failures without them surfacing as pipeline errors.
pub type FallbackObserver = Box<dyn Fn(&FallbackEvent) + Send + Sync>;

pub struct EnrichmentOrchestrator {
    analyzer: Arc<dyn AiAnalyzer>,
    config: EnrichmentConfig,
    observer: Option<FallbackObserver>,
}

impl EnrichmentOrchestrator {
    pub fn new(analyzer: Arc<dyn AiAnalyzer>, config: EnrichmentConfig) -> Self {
        Self {
            analyzer,
            config,
            observer: None,
        }
    }

    /// Attach an observer called on every fallback substitution.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&FallbackEvent) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Enrich every candidate, preserving input order.
    ///
    /// All calls are issued concurrently, capped by the configured
    /// semaphore. The join waits for all of them; completion order never
    /// leaks into the output.
    pub async fn enrich(&self, candidates: Vec<Candidate>) -> Vec<EnrichedItem> {
        if candidates.is_empty() {
            return vec![];
        }

        let semaphore = Semaphore::new(self.config.max_in_flight.max(1));
        let per_call = Duration::from_secs(self.config.call_timeout_secs);

        let calls = candidates.iter().enumerate().map(|(index, candidate)| {
            let semaphore = &semaphore;
            async move {
                // The semaphore is never closed while enrich is running.
                let _permit = semaphore.acquire().await.ok();
                match timeout(per_call, self.analyzer.analyze(candidate)).await {
                    Ok(Ok(analysis)) => analysis,
                    Ok(Err(e)) => self.substitute_fallback(index, candidate, &e.to_string()),
                    Err(_) => self.substitute_fallback(
                        index,
                        candidate,
                        &format!("analysis call timed out after {}s", per_call.as_secs()),
                    ),
                }
            }
        });

        // join_all yields results in future order, i.e. candidate order.
        let analyses = join_all(calls).await;

        candidates
            .into_iter()
            .zip(analyses)
            .map(|(candidate, analysis)| EnrichedItem {
                candidate,
                analysis,
            })
            .collect()
    }

    fn substitute_fallback(&self, index: usize, candidate: &Candidate, error: &str) -> AiAnalysis {
        tracing::warn!(
            index,
            creditor = %candidate.creditor,
            error,
            "AI analysis failed, substituting fallback"
        );
        if let Some(observer) = &self.observer {
            observer(&FallbackEvent {
                index,
                creditor: candidate.creditor.clone(),
                error: error.to_string(),
            });
        }
        AiAnalysis::fallback()
    }
}
