//! Pipeline and AI-client configuration.
//!
//! Plain structs with sensible defaults; the host overrides fields directly
//! or via `from_env`. No config-file parsing — the pipeline is a library
//! embedded in a service that owns its own configuration surface.

/// Crate-level constants
pub const APP_NAME: &str = "creditlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,creditlens=debug"
}

/// Configuration for the HTTP AI analyzer client.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Base URL of the OpenAI-compatible chat completions endpoint.
    pub base_url: String,
    /// Model name sent with each analysis request.
    pub model: String,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
        }
    }
}

impl AnalyzerConfig {
    /// Build from environment, falling back to defaults per field.
    ///
    /// Reads `CREDITLENS_AI_BASE_URL` and `CREDITLENS_AI_MODEL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CREDITLENS_AI_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("CREDITLENS_AI_MODEL").unwrap_or(defaults.model),
            timeout_secs: defaults.timeout_secs,
        }
    }
}

/// Configuration for the enrichment fan-out.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Maximum concurrent in-flight AI calls (semaphore size).
    /// Sized to the external provider's rate limit.
    pub max_in_flight: usize,
    /// Per-call timeout; a timed-out call is treated as any other failure.
    pub call_timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 4,
            call_timeout_secs: 45,
        }
    }
}
