pub mod analysis;
pub mod config;
pub mod letter;
pub mod pipeline;

pub use pipeline::{ParsedReport, ReportInput, ReportPipeline};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts embedding the pipeline.
///
/// Respects `RUST_LOG` when set; otherwise uses the crate default filter.
/// Safe to call more than once (later calls are no-ops).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
