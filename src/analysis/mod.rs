//! AI dispute-analysis client: prompt construction, reply parsing, and the
//! HTTP client implementing the `AiAnalyzer` port.

pub mod client;
pub mod parser;
pub mod prompt;

pub use client::{HttpAnalyzer, MockAnalyzer};
pub use parser::parse_analysis_reply;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("AI provider is unreachable at {0}")]
    Connection(String),

    #[error("AI provider returned error (status {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("malformed analysis reply: {0}")]
    MalformedReply(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),
}
