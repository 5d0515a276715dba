//! HTTP AI client implementing the `AiAnalyzer` port, plus a mock for tests.

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

use super::parser::parse_analysis_reply;
use super::prompt::{build_dispute_prompt, DISPUTE_SYSTEM_PROMPT};
use super::AnalysisError;
use crate::config::AnalyzerConfig;
use crate::pipeline::types::{AiAnalysis, Candidate};
use crate::pipeline::AiAnalyzer;

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpAnalyzer {
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpAnalyzer {
    pub fn new(config: &AnalyzerConfig, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            client,
        }
    }
}

/// Request body for /v1/chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /v1/chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl AiAnalyzer for HttpAnalyzer {
    fn analyze<'a>(
        &'a self,
        candidate: &'a Candidate,
    ) -> BoxFuture<'a, Result<AiAnalysis, AnalysisError>> {
        Box::pin(async move {
            let url = format!("{}/v1/chat/completions", self.base_url);
            let prompt = build_dispute_prompt(candidate);
            let body = ChatRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage {
                        role: "system",
                        content: DISPUTE_SYSTEM_PROMPT,
                    },
                    ChatMessage {
                        role: "user",
                        content: &prompt,
                    },
                ],
                temperature: 0.0,
            };

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    if e.is_connect() {
                        AnalysisError::Connection(self.base_url.clone())
                    } else if e.is_timeout() {
                        AnalysisError::HttpClient(format!(
                            "request timed out after {}s",
                            self.timeout_secs
                        ))
                    } else {
                        AnalysisError::HttpClient(e.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AnalysisError::Provider {
                    status: status.as_u16(),
                    body,
                });
            }

            let parsed: ChatResponse = response
                .json()
                .await
                .map_err(|e| AnalysisError::MalformedReply(e.to_string()))?;

            let content = parsed
                .choices
                .first()
                .map(|c| c.message.content.as_str())
                .ok_or_else(|| {
                    AnalysisError::MalformedReply("reply contains no choices".to_string())
                })?;

            parse_analysis_reply(content)
        })
    }
}

/// Mock analyzer for tests — returns a configured analysis or failure.
pub struct MockAnalyzer {
    outcome: Result<AiAnalysis, String>,
}

impl MockAnalyzer {
    pub fn returning(analysis: AiAnalysis) -> Self {
        Self {
            outcome: Ok(analysis),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

impl AiAnalyzer for MockAnalyzer {
    fn analyze<'a>(
        &'a self,
        _candidate: &'a Candidate,
    ) -> BoxFuture<'a, Result<AiAnalysis, AnalysisError>> {
        Box::pin(async move {
            self.outcome
                .clone()
                .map_err(AnalysisError::HttpClient)
        })
    }
}
