//! HTTP client for the summarization service.
//!
//! Long transcripts are split into bounded character windows, each window
//! summarized separately, and the per-window summaries combined. A second
//! pass asks the same service to extract structured key/action points from
//! the combined summary; its output is parsed tolerantly (see
//! [`crate::extract`]).

use std::time::Duration;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use minutes_core::metrics::SUMMARIZER_REQUESTS_TOTAL;
use minutes_core::text::{char_windows, truncate_with_suffix};

use crate::extract::{extraction_prompt, parse_structured};
use crate::types::{MeetingSummary, SummarizationError};

/// Longest service error body kept in a [`SummarizationError::Service`].
const MAX_ERROR_BODY: usize = 512;

/// Configuration for [`SummarizerClient`].
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Base URL of the summarization service.
    pub base_url: String,
    /// Model identifier passed through to the service.
    pub model: String,
    /// Transcript window size in bytes per call.
    pub window_chars: usize,
    /// Minimum summary length requested per window.
    pub min_length: u32,
    /// Maximum summary length requested per window.
    pub max_length: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Request payload for one summarization call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeRequest<'a> {
    text: &'a str,
    model: &'a str,
    min_length: u32,
    max_length: u32,
}

/// Response payload for one summarization call.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Client for a summarization HTTP service.
pub struct SummarizerClient {
    config: SummarizerConfig,
    client: reqwest::Client,
}

impl SummarizerClient {
    /// Create a new summarizer client.
    #[must_use]
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new summarizer client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: SummarizerConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Summarize one piece of text via `POST {base_url}/summarize`.
    async fn summarize_text(&self, text: &str) -> Result<String, SummarizationError> {
        counter!(SUMMARIZER_REQUESTS_TOTAL).increment(1);

        let request = SummarizeRequest {
            text,
            model: &self.config.model,
            min_length: self.config.min_length,
            max_length: self.config.max_length,
        };

        let response = self
            .client
            .post(format!("{}/summarize", self.config.base_url))
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizationError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizationError::Service {
                status,
                body: truncate_with_suffix(&body, MAX_ERROR_BODY, "..."),
            });
        }

        let payload: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizationError::Malformed(e.to_string()))?;
        Ok(payload.summary)
    }

    /// Summarize a full meeting transcript into prose plus key/action points.
    ///
    /// An empty transcript short-circuits to an empty summary without
    /// touching the service. A failing extraction pass degrades to the
    /// combined prose summary with empty lists; only failures of the
    /// primary window summarization surface as errors.
    #[instrument(skip(self, transcript), fields(transcript_bytes = transcript.len()))]
    pub async fn summarize_meeting(
        &self,
        transcript: &str,
    ) -> Result<MeetingSummary, SummarizationError> {
        if transcript.trim().is_empty() {
            debug!("empty transcript, skipping summarization");
            return Ok(MeetingSummary::default());
        }

        let windows = char_windows(transcript, self.config.window_chars);
        debug!(windows = windows.len(), "summarizing transcript windows");

        let mut summaries = Vec::with_capacity(windows.len());
        for window in windows {
            summaries.push(self.summarize_text(window).await?);
        }
        let combined = summaries.join(" ");

        match self.summarize_text(&extraction_prompt(&combined)).await {
            Ok(raw) => Ok(parse_structured(&raw, &combined)),
            Err(e) => {
                warn!(error = %e, "extraction pass failed, keeping prose summary");
                Ok(MeetingSummary::prose_only(combined))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, window_chars: usize) -> SummarizerClient {
        SummarizerClient::new(SummarizerConfig {
            base_url: server.uri(),
            model: "facebook/bart-large-cnn".into(),
            window_chars,
            min_length: 50,
            max_length: 200,
            timeout: Duration::from_secs(5),
        })
    }

    #[tokio::test]
    async fn empty_transcript_skips_service() {
        let server = MockServer::start().await;
        // No mocks mounted: any request would 404 and error out.
        let out = client_for(&server, 2000)
            .summarize_meeting("   ")
            .await
            .unwrap();
        assert_eq!(out, MeetingSummary::default());
    }

    #[tokio::test]
    async fn single_window_with_structured_extraction() {
        let server = MockServer::start().await;
        // Extraction pass is distinguished by its prompt prefix.
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "summary": r#"{"summary": "planning sync", "key_points": ["roadmap"], "action_points": ["send notes"]}"#
            })))
            .mount(&server)
            .await;

        let out = client_for(&server, 2000)
            .summarize_meeting("Speaker 1: let's plan the roadmap")
            .await
            .unwrap();

        assert_eq!(out.summary, "planning sync");
        assert_eq!(out.key_points, vec!["roadmap"]);
        assert_eq!(out.action_points, vec!["send notes"]);
    }

    #[tokio::test]
    async fn long_transcript_is_windowed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"summary": "part"})),
            )
            .expect(4) // 3 windows + 1 extraction pass
            .mount(&server)
            .await;

        let transcript = "x".repeat(250); // 3 windows at 100 bytes
        let out = client_for(&server, 100)
            .summarize_meeting(&transcript)
            .await
            .unwrap();

        // Extraction output "part" is not JSON → fallback to combined prose.
        assert_eq!(out.summary, "part part part");
        assert!(out.key_points.is_empty());
    }

    #[tokio::test]
    async fn unparseable_extraction_falls_back_to_prose() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"summary": "just prose, no JSON"})),
            )
            .mount(&server)
            .await;

        let out = client_for(&server, 2000)
            .summarize_meeting("Speaker 1: hello")
            .await
            .unwrap();

        assert_eq!(out.summary, "just prose, no JSON");
        assert!(out.key_points.is_empty());
        assert!(out.action_points.is_empty());
    }

    #[tokio::test]
    async fn window_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let err = client_for(&server, 2000)
            .summarize_meeting("Speaker 1: hello")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::Service { status: 500, .. }));
    }

    #[tokio::test]
    async fn request_carries_model_and_lengths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_partial_json(serde_json::json!({
                "model": "facebook/bart-large-cnn",
                "minLength": 50,
                "maxLength": 200,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"summary": "ok"})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let _ = client_for(&server, 2000)
            .summarize_meeting("Speaker 1: hi")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn malformed_summary_payload_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server, 2000)
            .summarize_meeting("Speaker 1: hi")
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::Malformed(_)));
    }
}
