//! Speech recognizer boundary — diarized recognition of one segment.
//!
//! The service consumes a mono 16 kHz WAV segment and returns recognized
//! words in temporal order, each attributed to a speaker. Calls are
//! long-running; each is bounded by a configured timeout. One call is a pure
//! function of its segment — no state is shared between segment calls.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use minutes_core::text::truncate_with_suffix;

use crate::types::{ChunkResult, RecognitionError, WordEvent};

/// Longest service error body kept in a [`RecognitionError::Service`].
const MAX_ERROR_BODY: usize = 512;

/// A diarizing speech recognition backend.
///
/// Implemented by [`HttpRecognizer`] in production and by scripted fakes in
/// pipeline tests.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognize one mono 16 kHz WAV segment.
    ///
    /// `num_speakers` is a diarization hint. An `Ok` result may be empty
    /// (no speech detected in the segment).
    async fn recognize(
        &self,
        segment_wav: Vec<u8>,
        num_speakers: u32,
    ) -> Result<ChunkResult, RecognitionError>;
}

/// Configuration for [`HttpRecognizer`].
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Base URL of the recognition service.
    pub base_url: String,
    /// Upper bound on one segment's call.
    pub timeout: Duration,
}

/// HTTP client for a diarizing recognition service.
///
/// POSTs the segment as multipart to `{base_url}/recognize` and expects
/// `{"words": [{"text": ..., "speaker": ...}]}` back.
pub struct HttpRecognizer {
    config: RecognizerConfig,
    client: reqwest::Client,
}

/// One word in the service's response payload.
#[derive(Debug, Deserialize)]
struct RecognizedWord {
    text: String,
    speaker: u32,
}

/// Service response payload.
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    words: Vec<RecognizedWord>,
}

impl HttpRecognizer {
    /// Create a new recognizer client.
    #[must_use]
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new recognizer client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: RecognizerConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    async fn recognize_inner(
        &self,
        segment_wav: Vec<u8>,
        num_speakers: u32,
    ) -> Result<ChunkResult, RecognitionError> {
        let part = reqwest::multipart::Part::bytes(segment_wav)
            .file_name("segment.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionError::Http(format!("build multipart: {e}")))?;
        let form = reqwest::multipart::Form::new()
            .part("audio", part)
            .text("numSpeakers", num_speakers.to_string());

        let response = self
            .client
            .post(format!("{}/recognize", self.config.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RecognitionError::Service {
                status,
                body: truncate_with_suffix(&body, MAX_ERROR_BODY, "..."),
            });
        }

        let payload: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::Malformed(e.to_string()))?;

        debug!(words = payload.words.len(), "segment recognized");
        Ok(payload
            .words
            .into_iter()
            .map(|w| WordEvent::new(w.text, w.speaker))
            .collect())
    }
}

#[async_trait]
impl Recognizer for HttpRecognizer {
    #[instrument(skip(self, segment_wav), fields(bytes = segment_wav.len()))]
    async fn recognize(
        &self,
        segment_wav: Vec<u8>,
        num_speakers: u32,
    ) -> Result<ChunkResult, RecognitionError> {
        let timeout = self.config.timeout;
        tokio::time::timeout(timeout, self.recognize_inner(segment_wav, num_speakers))
            .await
            .map_err(|_| RecognitionError::Timeout {
                seconds: timeout.as_secs(),
            })?
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
