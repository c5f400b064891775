//! Core data model and error types for the transcription pipeline.

use serde::{Deserialize, Serialize};

/// One recognized token with its speaker attribution.
///
/// Produced by the recognizer in temporal order within a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEvent {
    /// The recognized token text.
    pub text: String,
    /// Speaker identifier assigned by the recognizer for this chunk.
    pub speaker_id: u32,
}

impl WordEvent {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, speaker_id: u32) -> Self {
        Self {
            text: text.into(),
            speaker_id,
        }
    }
}

/// Ordered word events for one audio segment. May be empty — either no
/// speech was detected or the segment's recognition call failed and was
/// degraded to an empty result.
pub type ChunkResult = Vec<WordEvent>;

/// One contiguous run of words from a single speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Speaker identifier for this run.
    pub speaker_id: u32,
    /// Space-joined words of the run.
    pub text: String,
}

/// Errors from audio normalization (decode, downmix, resample, encode).
///
/// Always fatal to the request: if the input cannot be decoded there is
/// nothing to transcribe.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Input container/codec is unrecognized or the data is corrupt.
    #[error("audio decode error: {0}")]
    Decode(String),

    /// The input decoded to zero usable audio tracks.
    #[error("no audio track: {0}")]
    NoAudioTrack(String),

    /// Resampling to the canonical rate failed.
    #[error("resample error: {0}")]
    Resample(String),

    /// WAV encoding of a segment failed.
    #[error("wav encode error: {0}")]
    Encode(String),
}

/// Errors from one segment's recognition call.
///
/// Never fatal to the pipeline: the orchestration layer degrades a failed
/// segment to an empty [`ChunkResult`] and continues.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    /// The recognition call exceeded its upper time bound.
    #[error("recognition timed out after {seconds}s")]
    Timeout {
        /// Configured per-segment bound in seconds.
        seconds: u64,
    },

    /// Transport-level failure reaching the recognition service.
    #[error("recognition request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("recognition service returned {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// The service answered 200 but the payload did not parse.
    #[error("malformed recognition response: {0}")]
    Malformed(String),
}

/// Errors that abort the whole transcription pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Audio normalization failed — nothing to transcribe.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Temp segment file I/O failed.
    #[error("segment io error: {0}")]
    Io(#[from] std::io::Error),

    /// A spawned stage panicked or was cancelled.
    #[error("pipeline task failed: {0}")]
    Task(String),
}

/// Extension trait to reduce `.map_err()` boilerplate when wrapping errors
/// into [`ConversionError`] with context.
pub trait ResultExt<T> {
    /// Wrap the error as [`ConversionError::Decode`] with `context` prefix.
    fn decode(self, context: &str) -> Result<T, ConversionError>;
    /// Wrap the error as [`ConversionError::Resample`] with `context` prefix.
    fn resample(self, context: &str) -> Result<T, ConversionError>;
    /// Wrap the error as [`ConversionError::Encode`] with `context` prefix.
    fn encode(self, context: &str) -> Result<T, ConversionError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn decode(self, context: &str) -> Result<T, ConversionError> {
        self.map_err(|e| ConversionError::Decode(format!("{context}: {e}")))
    }
    fn resample(self, context: &str) -> Result<T, ConversionError> {
        self.map_err(|e| ConversionError::Resample(format!("{context}: {e}")))
    }
    fn encode(self, context: &str) -> Result<T, ConversionError> {
        self.map_err(|e| ConversionError::Encode(format!("{context}: {e}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
