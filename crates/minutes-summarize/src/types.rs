//! Summary types and errors.

use serde::{Deserialize, Serialize};

/// Structured meeting summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    /// Prose summary of the whole meeting.
    pub summary: String,
    /// Extracted key points, in order. May be empty.
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Extracted action points, in order. May be empty.
    #[serde(default)]
    pub action_points: Vec<String>,
}

impl MeetingSummary {
    /// A summary with prose only — the defined fallback when structured
    /// extraction produces unparseable output.
    pub fn prose_only(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            key_points: Vec::new(),
            action_points: Vec::new(),
        }
    }
}

/// Errors from the summarization service.
///
/// Unparseable *structured* output is not an error — it falls back to
/// [`MeetingSummary::prose_only`]. These variants cover the service itself
/// failing.
#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    /// Transport-level failure (connect, timeout).
    #[error("summarizer request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("summarizer returned {status}: {body}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Response body (possibly truncated).
        body: String,
    },

    /// The service answered 200 but the summary payload did not parse.
    #[error("malformed summarizer response: {0}")]
    Malformed(String),
}
