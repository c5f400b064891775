//! Structured-output parsing with a defined fallback.
//!
//! The extraction pass asks the summarization model for JSON. Models are
//! unreliable JSON emitters: output may be valid, wrapped in prose, or not
//! JSON at all. Parsing never fails — the worst case degrades to the raw
//! combined summary with empty key/action point lists.

use serde::Deserialize;
use tracing::debug;

use crate::types::MeetingSummary;

/// Shape the extraction prompt asks for.
#[derive(Debug, Deserialize)]
struct StructuredOutput {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    key_points: Vec<String>,
    #[serde(default)]
    action_points: Vec<String>,
}

/// Parse a model's structured-extraction output.
///
/// Tries the whole text as JSON, then the first `{`..last `}` substring
/// (models often wrap JSON in prose). On any failure, returns
/// `fallback_summary` with empty lists. A parsed object with an empty
/// `summary` field also falls back to `fallback_summary` for the prose.
pub fn parse_structured(raw: &str, fallback_summary: &str) -> MeetingSummary {
    let parsed = try_parse(raw.trim()).or_else(|| {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if start < end {
            try_parse(&raw[start..=end])
        } else {
            None
        }
    });

    match parsed {
        Some(out) => MeetingSummary {
            summary: if out.summary.trim().is_empty() {
                fallback_summary.to_string()
            } else {
                out.summary
            },
            key_points: out.key_points,
            action_points: out.action_points,
        },
        None => {
            debug!("structured output unparseable, falling back to raw summary");
            MeetingSummary::prose_only(fallback_summary)
        }
    }
}

fn try_parse(candidate: &str) -> Option<StructuredOutput> {
    serde_json::from_str(candidate).ok()
}

/// Build the extraction prompt for a combined summary.
pub fn extraction_prompt(combined_summary: &str) -> String {
    format!(
        "Extract key points and action items from the following meeting summary.\n\
         Return JSON in this format:\n\
         {{\"summary\": \"...\", \"key_points\": [...], \"action_points\": [...]}}\n\
         Meeting summary: {combined_summary}"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
