//! Wire response types.
//!
//! Key and action points are stored as-is (possibly empty) and the
//! placeholder texts are applied here, at the serialization boundary, so
//! every endpoint renders them consistently.

use serde::Serialize;

use minutes_store::{MeetingListRow, MeetingRow};

/// Placeholder shown when no key points were extracted.
pub const NO_KEY_POINTS: &str = "No key points mentioned.";
/// Placeholder shown when no action points were extracted.
pub const NO_ACTION_POINTS: &str = "No action points mentioned.";

/// Full meeting record as returned by upload and get-by-id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResponse {
    /// Meeting id.
    pub id: String,
    /// Original upload filename.
    pub filename: String,
    /// Speaker-attributed transcript.
    pub transcript: String,
    /// Prose summary.
    pub summary: String,
    /// Key points, or the placeholder when none were extracted.
    pub key_points: Vec<String>,
    /// Action points, or the placeholder when none were extracted.
    pub action_points: Vec<String>,
    /// Meeting date (`YYYY-MM-DD`).
    pub meeting_date: String,
    /// Meeting start time (RFC 3339).
    pub start_time: String,
    /// Meeting end time (RFC 3339).
    pub end_time: String,
}

impl From<MeetingRow> for MeetingResponse {
    fn from(row: MeetingRow) -> Self {
        Self {
            id: row.id.into(),
            filename: row.filename,
            transcript: row.transcript,
            summary: row.summary,
            key_points: or_placeholder(row.key_points, NO_KEY_POINTS),
            action_points: or_placeholder(row.action_points, NO_ACTION_POINTS),
            meeting_date: row.meeting_date,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

/// Listing entry: metadata without the transcript body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListEntry {
    /// Meeting id.
    pub id: String,
    /// Original upload filename.
    pub filename: String,
    /// Prose summary.
    pub summary: String,
    /// Meeting date (`YYYY-MM-DD`).
    pub meeting_date: String,
    /// Meeting start time (RFC 3339).
    pub start_time: String,
    /// Meeting end time (RFC 3339).
    pub end_time: String,
}

impl From<MeetingListRow> for MeetingListEntry {
    fn from(row: MeetingListRow) -> Self {
        Self {
            id: row.id.into(),
            filename: row.filename,
            summary: row.summary,
            meeting_date: row.meeting_date,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

fn or_placeholder(points: Vec<String>, placeholder: &str) -> Vec<String> {
    if points.is_empty() {
        vec![placeholder.to_string()]
    } else {
        points
    }
}
