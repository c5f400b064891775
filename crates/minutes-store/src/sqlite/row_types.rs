//! Row structs mirroring the `SQLite` schema.
//!
//! Key and action points are stored as newline-joined TEXT columns and
//! split back into lists at the row boundary, so callers only ever see
//! `Vec<String>`.

use serde::{Deserialize, Serialize};

use minutes_core::ids::MeetingId;

/// One row of the `meetings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRow {
    /// Meeting id (`mtg_` prefixed).
    pub id: MeetingId,
    /// Original upload filename.
    pub filename: String,
    /// Full speaker-attributed transcript.
    pub transcript: String,
    /// Prose summary.
    pub summary: String,
    /// Key points, in order.
    pub key_points: Vec<String>,
    /// Action points, in order.
    pub action_points: Vec<String>,
    /// Meeting date (`YYYY-MM-DD`).
    pub meeting_date: String,
    /// Meeting start time (RFC 3339).
    pub start_time: String,
    /// Meeting end time (RFC 3339).
    pub end_time: String,
    /// Row creation time (RFC 3339).
    pub created_at: String,
}

/// Listing row: meeting metadata without the transcript body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingListRow {
    /// Meeting id (`mtg_` prefixed).
    pub id: MeetingId,
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

/// Join points into the stored TEXT form.
pub(crate) fn join_points(points: &[String]) -> String {
    points.join("\n")
}

/// Split a stored TEXT column back into points. Empty text yields no points.
pub(crate) fn split_points(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.lines().map(String::from).collect()
    }
}
