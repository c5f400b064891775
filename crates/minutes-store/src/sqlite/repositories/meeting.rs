//! Meeting repository. CRUD for the `meetings` table.

use rusqlite::{Connection, OptionalExtension, params};

use minutes_core::ids::MeetingId;

use crate::errors::Result;
use crate::sqlite::row_types::{MeetingListRow, MeetingRow, join_points, split_points};

/// Options for inserting a new meeting.
pub struct CreateMeetingOptions<'a> {
    /// Original upload filename.
    pub filename: &'a str,
    /// Full speaker-attributed transcript.
    pub transcript: &'a str,
    /// Prose summary.
    pub summary: &'a str,
    /// Key points, in order.
    pub key_points: &'a [String],
    /// Action points, in order.
    pub action_points: &'a [String],
    /// Meeting date (`YYYY-MM-DD`).
    pub meeting_date: &'a str,
    /// Meeting start time (RFC 3339).
    pub start_time: &'a str,
    /// Meeting end time (RFC 3339).
    pub end_time: &'a str,
}

/// Meeting repository, stateless. Every method takes `&Connection`.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a new meeting and return the stored row.
    pub fn create(conn: &Connection, opts: &CreateMeetingOptions<'_>) -> Result<MeetingRow> {
        let id = MeetingId::generate();
        let created_at = chrono::Utc::now().to_rfc3339();
        let _ = conn.execute(
            "INSERT INTO meetings
                (id, filename, transcript, summary, key_points, action_points,
                 meeting_date, start_time, end_time, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                id,
                opts.filename,
                opts.transcript,
                opts.summary,
                join_points(opts.key_points),
                join_points(opts.action_points),
                opts.meeting_date,
                opts.start_time,
                opts.end_time,
                created_at,
            ],
        )?;
        Ok(MeetingRow {
            id,
            filename: opts.filename.to_string(),
            transcript: opts.transcript.to_string(),
            summary: opts.summary.to_string(),
            key_points: opts.key_points.to_vec(),
            action_points: opts.action_points.to_vec(),
            meeting_date: opts.meeting_date.to_string(),
            start_time: opts.start_time.to_string(),
            end_time: opts.end_time.to_string(),
            created_at,
        })
    }

    /// Get a meeting by id.
    pub fn get_by_id(conn: &Connection, id: &MeetingId) -> Result<Option<MeetingRow>> {
        let row = conn
            .query_row(
                "SELECT id, filename, transcript, summary, key_points, action_points,
                        meeting_date, start_time, end_time, created_at
                 FROM meetings WHERE id = ?1",
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List all meetings, most recent first.
    pub fn list(conn: &Connection) -> Result<Vec<MeetingListRow>> {
        let mut stmt = conn.prepare(
            "SELECT id, filename, summary, meeting_date, start_time, end_time
             FROM meetings
             ORDER BY meeting_date DESC, start_time DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MeetingListRow {
                    id: row.get(0)?,
                    filename: row.get(1)?,
                    summary: row.get(2)?,
                    meeting_date: row.get(3)?,
                    start_time: row.get(4)?,
                    end_time: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Count total meetings.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM meetings", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Check if a meeting exists.
    pub fn exists(conn: &Connection, id: &MeetingId) -> Result<bool> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM meetings WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Delete a meeting. Returns `true` if a row was deleted.
    pub fn delete(conn: &Connection, id: &MeetingId) -> Result<bool> {
        let changed = conn.execute("DELETE FROM meetings WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MeetingRow> {
        let key_points: String = row.get(4)?;
        let action_points: String = row.get(5)?;
        Ok(MeetingRow {
            id: row.get(0)?,
            filename: row.get(1)?,
            transcript: row.get(2)?,
            summary: row.get(3)?,
            key_points: split_points(&key_points),
            action_points: split_points(&action_points),
            meeting_date: row.get(6)?,
            start_time: row.get(7)?,
            end_time: row.get(8)?,
            created_at: row.get(9)?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
