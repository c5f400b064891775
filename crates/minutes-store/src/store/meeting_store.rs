//! High-level `MeetingStore` API over the connection pool.

use tracing::{debug, instrument};

use minutes_core::ids::MeetingId;

use crate::errors::Result;
use crate::sqlite::connection::{ConnectionPool, PooledConnection};
use crate::sqlite::repositories::meeting::{CreateMeetingOptions, MeetingRepo};
use crate::sqlite::row_types::{MeetingListRow, MeetingRow};

/// Meeting store wrapping a connection pool and the meeting repository.
pub struct MeetingStore {
    pool: ConnectionPool,
}

impl MeetingStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Persist a processed meeting.
    #[instrument(skip(self, opts), fields(filename = opts.filename))]
    pub fn create_meeting(&self, opts: &CreateMeetingOptions<'_>) -> Result<MeetingRow> {
        let conn = self.conn()?;
        let row = MeetingRepo::create(&conn, opts)?;
        debug!(meeting_id = %row.id, "meeting stored");
        Ok(row)
    }

    /// Get a meeting by id.
    pub fn get_meeting(&self, id: &MeetingId) -> Result<Option<MeetingRow>> {
        let conn = self.conn()?;
        MeetingRepo::get_by_id(&conn, id)
    }

    /// List all meetings, most recent first.
    pub fn list_meetings(&self) -> Result<Vec<MeetingListRow>> {
        let conn = self.conn()?;
        MeetingRepo::list(&conn)
    }

    /// Count stored meetings.
    pub fn count_meetings(&self) -> Result<i64> {
        let conn = self.conn()?;
        MeetingRepo::count(&conn)
    }

    /// Delete a meeting. Returns `true` if it existed.
    pub fn delete_meeting(&self, id: &MeetingId) -> Result<bool> {
        let conn = self.conn()?;
        MeetingRepo::delete(&conn, id)
    }

    /// The raw connection pool, for migrations and custom queries.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::sqlite::connection::{self, ConnectionConfig};
    use crate::sqlite::migrations::run_migrations;

    fn setup() -> MeetingStore {
        let pool = connection::new_in_memory(&ConnectionConfig::default()).unwrap();
        {
            let conn = pool.get().unwrap();
            run_migrations(&conn).unwrap();
        }
        MeetingStore::new(pool)
    }

    fn sample_opts<'a>() -> CreateMeetingOptions<'a> {
        CreateMeetingOptions {
            filename: "retro.wav",
            transcript: "Speaker 1: last sprint went well",
            summary: "sprint retro",
            key_points: &[],
            action_points: &[],
            meeting_date: "2026-08-21",
            start_time: "2026-08-21T14:00:00Z",
            end_time: "2026-08-21T14:45:00Z",
        }
    }

    #[test]
    fn create_and_fetch() {
        let store = setup();
        let created = store.create_meeting(&sample_opts()).unwrap();
        let fetched = store.get_meeting(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn list_after_create() {
        let store = setup();
        store.create_meeting(&sample_opts()).unwrap();
        store.create_meeting(&sample_opts()).unwrap();
        assert_eq!(store.list_meetings().unwrap().len(), 2);
        assert_eq!(store.count_meetings().unwrap(), 2);
    }

    #[test]
    fn missing_meeting_is_none() {
        let store = setup();
        assert!(store.get_meeting(&MeetingId::generate()).unwrap().is_none());
    }

    #[test]
    fn delete_meeting() {
        let store = setup();
        let created = store.create_meeting(&sample_opts()).unwrap();
        assert!(store.delete_meeting(&created.id).unwrap());
        assert!(store.get_meeting(&created.id).unwrap().is_none());
    }
}
