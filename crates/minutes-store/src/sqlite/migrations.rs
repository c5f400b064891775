//! Schema migrations.
//!
//! Versioned via `PRAGMA user_version`. Each migration runs once, in order,
//! inside a transaction.

use rusqlite::Connection;
use tracing::debug;

use crate::errors::Result;

const MIGRATIONS: &[&str] = &[
    // v1: meetings table
    "CREATE TABLE meetings (
        id            TEXT PRIMARY KEY,
        filename      TEXT NOT NULL,
        transcript    TEXT NOT NULL,
        summary       TEXT NOT NULL,
        key_points    TEXT NOT NULL DEFAULT '',
        action_points TEXT NOT NULL DEFAULT '',
        meeting_date  TEXT NOT NULL,
        start_time    TEXT NOT NULL,
        end_time      TEXT NOT NULL,
        created_at    TEXT NOT NULL
     );
     CREATE INDEX idx_meetings_date ON meetings (meeting_date DESC, start_time DESC);",
];

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    for (idx, sql) in MIGRATIONS.iter().enumerate() {
        let version = (idx + 1) as i64;
        if version <= current {
            continue;
        }
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        let _ = tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;
        debug!(version, "applied migration");
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;

    fn version(conn: &Connection) -> i64 {
        conn.query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn migrations_create_meetings_table() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'meetings'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(version(&conn), 1);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(version(&conn), 1);
    }
}
