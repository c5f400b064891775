//! `SQLite` connection pooling.
//!
//! WAL journal mode with a busy timeout so concurrent upload handlers can
//! write without immediately failing on lock contention.

use std::path::Path;
use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::Result;

/// Pooled `SQLite` connection manager type.
pub type ConnectionPool = r2d2::Pool<SqliteConnectionManager>;
/// A single checked-out pooled connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Pool construction knobs.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Maximum pooled connections.
    pub max_size: u32,
    /// How long `pool.get()` waits before giving up.
    pub connection_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_size: 8,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

fn init_pragmas(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
}

/// Open a pool backed by a database file, creating it if missing.
pub fn new_file(path: &Path, config: &ConnectionConfig) -> Result<ConnectionPool> {
    let manager = SqliteConnectionManager::file(path).with_init(init_pragmas);
    build(manager, config)
}

/// Open a pool backed by a shared in-memory database.
///
/// The shared-cache URI keeps all pooled connections on one database;
/// plain `:memory:` would give each connection its own empty database.
pub fn new_in_memory(config: &ConnectionConfig) -> Result<ConnectionPool> {
    let uri = format!("file:minutes_mem_{}?mode=memory&cache=shared", uuid::Uuid::now_v7());
    let manager = SqliteConnectionManager::file(uri)
        .with_flags(
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )
        .with_init(init_pragmas);
    build(manager, config)
}

fn build(manager: SqliteConnectionManager, config: &ConnectionConfig) -> Result<ConnectionPool> {
    let pool = r2d2::Pool::builder()
        .max_size(config.max_size)
        .connection_timeout(config.connection_timeout)
        .build(manager)?;
    Ok(pool)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_pool_shares_one_database() {
        let pool = new_in_memory(&ConnectionConfig::default()).unwrap();
        {
            let conn = pool.get().unwrap();
            conn.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
            conn.execute("INSERT INTO t (x) VALUES (1)", []).unwrap();
        }
        let conn = pool.get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn separate_in_memory_pools_are_isolated() {
        let pool_a = new_in_memory(&ConnectionConfig::default()).unwrap();
        let pool_b = new_in_memory(&ConnectionConfig::default()).unwrap();
        pool_a
            .get()
            .unwrap()
            .execute_batch("CREATE TABLE only_in_a (x INTEGER)")
            .unwrap();
        let result: rusqlite::Result<i64> = pool_b.get().unwrap().query_row(
            "SELECT COUNT(*) FROM only_in_a",
            [],
            |row| row.get(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn file_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meetings.db");
        let pool = new_file(&path, &ConnectionConfig::default()).unwrap();
        pool.get()
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER)")
            .unwrap();
        assert!(path.exists());
    }
}
