//! Persistence error types.

/// Errors from the meeting store.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Underlying `SQLite` error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error (exhausted, database unreachable).
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// No meeting with the given id.
    #[error("meeting not found: {0}")]
    MeetingNotFound(String),

    /// Internal invariant violation.
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Convenience result alias for store operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
