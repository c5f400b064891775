//! Branded ID newtypes.
//!
//! IDs are prefixed UUIDv7 strings (`mtg_0192f3a1-...`) so a raw string in a
//! log line or a database column is self-describing. The newtype keeps a
//! meeting ID from being confused with any other string at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix for meeting IDs.
const MEETING_PREFIX: &str = "mtg_";

/// Unique identifier for a stored meeting record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(String);

impl MeetingId {
    /// Generate a fresh ID (`mtg_` + UUIDv7, so IDs sort by creation time).
    pub fn generate() -> Self {
        Self(format!("{MEETING_PREFIX}{}", Uuid::now_v7()))
    }

    /// Wrap an existing ID string (e.g. read back from the database).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Whether the string carries the expected `mtg_` prefix.
    pub fn is_valid(s: &str) -> bool {
        s.strip_prefix(MEETING_PREFIX)
            .is_some_and(|rest| Uuid::parse_str(rest).is_ok())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MeetingId> for String {
    fn from(id: MeetingId) -> Self {
        id.0
    }
}

impl rusqlite::ToSql for MeetingId {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl rusqlite::types::FromSql for MeetingId {
    fn column_result(
        value: rusqlite::types::ValueRef<'_>,
    ) -> rusqlite::types::FromSqlResult<Self> {
        String::column_result(value).map(Self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
