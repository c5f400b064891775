//! # minutes-store
//!
//! Meeting persistence on `SQLite`: pooled connections, versioned
//! migrations, a stateless repository layer, and the [`MeetingStore`]
//! facade the server talks to.
//!
//! ## Crate Position
//!
//! Depends on minutes-core. Depended on by: minutes-server.

#![deny(unsafe_code)]

pub mod errors;
pub mod sqlite;
pub mod store;

pub use errors::{PersistenceError, Result};
pub use sqlite::connection::{ConnectionConfig, ConnectionPool, PooledConnection};
pub use sqlite::migrations::run_migrations;
pub use sqlite::repositories::meeting::{CreateMeetingOptions, MeetingRepo};
pub use sqlite::row_types::{MeetingListRow, MeetingRow};
pub use store::MeetingStore;
