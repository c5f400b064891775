//! High-level store API.

pub mod meeting_store;

pub use meeting_store::MeetingStore;
