//! # minutes-summarize
//!
//! Summarizer boundary: windowed summarization of meeting transcripts and
//! structured key/action point extraction, with a defined fallback when the
//! model's structured output does not parse.
//!
//! ## Crate Position
//!
//! Depends on minutes-core. Depended on by: minutes-server.

#![deny(unsafe_code)]

pub mod client;
pub mod extract;
pub mod types;

pub use client::{SummarizerClient, SummarizerConfig};
pub use extract::parse_structured;
pub use types::{MeetingSummary, SummarizationError};
