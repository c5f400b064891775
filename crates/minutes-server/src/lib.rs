//! # minutes-server
//!
//! Axum HTTP surface: audio upload (full transcription + summarization
//! pipeline), meeting retrieval, health, and Prometheus metrics.
//!
//! ## Crate Position
//!
//! Depends on minutes-core, minutes-settings, minutes-transcribe,
//! minutes-summarize, minutes-store. Depended on by: minutes-api.

#![deny(unsafe_code)]

pub mod errors;
pub mod metrics;
pub mod responses;
pub mod router;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use router::build_router;
pub use state::AppState;
