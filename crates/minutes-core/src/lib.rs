//! # minutes-core
//!
//! Foundation types and utilities for the minutes service.
//!
//! This crate provides the shared vocabulary the other minutes crates
//! depend on:
//!
//! - **Branded IDs**: [`ids::MeetingId`] as a newtype over a prefixed UUIDv7
//! - **Logging**: [`logging::init_tracing`] env-filter subscriber setup
//! - **Metrics**: [`metrics`] name constants shared by every emitting crate
//! - **Text**: [`text::truncate_str`] UTF-8-safe truncation for log previews
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other minutes crates.

#![deny(unsafe_code)]

pub mod ids;
pub mod logging;
pub mod metrics;
pub mod text;
