//! # minutes-settings
//!
//! Configuration management with layered sources for the minutes service.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`MinutesSettings::default()`]
//! 2. **User file** — `~/.minutes/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `MINUTES_*` overrides (highest priority)
//!
//! Loading happens once at startup; components receive explicit settings
//! values at construction, so there is no process-wide mutable state.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, expand_home, load_settings, load_settings_from_path, settings_path};
pub use types::*;
