//! Settings loading: file → deep merge over defaults → env overrides.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::MinutesSettings;

/// Path to the user settings file (`~/.minutes/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(format!("{home}/.minutes/settings.json"))
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
            PathBuf::from(home).join(rest)
        }
        None => PathBuf::from(path),
    }
}

/// Deep-merge JSON `overlay` into `base`.
///
/// Objects merge recursively; any other value in `overlay` (including
/// `null` and arrays) replaces the corresponding `base` value wholesale.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Load settings from the default path with env overrides applied.
pub fn load_settings() -> Result<MinutesSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific file path.
///
/// A missing file is not an error — defaults are used. A present but
/// unreadable or malformed file is an error so typos do not silently
/// revert the service to defaults.
pub fn load_settings_from_path(path: &Path) -> Result<MinutesSettings> {
    let defaults = serde_json::to_value(MinutesSettings::default())?;

    let merged = if path.exists() {
        let raw = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&raw)?;
        debug!(?path, "loaded user settings file");
        deep_merge(defaults, user)
    } else {
        debug!(?path, "no settings file, using defaults");
        defaults
    };

    let mut settings: MinutesSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    settings.validate();
    Ok(settings)
}

/// Apply `MINUTES_*` environment variable overrides (highest priority).
fn apply_env_overrides(settings: &mut MinutesSettings) {
    if let Ok(port) = std::env::var("MINUTES_PORT") {
        match port.parse() {
            Ok(p) => settings.server.port = p,
            Err(_) => tracing::warn!("MINUTES_PORT is not a valid port: {port}"),
        }
    }
    if let Ok(path) = std::env::var("MINUTES_DB_PATH") {
        settings.database.path = path;
    }
    if let Ok(url) = std::env::var("MINUTES_RECOGNIZER_URL") {
        settings.recognizer.base_url = url;
    }
    if let Ok(url) = std::env::var("MINUTES_SUMMARIZER_URL") {
        settings.summarizer.base_url = url;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
