//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` to match the JSON wire
//! format of `~/.minutes/settings.json`. Each type implements [`Default`]
//! with production default values, and `#[serde(default)]` allows partial
//! JSON — missing fields get their default during deserialization.

use serde::{Deserialize, Serialize};

/// Root settings type for the minutes service.
///
/// Loaded from `~/.minutes/settings.json` with defaults applied for missing
/// fields. `MINUTES_*` environment variables override specific values.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MinutesSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Speech recognizer boundary settings.
    pub recognizer: RecognizerSettings,
    /// Summarizer boundary settings.
    pub summarizer: SummarizerSettings,
    /// SQLite database settings.
    pub database: DatabaseSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for MinutesSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "minutes".to_string(),
            server: ServerSettings::default(),
            recognizer: RecognizerSettings::default(),
            summarizer: SummarizerSettings::default(),
            database: DatabaseSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl MinutesSettings {
    /// Correct invalid values in place rather than rejecting the file.
    ///
    /// Called automatically during loading. Out-of-range values are clamped
    /// with a warning so users get corrected behavior instead of a
    /// confusing startup error.
    pub fn validate(&mut self) {
        if self.recognizer.chunk_seconds == 0 {
            tracing::warn!("recognizer.chunkSeconds was 0, reset to default 30");
            self.recognizer.chunk_seconds = RecognizerSettings::default().chunk_seconds;
        }
        if self.recognizer.max_concurrency == 0 {
            tracing::warn!("recognizer.maxConcurrency was 0, reset to 1");
            self.recognizer.max_concurrency = 1;
        }
        if self.recognizer.default_num_speakers == 0 {
            tracing::warn!("recognizer.defaultNumSpeakers was 0, reset to 2");
            self.recognizer.default_num_speakers = 2;
        }
        if self.recognizer.timeout_seconds == 0 {
            tracing::warn!("recognizer.timeoutSeconds was 0, reset to default 600");
            self.recognizer.timeout_seconds = RecognizerSettings::default().timeout_seconds;
        }
        if self.summarizer.timeout_seconds == 0 {
            tracing::warn!("summarizer.timeoutSeconds was 0, reset to default 120");
            self.summarizer.timeout_seconds = SummarizerSettings::default().timeout_seconds;
        }
        if self.summarizer.window_chars == 0 {
            tracing::warn!("summarizer.windowChars was 0, reset to default 2000");
            self.summarizer.window_chars = SummarizerSettings::default().window_chars;
        }
    }
}

/// HTTP server settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Port the HTTP API listens on.
    pub port: u16,
    /// Bind address.
    pub host: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Speech recognizer boundary settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecognizerSettings {
    /// Base URL of the diarizing recognition service.
    pub base_url: String,
    /// Upper bound on one segment's recognition call, in seconds.
    pub timeout_seconds: u64,
    /// Segment duration the chunker produces, in seconds.
    pub chunk_seconds: u32,
    /// Speaker count hint forwarded when the upload does not specify one.
    pub default_num_speakers: u32,
    /// Maximum recognition calls in flight at once.
    pub max_concurrency: usize,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9090".to_string(),
            timeout_seconds: 600,
            chunk_seconds: 30,
            default_num_speakers: 2,
            max_concurrency: 1,
        }
    }
}

/// Summarizer boundary settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarizerSettings {
    /// Base URL of the summarization service.
    pub base_url: String,
    /// Model identifier passed through to the service.
    pub model: String,
    /// Transcript window size (bytes) per summarization call.
    pub window_chars: usize,
    /// Minimum summary length requested per window.
    pub min_length: u32,
    /// Maximum summary length requested per window.
    pub max_length: u32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9091".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            window_chars: 2000,
            min_length: 50,
            max_length: 200,
            timeout_seconds: 120,
        }
    }
}

/// SQLite database settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file. `~` expands to the home directory.
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "~/.minutes/minutes.db".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub directive: String,
    /// Emit JSON log lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directive: "info".to_string(),
            json: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
