//! Shared server state.

use std::sync::Arc;

use minutes_settings::MinutesSettings;
use minutes_store::MeetingStore;
use minutes_summarize::SummarizerClient;
use minutes_transcribe::Recognizer;

/// State shared across all request handlers.
pub struct AppState {
    /// Meeting persistence.
    pub store: MeetingStore,
    /// Diarizing speech recognizer.
    pub recognizer: Arc<dyn Recognizer>,
    /// Summarization client.
    pub summarizer: SummarizerClient,
    /// Resolved settings snapshot.
    pub settings: Arc<MinutesSettings>,
}
