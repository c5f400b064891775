//! Transcript merging — per-chunk word/speaker streams into one
//! speaker-attributed transcript.
//!
//! The merger treats the concatenation of all chunks' word events as one
//! continuous stream: a chunk boundary never forces a line break on its own,
//! and an empty chunk contributes nothing.
//!
//! Caveat: recognizers assign speaker IDs independently per chunk-level
//! call, so "speaker 1" in chunk N is not guaranteed to be the same person
//! as "speaker 1" in chunk N+1. The merger assumes ID continuity across
//! seams anyway; reconciling speakers across chunks would require a separate
//! voice-matching step this crate does not attempt.

use serde::{Deserialize, Serialize};

use crate::types::{ChunkResult, TranscriptLine, WordEvent};

/// Ordered speaker-attributed transcript. Immutable once produced.
///
/// Invariant: no two consecutive lines share a `speaker_id` — each line is
/// a maximal run of same-speaker words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    /// The transcript's lines, in order.
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Whether no speech was recognized at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render as `"Speaker <id>: <text>"` lines joined by newlines.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("Speaker {}: {}", line.speaker_id, line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Merge ordered per-chunk word events into a [`Transcript`].
///
/// Runs a single pass over all words: a buffer accumulates the current
/// speaker's run and is flushed to a line whenever the speaker changes and
/// once at end of input. Deterministic for a given input; empty input (or
/// all-empty chunks) yields an empty transcript; a trailing run is never
/// dropped.
///
/// Input MUST be in original chunk order — callers that recognize chunks
/// concurrently are responsible for gathering results back into sequence
/// first.
pub fn merge_chunks(chunks: &[ChunkResult]) -> Transcript {
    let mut lines = Vec::new();
    let mut current_speaker: Option<u32> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for word in chunks.iter().flatten() {
        match current_speaker {
            Some(speaker) if speaker == word.speaker_id => {
                buffer.push(&word.text);
            }
            Some(speaker) => {
                lines.push(TranscriptLine {
                    speaker_id: speaker,
                    text: buffer.join(" "),
                });
                buffer.clear();
                buffer.push(&word.text);
                current_speaker = Some(word.speaker_id);
            }
            None => {
                current_speaker = Some(word.speaker_id);
                buffer.push(&word.text);
            }
        }
    }

    if let Some(speaker) = current_speaker {
        lines.push(TranscriptLine {
            speaker_id: speaker,
            text: buffer.join(" "),
        });
    }

    Transcript { lines }
}

/// Merge a flat word stream (single chunk convenience, used by tests).
pub fn merge_words(words: &[WordEvent]) -> Transcript {
    merge_chunks(std::slice::from_ref(&words.to_vec()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
