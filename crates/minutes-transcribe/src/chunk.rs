//! Chunking — split a normalized waveform into bounded-duration segments.

use crate::audio::Waveform;

/// Split `waveform` into contiguous, non-overlapping segments of
/// `max_seconds` each; the final segment may be shorter.
///
/// Segments cover the full input with no gaps and preserve temporal order.
/// A zero-length input yields an empty sequence.
pub fn split(waveform: &Waveform, max_seconds: u32) -> Vec<Waveform> {
    let samples_per_chunk = (waveform.sample_rate as usize) * (max_seconds.max(1) as usize);
    waveform
        .samples
        .chunks(samples_per_chunk)
        .map(|samples| Waveform {
            samples: samples.to_vec(),
            sample_rate: waveform.sample_rate,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
