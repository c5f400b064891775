//! Full transcription pipeline: normalize → chunk → recognize → merge.
//!
//! Recognition calls are independent, so they may run concurrently under a
//! bounded semaphore, but results are always gathered back into original
//! chunk order before the order-sensitive merge. A failed segment degrades
//! to an empty chunk (logged and counted) — a gap in the transcript, not a
//! failed request.
//!
//! Temp segment files live in a [`tempfile::TempDir`] scoped to one run:
//! the directory is removed when the run returns, on success and on every
//! error path alike.

use std::path::PathBuf;
use std::sync::Arc;

use metrics::counter;
use minutes_core::metrics::{PIPELINE_CHUNKS_TOTAL, RECOGNITION_FAILURES_TOTAL};
use tokio::sync::Semaphore;
use tracing::{info, instrument, warn};

use crate::audio::{self, Waveform};
use crate::chunk;
use crate::merge::{Transcript, merge_chunks};
use crate::recognizer::Recognizer;
use crate::types::{ChunkResult, PipelineError, RecognitionError};

/// Tuning for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Segment duration in seconds.
    pub chunk_seconds: u32,
    /// Diarization speaker-count hint.
    pub num_speakers: u32,
    /// Maximum recognition calls in flight.
    pub max_concurrency: usize,
    /// Directory to create the scratch dir in; system temp when `None`.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_seconds: 30,
            num_speakers: 2,
            max_concurrency: 1,
            scratch_dir: None,
        }
    }
}

/// Result of a pipeline run.
#[derive(Debug)]
pub struct TranscriptionOutcome {
    /// The merged speaker-attributed transcript.
    pub transcript: Transcript,
    /// Duration of the normalized audio in seconds.
    pub duration_seconds: f64,
    /// How many segments the audio was split into.
    pub chunk_count: usize,
    /// How many segments failed recognition and were degraded to empty.
    pub failed_chunks: usize,
}

/// Why one segment produced no words.
enum SegmentFailure {
    Recognition(RecognitionError),
    Io(std::io::Error),
}

impl std::fmt::Display for SegmentFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recognition(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "segment read: {e}"),
        }
    }
}

/// Run the full pipeline over raw uploaded audio.
///
/// `extension` is the container hint from the uploaded filename. Returns
/// [`PipelineError`] only for failures that leave nothing to transcribe
/// (undecodable audio, scratch-space I/O); per-segment recognition failures
/// degrade instead.
#[instrument(skip(audio_bytes, recognizer), fields(bytes = audio_bytes.len()))]
pub async fn run(
    audio_bytes: Vec<u8>,
    extension: Option<&str>,
    recognizer: Arc<dyn Recognizer>,
    config: &PipelineConfig,
) -> Result<TranscriptionOutcome, PipelineError> {
    // Decode + resample is CPU-bound; keep it off the async workers.
    let ext = extension.map(String::from);
    let waveform = tokio::task::spawn_blocking(move || {
        audio::normalize(audio_bytes, ext.as_deref())
    })
    .await
    .map_err(|e| PipelineError::Task(e.to_string()))??;

    let duration_seconds = waveform.duration_seconds();
    let segments = chunk::split(&waveform, config.chunk_seconds);
    let chunk_count = segments.len();
    info!(
        duration_seconds,
        chunk_count, "audio normalized and chunked"
    );
    counter!(PIPELINE_CHUNKS_TOTAL).increment(chunk_count as u64);

    // Scratch dir scoped to this run; dropped (removed) on every return path.
    let scratch = match &config.scratch_dir {
        Some(base) => tempfile::tempdir_in(base)?,
        None => tempfile::tempdir()?,
    };

    let segment_paths = write_segments(scratch.path(), &segments).await?;
    drop(segments);

    let ordered = recognize_all(
        &segment_paths,
        Arc::clone(&recognizer),
        config.num_speakers,
        config.max_concurrency,
    )
    .await;

    let failed_chunks = ordered.iter().filter(|r| r.is_none()).count();
    if failed_chunks > 0 {
        counter!(RECOGNITION_FAILURES_TOTAL).increment(failed_chunks as u64);
    }

    // Ordered gather: index i of `results` is chunk i. Failures become
    // empty chunks so the merge sees every position.
    let results: Vec<ChunkResult> = ordered
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();

    let transcript = merge_chunks(&results);
    info!(
        lines = transcript.lines().len(),
        failed_chunks, "transcript merged"
    );

    Ok(TranscriptionOutcome {
        transcript,
        duration_seconds,
        chunk_count,
        failed_chunks,
    })
}

/// Encode each segment as WAV and write it under the scratch dir.
async fn write_segments(
    scratch: &std::path::Path,
    segments: &[Waveform],
) -> Result<Vec<PathBuf>, PipelineError> {
    let mut paths = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let wav = audio::encode_wav(segment)?;
        let path = scratch.join(format!("chunk_{index}.wav"));
        tokio::fs::write(&path, wav).await?;
        paths.push(path);
    }
    Ok(paths)
}

/// Recognize every segment, bounded by a semaphore, preserving chunk order.
///
/// Returns one entry per segment, in original order: `Some(words)` on
/// success, `None` when the segment failed (already logged here).
async fn recognize_all(
    segment_paths: &[PathBuf],
    recognizer: Arc<dyn Recognizer>,
    num_speakers: u32,
    max_concurrency: usize,
) -> Vec<Option<ChunkResult>> {
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));

    let calls = segment_paths.iter().map(|path| {
        let recognizer = Arc::clone(&recognizer);
        let semaphore = Arc::clone(&semaphore);
        let path = path.clone();
        async move {
            // Closed-semaphore acquire cannot fail; we never close it.
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            let wav = tokio::fs::read(&path).await.map_err(SegmentFailure::Io)?;
            recognizer
                .recognize(wav, num_speakers)
                .await
                .map_err(SegmentFailure::Recognition)
        }
    });

    // join_all preserves input order, so index i is chunk i regardless of
    // completion order.
    futures::future::join_all(calls)
        .await
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(words) => Some(words),
            Err(failure) => {
                warn!(chunk = index, error = %failure, "segment degraded to empty result");
                None
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
