//! # minutes-transcribe
//!
//! The transcription pipeline: audio normalization, chunking, diarized
//! recognition, and transcript merging.
//!
//! # Architecture
//!
//! ```text
//! audio bytes → symphonia decode → rubato resample to 16kHz mono f32
//! → chunker (bounded-duration segments, scratch WAV files)
//! → recognizer per segment (remote diarizing service, bounded concurrency)
//! → ordered gather → transcript merger → speaker-attributed Transcript
//! ```
//!
//! The merger is the load-bearing piece: it treats chunk boundaries as
//! transparent to speaker continuity and tolerates failed segments as gaps.
//!
//! ## Crate Position
//!
//! Depends on minutes-core. Depended on by: minutes-server.

#![deny(unsafe_code)]

pub mod audio;
pub mod chunk;
pub mod merge;
pub mod pipeline;
pub mod recognizer;
pub mod types;

pub use audio::{TARGET_SAMPLE_RATE, Waveform};
pub use merge::{Transcript, merge_chunks};
pub use pipeline::{PipelineConfig, TranscriptionOutcome};
pub use recognizer::{HttpRecognizer, Recognizer, RecognizerConfig};
pub use types::{
    ChunkResult, ConversionError, PipelineError, RecognitionError, TranscriptLine, WordEvent,
};
