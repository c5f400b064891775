//! `POST /upload` — full pipeline: normalize, chunk, recognize, merge,
//! summarize, persist.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use metrics::{counter, histogram};
use tracing::{info, instrument, warn};

use minutes_core::metrics::{MEETINGS_STORED_TOTAL, UPLOADS_TOTAL, UPLOAD_DURATION_SECONDS};
use minutes_store::CreateMeetingOptions;
use minutes_transcribe::{PipelineConfig, pipeline};

use crate::errors::ApiError;
use crate::responses::MeetingResponse;
use crate::state::AppState;

struct UploadFields {
    filename: String,
    audio: Vec<u8>,
    num_speakers: Option<u32>,
}

async fn read_fields(mut multipart: Multipart) -> Result<UploadFields, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut num_speakers = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map_or_else(|| "upload".to_string(), String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("numSpeakers") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
                let parsed = text
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ApiError::InvalidUpload(format!("bad numSpeakers: {text}")))?;
                num_speakers = Some(parsed);
            }
            _ => {}
        }
    }

    let (filename, audio) =
        file.ok_or_else(|| ApiError::InvalidUpload("missing 'file' field".into()))?;
    if audio.is_empty() {
        return Err(ApiError::InvalidUpload("empty audio upload".into()));
    }
    Ok(UploadFields {
        filename,
        audio,
        num_speakers,
    })
}

/// Handle an audio upload end to end and return the stored meeting.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<MeetingResponse>, ApiError> {
    counter!(UPLOADS_TOTAL).increment(1);
    let started = Instant::now();

    let fields = read_fields(multipart).await?;
    let extension = Path::new(&fields.filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let recognizer_settings = &state.settings.recognizer;
    let config = PipelineConfig {
        chunk_seconds: recognizer_settings.chunk_seconds,
        num_speakers: fields
            .num_speakers
            .unwrap_or(recognizer_settings.default_num_speakers),
        max_concurrency: recognizer_settings.max_concurrency,
        scratch_dir: None,
    };

    let start_time = Utc::now();
    let outcome = pipeline::run(
        fields.audio,
        extension.as_deref(),
        Arc::clone(&state.recognizer),
        &config,
    )
    .await?;
    if outcome.failed_chunks > 0 {
        warn!(
            failed = outcome.failed_chunks,
            total = outcome.chunk_count,
            "some segments degraded to empty transcripts"
        );
    }

    let transcript = outcome.transcript.render();
    let summary = state.summarizer.summarize_meeting(&transcript).await?;

    let end_time = start_time
        + Duration::milliseconds((outcome.duration_seconds * 1000.0).round() as i64);
    let row = state.store.create_meeting(&CreateMeetingOptions {
        filename: &fields.filename,
        transcript: &transcript,
        summary: &summary.summary,
        key_points: &summary.key_points,
        action_points: &summary.action_points,
        meeting_date: &format_date(&start_time),
        start_time: &format_time(&start_time),
        end_time: &format_time(&end_time),
    })?;
    counter!(MEETINGS_STORED_TOTAL).increment(1);
    histogram!(UPLOAD_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
    info!(meeting_id = %row.id, duration_seconds = outcome.duration_seconds, "upload processed");

    Ok(Json(MeetingResponse::from(row)))
}

fn format_date(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d").to_string()
}

fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
