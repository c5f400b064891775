//! End-to-end tests over the HTTP surface with an in-memory store, a fake
//! recognizer, and a mocked summarization service.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use minutes_server::responses::{NO_ACTION_POINTS, NO_KEY_POINTS};
use minutes_server::{AppState, build_router};
use minutes_settings::MinutesSettings;
use minutes_store::sqlite::connection::{self, ConnectionConfig};
use minutes_store::{MeetingStore, run_migrations};
use minutes_summarize::{SummarizerClient, SummarizerConfig};
use minutes_transcribe::{ChunkResult, RecognitionError, Recognizer, WordEvent};

struct FixedRecognizer {
    words: Vec<WordEvent>,
}

#[async_trait]
impl Recognizer for FixedRecognizer {
    async fn recognize(
        &self,
        _segment_wav: Vec<u8>,
        _num_speakers: u32,
    ) -> Result<ChunkResult, RecognitionError> {
        Ok(self.words.clone())
    }
}

fn wav_bytes(seconds: f32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..(seconds * 16_000.0) as usize {
            let sample = ((i as f32 * 0.05).sin() * 8000.0) as i16;
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

async fn app_with(recognizer: Arc<dyn Recognizer>, summarizer_url: &str) -> Router {
    let pool = connection::new_in_memory(&ConnectionConfig::default()).unwrap();
    {
        let conn = pool.get().unwrap();
        run_migrations(&conn).unwrap();
    }

    let mut settings = MinutesSettings::default();
    settings.summarizer.base_url = summarizer_url.to_string();

    let state = Arc::new(AppState {
        store: MeetingStore::new(pool),
        recognizer,
        summarizer: SummarizerClient::new(SummarizerConfig {
            base_url: summarizer_url.to_string(),
            model: settings.summarizer.model.clone(),
            window_chars: settings.summarizer.window_chars,
            min_length: settings.summarizer.min_length,
            max_length: settings.summarizer.max_length,
            timeout: std::time::Duration::from_secs(5),
        }),
        settings: Arc::new(settings),
    });
    build_router(state, None)
}

async fn mock_summarizer(summary: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "summary": summary })),
        )
        .mount(&server)
        .await;
    server
}

const BOUNDARY: &str = "test-boundary-7f3a";

fn multipart_upload(filename: &str, audio: &[u8], num_speakers: Option<&str>) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: audio/wav\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(audio);
    body.extend_from_slice(b"\r\n");
    if let Some(n) = num_speakers {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"numSpeakers\"\r\n\r\n{n}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn upload_stores_and_returns_meeting() {
    let summarizer = mock_summarizer("we planned the week").await;
    let recognizer = Arc::new(FixedRecognizer {
        words: vec![
            WordEvent::new("good", 1),
            WordEvent::new("morning", 1),
            WordEvent::new("hello", 2),
        ],
    });
    let app = app_with(recognizer, &summarizer.uri()).await;

    let response = app
        .oneshot(multipart_upload("standup.wav", &wav_bytes(1.0), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["id"].as_str().unwrap().starts_with("mtg_"));
    assert_eq!(body["filename"], "standup.wav");
    assert_eq!(
        body["transcript"],
        "Speaker 1: good morning\nSpeaker 2: hello"
    );
    // Summarizer returns prose only, so the structured lists fall back to
    // the placeholders.
    assert_eq!(body["keyPoints"][0], NO_KEY_POINTS);
    assert_eq!(body["actionPoints"][0], NO_ACTION_POINTS);
    assert_eq!(
        body["meetingDate"].as_str().unwrap().len(),
        "2026-08-22".len()
    );
}

#[tokio::test]
async fn uploaded_meeting_is_listed_and_fetchable() {
    let summarizer = mock_summarizer("quick chat").await;
    let recognizer = Arc::new(FixedRecognizer {
        words: vec![WordEvent::new("hi", 1)],
    });
    let app = app_with(recognizer, &summarizer.uri()).await;

    let response = app
        .clone()
        .oneshot(multipart_upload("chat.wav", &wav_bytes(0.5), None))
        .await
        .unwrap();
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/meetings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let list = json_body(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id.as_str());
    assert!(list[0].get("transcript").is_none());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/meetings/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["id"], id.as_str());
    assert_eq!(fetched["transcript"], "Speaker 1: hi");
}

#[tokio::test]
async fn unknown_meeting_is_404() {
    let summarizer = mock_summarizer("unused").await;
    let app = app_with(
        Arc::new(FixedRecognizer { words: Vec::new() }),
        &summarizer.uri(),
    )
    .await;

    for uri in ["/meetings/mtg_0191f1e2", "/meetings/not-an-id"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");
    }
}

#[tokio::test]
async fn upload_without_file_is_400() {
    let summarizer = mock_summarizer("unused").await;
    let app = app_with(
        Arc::new(FixedRecognizer { words: Vec::new() }),
        &summarizer.uri(),
    )
    .await;

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"numSpeakers\"\r\n\r\n2\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undecodable_audio_is_400() {
    let summarizer = mock_summarizer("unused").await;
    let app = app_with(
        Arc::new(FixedRecognizer { words: Vec::new() }),
        &summarizer.uri(),
    )
    .await;

    let response = app
        .oneshot(multipart_upload("junk.wav", b"definitely not audio", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn silent_meeting_skips_summarizer_and_stores_empty_transcript() {
    // No mock mounted on the summarizer server: a request would 404 and
    // surface as a 500. Empty transcripts must never reach the service.
    let summarizer = MockServer::start().await;
    let app = app_with(
        Arc::new(FixedRecognizer { words: Vec::new() }),
        &summarizer.uri(),
    )
    .await;

    let response = app
        .oneshot(multipart_upload("silence.wav", &wav_bytes(0.5), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"], "");
    assert_eq!(body["summary"], "");
}

#[tokio::test]
async fn health_endpoint() {
    let summarizer = mock_summarizer("unused").await;
    let app = app_with(
        Arc::new(FixedRecognizer { words: Vec::new() }),
        &summarizer.uri(),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
