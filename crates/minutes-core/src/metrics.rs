//! Metric name constants.
//!
//! Every crate that emits a metric references these constants so the names
//! recorded by the pipeline, the summarizer client, and the HTTP handlers
//! cannot drift from what `/metrics` scrapes expect.

/// Uploads received total (counter).
pub const UPLOADS_TOTAL: &str = "uploads_total";
/// Upload processing duration seconds (histogram).
pub const UPLOAD_DURATION_SECONDS: &str = "upload_duration_seconds";
/// Audio chunks produced total (counter).
pub const PIPELINE_CHUNKS_TOTAL: &str = "pipeline_chunks_total";
/// Per-segment recognition failures total (counter).
pub const RECOGNITION_FAILURES_TOTAL: &str = "recognition_failures_total";
/// Summarizer requests total (counter).
pub const SUMMARIZER_REQUESTS_TOTAL: &str = "summarizer_requests_total";
/// Meetings stored total (counter).
pub const MEETINGS_STORED_TOTAL: &str = "meetings_stored_total";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_are_snake_case() {
        let names = [
            UPLOADS_TOTAL,
            UPLOAD_DURATION_SECONDS,
            PIPELINE_CHUNKS_TOTAL,
            RECOGNITION_FAILURES_TOTAL,
            SUMMARIZER_REQUESTS_TOTAL,
            MEETINGS_STORED_TOTAL,
        ];
        for name in names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "metric name '{name}' must be snake_case"
            );
        }
    }
}
