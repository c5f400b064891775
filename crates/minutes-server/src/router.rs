//! Router assembly.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{health, meetings, upload};
use crate::state::AppState;

/// Build the HTTP router.
///
/// `metrics_handle` is optional so tests can build a router without a
/// globally installed recorder.
pub fn build_router(state: Arc<AppState>, metrics_handle: Option<PrometheusHandle>) -> Router {
    let max_upload_bytes = state.settings.server.max_upload_bytes;

    let mut router = Router::new()
        .route("/upload", post(upload::upload))
        .route("/meetings", get(meetings::list_meetings))
        .route("/meetings/{id}", get(meetings::get_meeting))
        .route("/health", get(health::health));

    if let Some(handle) = metrics_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
