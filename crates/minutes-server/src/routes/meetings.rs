//! `GET /meetings` and `GET /meetings/{id}`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use minutes_core::ids::MeetingId;

use crate::errors::ApiError;
use crate::responses::{MeetingListEntry, MeetingResponse};
use crate::state::AppState;

/// List all stored meetings, most recent first.
#[instrument(skip(state))]
pub async fn list_meetings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MeetingListEntry>>, ApiError> {
    let rows = state.store.list_meetings()?;
    Ok(Json(rows.into_iter().map(MeetingListEntry::from).collect()))
}

/// Get one meeting by id. Unknown and malformed ids both map to 404.
#[instrument(skip(state))]
pub async fn get_meeting(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MeetingResponse>, ApiError> {
    if !MeetingId::is_valid(&id) {
        return Err(ApiError::NotFound(id));
    }
    let meeting_id = MeetingId::from_string(&id);
    let row = state
        .store
        .get_meeting(&meeting_id)?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(MeetingResponse::from(row)))
}
