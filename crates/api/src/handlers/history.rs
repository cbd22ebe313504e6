//! Handlers for the work history log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::history::{validate_description, validate_effort_hours};
use storefront_db::models::history::CreateHistoryEntry;
use storefront_db::repositories::HistoryRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/history
pub async fn list_history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = HistoryRepo::list(&state.pool).await?;
    Ok(Json(entries))
}

/// POST /api/history
pub async fn create_history(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHistoryEntry>,
) -> AppResult<impl IntoResponse> {
    validate_description(&input.description)?;
    validate_effort_hours(input.effort_hours)?;

    let entry = HistoryRepo::create(&state.pool, &input).await?;

    tracing::info!(entry_id = entry.id, "History entry recorded");

    Ok((StatusCode::CREATED, Json(entry)))
}
