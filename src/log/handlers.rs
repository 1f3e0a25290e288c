use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    day_key,
    error::ApiError,
    goals,
    log::{dto::CreateEntryRequest, dto::TodayResponse, repo, summary},
    state::AppState,
};

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(create_entry))
        .route("/log/today", get(get_today))
        .route("/log/:id", delete(delete_entry))
}

#[instrument(skip(state, payload))]
pub async fn create_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<repo::LogEntry>), ApiError> {
    let key = day_key::today(state.tz);
    let entry = payload.normalize();

    let stored = repo::create(&state.db, user_id, &key, &entry).await?;

    info!(
        user_id = %user_id,
        entry_id = %stored.id,
        day_key = %stored.day_key,
        name = %stored.name,
        "log entry created"
    );
    Ok((StatusCode::CREATED, Json(stored)))
}

#[instrument(skip(state))]
pub async fn get_today(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<TodayResponse>, ApiError> {
    let key = day_key::today(state.tz);

    // Two independent reads; the summary is advisory and recomputed on the
    // next call, so no transaction spans them.
    let entries = repo::list_for_day(&state.db, user_id, &key).await?;
    let goals = goals::repo::get(&state.db, user_id).await?.unwrap_or_default();

    Ok(Json(summary::build(key, entries, goals)))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repo::delete_one(&state.db, user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
