use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    goals::{
        dto::{GoalsPatch, GoalsResponse},
        repo,
    },
    state::AppState,
};

pub fn goal_routes() -> Router<AppState> {
    Router::new().route("/user/goals", get(get_goals).patch(patch_goals))
}

#[instrument(skip(state))]
pub async fn get_goals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<GoalsResponse>, ApiError> {
    let goals = repo::get(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    Ok(Json(GoalsResponse { goals }))
}

#[instrument(skip(state, body))]
pub async fn patch_goals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<GoalsResponse>, ApiError> {
    let patch = GoalsPatch::from_body(&body);
    if patch.is_empty() {
        warn!(user_id = %user_id, "goal patch had no usable fields");
        return Err(ApiError::BadRequest("No valid goal fields provided".into()));
    }

    if !repo::patch(&state.db, user_id, &patch).await? {
        return Err(ApiError::NotFound("User not found"));
    }

    let goals = repo::get(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    info!(user_id = %user_id, "goals updated");
    Ok(Json(GoalsResponse { goals }))
}
