use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    foods::{self, repo::Food},
    saved::repo,
    state::AppState,
};

pub fn saved_routes() -> Router<AppState> {
    Router::new()
        .route("/saved", get(list_saved).post(add_saved))
        .route("/saved/:food_id", delete(remove_saved))
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub saved: Vec<Food>,
}

#[derive(Debug, Deserialize)]
pub struct AddSavedRequest {
    #[serde(default, rename = "foodId")]
    pub food_id: Option<Uuid>,
}

#[instrument(skip(state))]
pub async fn list_saved(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SavedResponse>, ApiError> {
    let saved = repo::list(&state.db, user_id).await?;
    Ok(Json(SavedResponse { saved }))
}

#[instrument(skip(state, payload))]
pub async fn add_saved(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<AddSavedRequest>,
) -> Result<Json<Value>, ApiError> {
    let food_id = payload
        .food_id
        .ok_or_else(|| ApiError::BadRequest("foodId required".into()))?;

    if foods::repo::find_by_id(&state.db, food_id).await?.is_none() {
        return Err(ApiError::NotFound("Food not found"));
    }

    repo::add(&state.db, user_id, food_id).await?;
    info!(user_id = %user_id, food_id = %food_id, "food saved");
    Ok(Json(json!({ "ok": true, "liked": true })))
}

#[instrument(skip(state))]
pub async fn remove_saved(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(food_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    repo::remove(&state.db, user_id, food_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
