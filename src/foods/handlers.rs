use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    foods::{
        dto::{CreateFoodRequest, SearchParams},
        repo,
    },
    state::AppState,
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", post(create_food))
        .route("/search", get(search))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(mut payload): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<repo::Food>), ApiError> {
    if let Err(msg) = payload.validate() {
        warn!(name = %payload.name, "food rejected");
        return Err(ApiError::BadRequest(msg.into()));
    }

    if repo::exists_by_name(&state.db, &payload.name).await? {
        return Err(ApiError::Conflict("Food already exists"));
    }

    let food = repo::create(&state.db, &payload).await?;
    info!(user_id = %user_id, food_id = %food.id, name = %food.name, "food created");
    Ok((StatusCode::CREATED, Json(food)))
}

#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<repo::Food>>, ApiError> {
    let term = params.user_search.trim();
    if term.is_empty() {
        return Ok(Json(vec![]));
    }
    let limit = params.capped_limit();

    let rows = if params.by == "tags" {
        let terms: Vec<String> = term
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        let terms = if terms.is_empty() {
            vec![term.to_string()]
        } else {
            terms
        };
        repo::search_by_tags(&state.db, &terms, limit).await?
    } else {
        repo::search_by_name(&state.db, term, limit).await?
    };

    Ok(Json(rows))
}
