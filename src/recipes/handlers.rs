use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    recipes::repo::{self, Recipe},
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/:id", get(get_recipe))
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub recipe: Recipe,
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Json<RecipeListResponse>, ApiError> {
    let recipes = repo::list(&state.db).await?;
    Ok(Json(RecipeListResponse { recipes }))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Recipe not found"))?;
    Ok(Json(RecipeResponse { recipe }))
}
