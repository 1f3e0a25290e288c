use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::recipe_routes())
}
