use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::goal_routes())
}
