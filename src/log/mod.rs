use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod summary;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::log_routes())
}
