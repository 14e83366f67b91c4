//! API route definitions

mod health;
mod news;

use axum::Router;
use crate::AppState;

/// Create all API routes (mounted under `/api`)
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(news::routes())
}

/// Create health routes (mounted at the root)
pub fn health_routes() -> Router<AppState> {
    health::routes()
}
