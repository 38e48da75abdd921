//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, interactions, stats};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(post_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Post interaction and stats routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/:post_id/like",
            post(interactions::like_post).delete(interactions::unlike_post),
        )
        .route(
            "/posts/:post_id/burn",
            post(interactions::burn_post).delete(interactions::unburn_post),
        )
        .route("/posts/:post_id/stats", get(stats::get_post_stats))
}
