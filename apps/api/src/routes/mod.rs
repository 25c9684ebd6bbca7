pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers as content_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs + content
        .route("/api/v1/jobs", get(content_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(content_handlers::handle_get_job))
        .route(
            "/api/v1/jobs/:id/normalize",
            post(content_handlers::handle_normalize_job),
        )
        .route(
            "/api/v1/content/normalize",
            post(content_handlers::handle_normalize_text),
        )
        // Matching
        .route("/api/v1/match/score", post(matching_handlers::handle_score))
        .route(
            "/api/v1/match/recommendations/:profile_id",
            get(matching_handlers::handle_recommendations),
        )
        .with_state(state)
}
