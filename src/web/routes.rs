//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Search
        .route("/search/status", get(handlers::search_status))
        .route("/search/:collection/:term", get(handlers::search_embedded_language))
        .route("/search/:collection/:language/:term", get(handlers::search))
        // Autosuggest
        .route("/autosuggest/status", get(handlers::autosuggest_status))
        .route(
            "/autosuggest/:collection/:term",
            get(handlers::autosuggest_embedded_language),
        )
        .route(
            "/autosuggest/:collection/:language/:term",
            get(handlers::autosuggest),
        )
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
