//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS (the demo UI runs on a different origin), request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/hash", post(handlers::hash::hash_text))
        .route("/reverse", post(handlers::reverse::reverse_lookup))
        .route("/integrity/send", post(handlers::integrity::integrity_send))
        .route(
            "/integrity/verify",
            post(handlers::integrity::verify_integrity),
        )
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
