//! Health check endpoint.

use axum::extract::State;
use axum::Json;

use hashlab_types::hash::HealthResponse;

use crate::state::AppState;

/// GET /api/health - Service status and reverse-lookup cache size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.hash_service.health())
}
