//! Simulated reverse-lookup endpoint.

use axum::extract::State;
use axum::Json;

use hashlab_types::hash::{ReverseRequest, ReverseResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/reverse - Look up a digest in the session cache.
///
/// Only finds digests previously produced by `POST /api/hash`; a miss
/// explains that SHA-256 cannot actually be reversed.
pub async fn reverse_lookup(
    State(state): State<AppState>,
    Json(body): Json<ReverseRequest>,
) -> Result<Json<ReverseResponse>, AppError> {
    let hash = body.hash.as_deref().unwrap_or_default();
    let resp = state.hash_service.reverse_lookup(hash)?;
    Ok(Json(resp))
}
