//! Hashing endpoint.

use axum::extract::State;
use axum::Json;

use hashlab_types::hash::{HashRequest, HashResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/hash - Hash text to SHA-256 and remember it for reverse lookup.
pub async fn hash_text(
    State(state): State<AppState>,
    Json(body): Json<HashRequest>,
) -> Result<Json<HashResponse>, AppError> {
    let text = body.text.as_deref().unwrap_or_default();
    let resp = state.hash_service.hash_text(text)?;
    Ok(Json(resp))
}
