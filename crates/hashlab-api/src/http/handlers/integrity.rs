//! Message-integrity demo endpoints: sender and receiver sides.

use axum::extract::State;
use axum::Json;

use hashlab_types::hash::{
    IntegritySendRequest, IntegritySendResponse, IntegrityVerifyRequest,
    IntegrityVerifyResponse,
};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/integrity/send - Compute the digest to transmit with a message.
///
/// Does not populate the reverse-lookup cache; the integrity demo is
/// deliberately separate from the hashing demo.
pub async fn integrity_send(
    State(state): State<AppState>,
    Json(body): Json<IntegritySendRequest>,
) -> Result<Json<IntegritySendResponse>, AppError> {
    let message = body.message.as_deref().unwrap_or_default();
    let resp = state.hash_service.integrity_send(message)?;
    Ok(Json(resp))
}

/// POST /api/integrity/verify - Recompute and compare the received digest.
pub async fn verify_integrity(
    State(state): State<AppState>,
    Json(body): Json<IntegrityVerifyRequest>,
) -> Result<Json<IntegrityVerifyResponse>, AppError> {
    let resp = state.hash_service.verify_integrity(
        body.original_message.as_deref().unwrap_or_default(),
        body.original_hash.as_deref().unwrap_or_default(),
        body.received_message.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(resp))
}
