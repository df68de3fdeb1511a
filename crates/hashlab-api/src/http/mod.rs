//! HTTP/REST API layer for Hashlab.
//!
//! Axum-based JSON API at `/api/` with CORS support for the browser demo UI.

pub mod error;
pub mod handlers;
pub mod router;
