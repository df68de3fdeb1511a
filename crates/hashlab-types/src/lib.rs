//! Shared types for Hashlab.
//!
//! This crate contains the request/response types for the SHA-256 demo API
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod hash;
