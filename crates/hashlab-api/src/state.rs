//! Application state wiring the hash service together.
//!
//! The service is generic over the hasher trait, but AppState pins it to the
//! concrete SHA-256 adapter from hashlab-infra.

use std::sync::Arc;

use hashlab_core::service::HashService;
use hashlab_infra::hash::Sha256TextHasher;

/// Concrete type alias for the service generic pinned to the infra hasher.
pub type ConcreteHashService = HashService<Sha256TextHasher>;

/// Shared application state holding the hash service.
///
/// The service owns the reverse-lookup cache, so the cache lives exactly as
/// long as the process.
#[derive(Clone)]
pub struct AppState {
    pub hash_service: Arc<ConcreteHashService>,
}

impl AppState {
    /// Initialize the application state with an empty cache.
    pub fn new() -> Self {
        Self {
            hash_service: Arc::new(HashService::new(Sha256TextHasher::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
