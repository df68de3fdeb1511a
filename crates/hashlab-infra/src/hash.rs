//! SHA-256 implementation of the `TextHasher` port.
//!
//! Uses the `sha2` crate (RustCrypto ecosystem); the demo never implements
//! its own digest algorithm.

use sha2::{Digest, Sha256};

use hashlab_core::hasher::TextHasher;

/// SHA-256 hasher producing lowercase hex-encoded digests.
pub struct Sha256TextHasher;

impl Sha256TextHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256TextHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl TextHasher for Sha256TextHasher {
    fn digest_hex(&self, text: &str) -> String {
        let digest = Sha256::digest(text.as_bytes());
        format!("{:x}", digest)
    }
}
