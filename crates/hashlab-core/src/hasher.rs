//! TextHasher trait for computing digests of submitted text.
//!
//! Defined in hashlab-core so the service can hash text without coupling to
//! a specific digest implementation. The `Sha256TextHasher` adapter lives in
//! hashlab-infra.

/// Abstraction over text digest computation.
///
/// Implementations must be deterministic and return the digest as lowercase
/// hex; the cache invariant (64-character lowercase hex keys) is inherited
/// from the hasher.
pub trait TextHasher: Send + Sync {
    /// Compute a hex-encoded digest of the given text.
    fn digest_hex(&self, text: &str) -> String;
}
