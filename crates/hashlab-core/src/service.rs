//! Hash service: digest computation, simulated reverse lookup, and
//! message-integrity verification.
//!
//! The service owns the reverse-lookup cache, a process-lifetime map from
//! digest to the text that produced it. Only `hash_text` writes the cache;
//! the integrity endpoints never touch it, so the two demos stay separate.

use dashmap::DashMap;

use hashlab_types::error::ValidationError;
use hashlab_types::hash::{
    HashResponse, HealthResponse, IntegritySendResponse, IntegrityStatus,
    IntegrityVerifyResponse, ReverseResponse,
};

use crate::hasher::TextHasher;

/// Note returned when a reverse lookup hits the cache.
const NOTE_FOUND: &str = "Found in session storage";

/// Note returned when a reverse lookup misses.
const NOTE_NOT_FOUND: &str = "Hash not found in session storage. In reality, \
    SHA-256 is cryptographically secure and cannot be reversed.";

/// Health status label.
const STATUS_RUNNING: &str = "Server is running";

/// Service for the SHA-256 demo operations.
///
/// Generic over the hasher to maintain the clean architecture boundary --
/// no crypto dependencies in core -- and so tests can instantiate
/// independent instances with their own cache.
pub struct HashService<H: TextHasher> {
    hasher: H,
    /// digest -> original text, insert-or-overwrite, never evicted.
    cache: DashMap<String, String>,
}

impl<H: TextHasher> HashService<H> {
    /// Create a new service with an empty cache.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            cache: DashMap::new(),
        }
    }

    /// Compute the SHA-256 digest of `text` and remember it for reverse
    /// lookup.
    ///
    /// The cache entry is keyed by the digest, so hashing the same text
    /// twice overwrites the entry with an identical one.
    pub fn hash_text(&self, text: &str) -> Result<HashResponse, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::Missing("text"));
        }

        let hash = self.hasher.digest_hex(text);
        self.cache.insert(hash.clone(), text.to_string());
        tracing::debug!(%hash, cache_len = self.cache.len(), "hashed text");

        Ok(HashResponse {
            original_text: text.to_string(),
            hash,
            timestamp: now(),
        })
    }

    /// Look up a digest in the session cache.
    ///
    /// This only "reverses" digests produced by `hash_text` in this process;
    /// a miss is reported with a note explaining that SHA-256 cannot
    /// actually be reversed.
    pub fn reverse_lookup(&self, hash: &str) -> Result<ReverseResponse, ValidationError> {
        if hash.is_empty() {
            return Err(ValidationError::Missing("hash"));
        }

        let original_text = self.cache.get(hash).map(|entry| entry.value().clone());
        let success = original_text.is_some();
        tracing::debug!(%hash, success, "reverse lookup");

        Ok(ReverseResponse {
            hash: hash.to_string(),
            original_text,
            success,
            note: if success { NOTE_FOUND } else { NOTE_NOT_FOUND }.to_string(),
        })
    }

    /// Sender side of the integrity demo: compute the digest to transmit
    /// alongside the message.
    ///
    /// Unlike `hash_text`, this does not populate the reverse-lookup cache;
    /// callers wanting the digest reversible must hash it explicitly.
    pub fn integrity_send(
        &self,
        message: &str,
    ) -> Result<IntegritySendResponse, ValidationError> {
        if message.is_empty() {
            return Err(ValidationError::Missing("message"));
        }

        Ok(IntegritySendResponse {
            original_message: message.to_string(),
            original_hash: self.hasher.digest_hex(message),
            timestamp: now(),
        })
    }

    /// Receiver side of the integrity demo: recompute the digest of the
    /// received message and compare it with the one that was sent.
    ///
    /// The comparison is plain string equality over hex digests; nothing
    /// secret is being compared, so constant-time comparison is not needed.
    pub fn verify_integrity(
        &self,
        original_message: &str,
        original_hash: &str,
        received_message: &str,
    ) -> Result<IntegrityVerifyResponse, ValidationError> {
        if original_message.is_empty() {
            return Err(ValidationError::Missing("originalMessage"));
        }
        if original_hash.is_empty() {
            return Err(ValidationError::Missing("originalHash"));
        }
        if received_message.is_empty() {
            return Err(ValidationError::Missing("receivedMessage"));
        }

        let received_hash = self.hasher.digest_hex(received_message);
        let integrity_maintained = original_hash == received_hash;
        tracing::debug!(integrity_maintained, "integrity verification");

        Ok(IntegrityVerifyResponse {
            original_message: original_message.to_string(),
            original_hash: original_hash.to_string(),
            received_message: received_message.to_string(),
            received_hash,
            integrity_maintained,
            status: IntegrityStatus::from(integrity_maintained),
            timestamp: now(),
        })
    }

    /// Report service status and the current cache size.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: STATUS_RUNNING.to_string(),
            timestamp: now(),
            stored_hashes: self.cache.len(),
        }
    }

    /// Number of entries in the reverse-lookup cache.
    pub fn stored_hashes(&self) -> usize {
        self.cache.len()
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::*;

    /// Real SHA-256 hasher for tests; the production adapter lives in
    /// hashlab-infra, which core cannot depend on.
    struct TestHasher;

    impl TextHasher for TestHasher {
        fn digest_hex(&self, text: &str) -> String {
            format!("{:x}", Sha256::digest(text.as_bytes()))
        }
    }

    fn service() -> HashService<TestHasher> {
        HashService::new(TestHasher)
    }

    const ABC_DIGEST: &str =
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_hash_text_known_vector() {
        let svc = service();
        let resp = svc.hash_text("abc").unwrap();
        assert_eq!(resp.hash, ABC_DIGEST);
        assert_eq!(resp.original_text, "abc");
    }

    #[test]
    fn test_hash_text_is_idempotent() {
        let svc = service();
        let first = svc.hash_text("hello world").unwrap();
        let second = svc.hash_text("hello world").unwrap();
        assert_eq!(first.hash, second.hash);
        assert_eq!(svc.stored_hashes(), 1);
    }

    #[test]
    fn test_hash_text_rejects_empty() {
        let svc = service();
        let err = svc.hash_text("").unwrap_err();
        assert_eq!(err, ValidationError::Missing("text"));
        assert_eq!(svc.stored_hashes(), 0);
    }

    #[test]
    fn test_reverse_lookup_round_trip() {
        let svc = service();
        let hashed = svc.hash_text("attack at dawn").unwrap();
        let resp = svc.reverse_lookup(&hashed.hash).unwrap();
        assert!(resp.success);
        assert_eq!(resp.original_text.as_deref(), Some("attack at dawn"));
        assert_eq!(resp.note, NOTE_FOUND);
    }

    #[test]
    fn test_reverse_lookup_miss() {
        let svc = service();
        let resp = svc.reverse_lookup(ABC_DIGEST).unwrap();
        assert!(!resp.success);
        assert!(resp.original_text.is_none());
        assert!(resp.note.contains("cannot be reversed"));
    }

    #[test]
    fn test_reverse_lookup_rejects_empty() {
        let svc = service();
        let err = svc.reverse_lookup("").unwrap_err();
        assert_eq!(err, ValidationError::Missing("hash"));
    }

    #[test]
    fn test_reverse_lookup_does_not_write_cache() {
        let svc = service();
        svc.reverse_lookup(ABC_DIGEST).unwrap();
        assert_eq!(svc.stored_hashes(), 0);
    }

    #[test]
    fn test_integrity_send_does_not_populate_cache() {
        let svc = service();
        let sent = svc.integrity_send("wire this").unwrap();
        // The integrity demo is deliberately separate from reverse lookup.
        let lookup = svc.reverse_lookup(&sent.original_hash).unwrap();
        assert!(!lookup.success);
        assert_eq!(svc.stored_hashes(), 0);
    }

    #[test]
    fn test_integrity_send_known_vector() {
        let svc = service();
        let sent = svc.integrity_send("abc").unwrap();
        assert_eq!(sent.original_hash, ABC_DIGEST);
    }

    #[test]
    fn test_verify_integrity_maintained() {
        let svc = service();
        let sent = svc.integrity_send("the deal is off").unwrap();
        let resp = svc
            .verify_integrity("the deal is off", &sent.original_hash, "the deal is off")
            .unwrap();
        assert!(resp.integrity_maintained);
        assert_eq!(resp.status, IntegrityStatus::Maintained);
        assert_eq!(resp.received_hash, sent.original_hash);
    }

    #[test]
    fn test_verify_integrity_detects_tampering() {
        let svc = service();
        let sent = svc.integrity_send("the deal is off").unwrap();
        let resp = svc
            .verify_integrity("the deal is off", &sent.original_hash, "the deal is on")
            .unwrap();
        assert!(!resp.integrity_maintained);
        assert_eq!(resp.status, IntegrityStatus::Compromised);
        assert_ne!(resp.received_hash, sent.original_hash);
    }

    #[test]
    fn test_verify_integrity_reports_first_missing_field() {
        let svc = service();
        assert_eq!(
            svc.verify_integrity("", "hash", "msg").unwrap_err(),
            ValidationError::Missing("originalMessage")
        );
        assert_eq!(
            svc.verify_integrity("msg", "", "msg").unwrap_err(),
            ValidationError::Missing("originalHash")
        );
        assert_eq!(
            svc.verify_integrity("msg", "hash", "").unwrap_err(),
            ValidationError::Missing("receivedMessage")
        );
    }

    #[test]
    fn test_integrity_send_rejects_empty() {
        let svc = service();
        let err = svc.integrity_send("").unwrap_err();
        assert_eq!(err, ValidationError::Missing("message"));
    }

    #[test]
    fn test_health_reports_cache_size() {
        let svc = service();
        let before = svc.health();
        assert_eq!(before.status, STATUS_RUNNING);
        assert_eq!(before.stored_hashes, 0);

        svc.hash_text("one").unwrap();
        svc.hash_text("two").unwrap();
        svc.hash_text("one").unwrap(); // overwrite, not a new entry

        let after = svc.health();
        assert_eq!(after.stored_hashes, 2);
    }

    #[test]
    fn test_instances_have_independent_caches() {
        let a = service();
        let b = service();
        let hashed = a.hash_text("only in a").unwrap();
        assert!(!b.reverse_lookup(&hashed.hash).unwrap().success);
    }
}
