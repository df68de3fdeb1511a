use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/hash`.
///
/// Fields are optional at the serde level so that an absent field
/// deserializes cleanly and validation can produce the documented 400
/// instead of a framework-level rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HashRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body for `POST /api/hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashResponse {
    /// The text exactly as submitted.
    pub original_text: String,
    /// Hex-encoded SHA-256 digest: 64 lowercase hex characters.
    pub hash: String,
    /// RFC 3339 UTC timestamp of when the digest was computed.
    pub timestamp: String,
}

/// Request body for `POST /api/reverse`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseRequest {
    #[serde(default)]
    pub hash: Option<String>,
}

/// Response body for `POST /api/reverse`.
///
/// The "reversal" is a cache lookup over previously hashed inputs, not a
/// preimage attack; `note` spells that out on a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseResponse {
    /// The digest that was looked up.
    pub hash: String,
    /// The cached original text, or `null` when the digest was never seen.
    pub original_text: Option<String>,
    pub success: bool,
    /// Explanation of the lookup outcome.
    pub note: String,
}

/// Request body for `POST /api/integrity/send`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegritySendRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for `POST /api/integrity/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegritySendResponse {
    pub original_message: String,
    /// Hex-encoded SHA-256 digest of the message.
    pub original_hash: String,
    pub timestamp: String,
}

/// Request body for `POST /api/integrity/verify`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityVerifyRequest {
    #[serde(default)]
    pub original_message: Option<String>,
    #[serde(default)]
    pub original_hash: Option<String>,
    #[serde(default)]
    pub received_message: Option<String>,
}

/// Response body for `POST /api/integrity/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityVerifyResponse {
    pub original_message: String,
    pub original_hash: String,
    pub received_message: String,
    /// Freshly computed digest of `received_message`.
    pub received_hash: String,
    /// Whether `original_hash` equals `received_hash`.
    pub integrity_maintained: bool,
    /// Human-readable label for `integrity_maintained`.
    pub status: IntegrityStatus,
    pub timestamp: String,
}

/// Outcome label for an integrity verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrityStatus {
    #[serde(rename = "INTEGRITY MAINTAINED")]
    Maintained,
    #[serde(rename = "INTEGRITY COMPROMISED")]
    Compromised,
}

impl From<bool> for IntegrityStatus {
    fn from(maintained: bool) -> Self {
        if maintained {
            IntegrityStatus::Maintained
        } else {
            IntegrityStatus::Compromised
        }
    }
}

impl fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityStatus::Maintained => write!(f, "INTEGRITY MAINTAINED"),
            IntegrityStatus::Compromised => write!(f, "INTEGRITY COMPROMISED"),
        }
    }
}

/// Response body for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Static "Server is running" label.
    pub status: String,
    pub timestamp: String,
    /// Number of entries in the reverse-lookup cache.
    pub stored_hashes: usize,
}
