use thiserror::Error;

/// Errors from hash service operations.
///
/// Every operation validates its input before touching the hasher or the
/// cache; a missing or empty field is the only way an operation can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
}
