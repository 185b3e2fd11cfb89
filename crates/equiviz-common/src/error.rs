//! Error types for EQUIVIZ

use thiserror::Error;

/// Result type alias for EQUIVIZ operations
pub type Result<T> = std::result::Result<T, EquivizError>;

/// Shared error type for EQUIVIZ
///
/// Feature-specific errors live next to their handlers; this type covers
/// failures in the cross-cutting utilities.
#[derive(Error, Debug)]
pub enum EquivizError {
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
