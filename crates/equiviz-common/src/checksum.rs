//! Checksum utilities for upload verification
//!
//! Every stored dataset keeps a SHA-256 fingerprint of the raw upload bytes
//! so clients can verify that what they retrieve matches what they sent.

use crate::error::{EquivizError, Result};
use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 checksum of an in-memory buffer
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Verify that a buffer matches an expected checksum
pub fn verify_checksum(data: &[u8], expected: &str) -> Result<()> {
    let actual = compute_checksum(data);
    if actual == expected {
        Ok(())
    } else {
        Err(EquivizError::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_checksum() {
        let checksum = compute_checksum(b"hello world");
        assert_eq!(checksum, "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9");
    }

    #[test]
    fn test_verify_checksum_ok() {
        let data = b"Equipment_Name,Type,Flowrate,Pressure,Temperature\n";
        assert!(verify_checksum(data, &compute_checksum(data)).is_ok());
    }

    #[test]
    fn test_verify_checksum_mismatch() {
        let result = verify_checksum(b"hello world", "deadbeef");
        assert!(matches!(result, Err(EquivizError::ChecksumMismatch { .. })));
    }
}
