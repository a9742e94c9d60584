//! Error types for the Uniques access layer.
//!
//! This module provides [`UniquesError`], which wraps storage-side errors
//! and adds pallet-layer failure modes (value decoding, call composition,
//! allocator preconditions).

use thiserror::Error;
use uniques_chain_storage::StorageError;

/// Result type alias for Uniques operations.
pub type Result<T> = std::result::Result<T, UniquesError>;

/// Errors produced by the Uniques access layer.
///
/// Storage errors pass through unmodified — a decode failure reported by
/// the storage collaborator reaches the caller as-is, never downgraded to
/// an absent value or a partial result.
#[derive(Debug, Error)]
pub enum UniquesError {
    /// Error from the chain storage collaborator.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A decoded value did not have the shape a pallet type requires.
    #[error("decode failure in {entry}: {reason}")]
    Decode {
        /// The storage entry whose value was malformed.
        entry: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A caller violated an API contract.
    ///
    /// Surfaced distinctly from [`Decode`](UniquesError::Decode): this is
    /// a bug in the calling code, not a data problem.
    #[error("precondition violated: {reason}")]
    Precondition {
        /// Which contract was violated and how.
        reason: String,
    },

    /// The transaction composer rejected a call.
    #[error("failed to compose call '{call}': {reason}")]
    Compose {
        /// The pallet call that could not be composed.
        call: String,
        /// Why composition failed.
        reason: String,
    },
}

impl UniquesError {
    /// Creates a new `Decode` error for the given entry.
    #[must_use]
    pub fn decode(entry: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self::Decode { entry: entry.to_string(), reason: reason.into() }
    }

    /// Creates a new `Precondition` error.
    #[must_use]
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition { reason: reason.into() }
    }

    /// Creates a new `Compose` error.
    #[must_use]
    pub fn compose(call: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Compose { call: call.into(), reason: reason.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_passes_through() {
        let err: UniquesError = StorageError::decode("class key[0]", "not an integer").into();
        assert!(matches!(err, UniquesError::Storage(StorageError::Decode { .. })));
    }

    #[test]
    fn test_decode_error_display() {
        let err = UniquesError::decode("uniques::class", "missing field 'owner'");
        assert_eq!(err.to_string(), "decode failure in uniques::class: missing field 'owner'");
    }

    #[test]
    fn test_precondition_error_display() {
        let err = UniquesError::precondition("sequence not sorted at position 1");
        assert_eq!(err.to_string(), "precondition violated: sequence not sorted at position 1");
    }

    #[test]
    fn test_compose_error_display() {
        let err = UniquesError::compose("mint", "composer offline");
        assert_eq!(err.to_string(), "failed to compose call 'mint': composer offline");
    }
}
