//! Storage error types and result alias.
//!
//! This module defines the error types that can occur while reading chain
//! storage. All storage implementations must map their internal errors to
//! these standardized error types.
//!
//! # Error Types
//!
//! - [`StorageError::Decode`] - A key or value could not be interpreted as its expected type
//! - [`StorageError::Precondition`] - A caller violated an API contract
//! - [`StorageError::Connection`] - Network or connection-related failures
//! - [`StorageError::Timeout`] - Operation exceeded time limit
//! - [`StorageError::Internal`] - Backend-specific internal errors
//!
//! Absence of data is **never** an error: a missing value surfaces as
//! [`Lookup::Absent`](crate::Lookup::Absent) and an empty key space as an
//! empty vec. Collapsing "no data" into an error (or, worse, a decode
//! failure into "no data") is exactly the failure mode this taxonomy
//! exists to prevent.
//!
//! # Example
//!
//! ```
//! use uniques_chain_storage::{StorageError, StorageResult};
//!
//! fn read_width(raw: &str) -> StorageResult<u32> {
//!     raw.parse().map_err(|_| StorageError::decode("width", "not an integer"))
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

/// A boxed error type for source chain tracking.
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while reading chain storage.
///
/// This enum represents the canonical set of errors that any storage
/// implementation can produce. Implementations should map their internal
/// error types to these variants.
///
/// Errors preserve their source chain via the `#[source]` attribute,
/// enabling debugging tools to display the full error context.
///
/// # Non-exhaustive
///
/// This enum is marked `#[non_exhaustive]` — new variants may be added in
/// future minor releases without a semver-breaking change. Downstream match
/// expressions must include a wildcard arm (`_ =>`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// A storage key or value could not be interpreted as its expected type.
    ///
    /// This indicates a collaborator/schema mismatch, not a normal "no data"
    /// case. It is propagated to the caller unmodified — never retried,
    /// never recovered locally, never collapsed into an absent value.
    #[error("decode failure in {context}: {reason}")]
    Decode {
        /// Where the bad data was encountered (entry name, key position).
        context: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A caller violated an API contract.
    ///
    /// Unlike [`Decode`](StorageError::Decode), this indicates a bug in the
    /// calling code rather than a data problem, and is surfaced distinctly
    /// so the two are never confused.
    #[error("precondition violated: {reason}")]
    Precondition {
        /// Which contract was violated and how.
        reason: String,
    },

    /// Connection or network error.
    ///
    /// This error indicates a failure to communicate with the chain node,
    /// such as a network timeout, DNS failure, or connection refused.
    #[error("connection error: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
        /// The underlying error that caused this connection failure.
        #[source]
        source: Option<BoxError>,
    },

    /// Operation timed out.
    ///
    /// The storage read exceeded the collaborator's configured time limit.
    /// This crate imposes no timeout of its own; the variant exists so real
    /// transports have somewhere canonical to surface theirs.
    #[error("operation timeout")]
    Timeout,

    /// Internal storage backend error.
    ///
    /// This is a catch-all for backend-specific errors that don't fit other
    /// categories.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
        /// The underlying error that caused this internal failure.
        #[source]
        source: Option<BoxError>,
    },
}

impl StorageError {
    /// Creates a new `Decode` error for the given context.
    #[must_use]
    pub fn decode(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode { context: context.into(), reason: reason.into() }
    }

    /// Creates a new `Precondition` error.
    #[must_use]
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition { reason: reason.into() }
    }

    /// Creates a new `Connection` error with the given message.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into(), source: None }
    }

    /// Creates a new `Connection` error with a message and source error.
    #[must_use]
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `Timeout` error.
    #[must_use]
    pub fn timeout() -> Self {
        Self::Timeout
    }

    /// Creates a new `Internal` error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Creates a new `Internal` error with a message and source error.
    #[must_use]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Arc::new(source)) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = StorageError::decode("class key[0]", "expected integer, found bytes");
        assert_eq!(err.to_string(), "decode failure in class key[0]: expected integer, found bytes");
    }

    #[test]
    fn test_precondition_error_display() {
        let err = StorageError::precondition("input not sorted at position 2");
        assert_eq!(err.to_string(), "precondition violated: input not sorted at position 2");
    }

    #[test]
    fn test_connection_error_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StorageError::connection_with_source("node unreachable", io);

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(err.to_string(), "connection error: node unreachable");
    }

    #[test]
    fn test_timeout_error_display() {
        assert_eq!(StorageError::timeout().to_string(), "operation timeout");
    }

    #[test]
    fn test_internal_error_without_source() {
        let err = StorageError::internal("unexpected state");
        assert!(std::error::Error::source(&err).is_none());
    }
}
