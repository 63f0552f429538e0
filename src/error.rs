//! Error types for the data provider.
//!
//! # Error Handling
//!
//! Nothing in this crate panics or retries; every failure surfaces as a
//! `Result`. Transport errors from the base provider are propagated
//! unchanged. Introspection failures are split in two: errors carrying a
//! transport status code are rewrapped with a descriptive message, all
//! others pass through verbatim so callers see the original failure.
//!
//! # Example
//!
//! ```rust
//! use graphql_data_provider::{IntrospectionError, ProviderError};
//!
//! let rewrapped =
//!     ProviderError::from_introspection(IntrospectionError::with_status("not found", 404));
//! assert_eq!(rewrapped.to_string(), "Cannot fetch documentation: 404");
//!
//! let passthrough =
//!     ProviderError::from_introspection(IntrospectionError::new("connection refused"));
//! assert_eq!(passthrough.to_string(), "connection refused");
//! ```

use thiserror::Error;

use crate::graphql::HttpError;
use crate::operation::OperationKind;

/// Error raised by a schema parser when the API documentation cannot be
/// fetched or read.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct IntrospectionError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Transport status code, when the failure came from an HTTP response.
    pub status: Option<u16>,
}

impl IntrospectionError {
    /// Creates an error with no transport status.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Creates an error carrying a transport status code.
    #[must_use]
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }
}

/// Errors surfaced by provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Schema introspection failed with a transport status code.
    #[error("Cannot fetch documentation: {status}")]
    Documentation {
        /// The status code the documentation fetch failed with.
        status: u16,
    },

    /// Schema introspection failed without a status code; the parser
    /// error is surfaced unchanged.
    #[error(transparent)]
    Introspection(IntrospectionError),

    /// Transport-level failure, propagated unchanged from the base
    /// provider. No retry is attempted here.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The backend has no operation configured for this kind on this
    /// resource.
    #[error("no {kind} operation is defined for resource '{resource}'")]
    UnsupportedOperation {
        /// The operation kind that has no configured name.
        kind: OperationKind,
        /// The resource the operation was requested for.
        resource: String,
    },

    /// The resource is filtered out by the include/exclude configuration.
    #[error("resource '{resource}' is not served by this provider")]
    UnknownResource {
        /// The filtered-out resource name.
        resource: String,
    },

    /// The backend answered with GraphQL-level errors.
    #[error("GraphQL execution failed: {message}")]
    ExecutionFailed {
        /// The joined error messages from the response.
        message: String,
    },

    /// The backend answer did not have the expected shape.
    #[error("malformed response: {context}")]
    MalformedResponse {
        /// What was missing or misshapen.
        context: String,
    },
}

impl ProviderError {
    /// Wraps a parser failure per the documentation-fetch contract:
    /// status-carrying errors are rewrapped, others pass through
    /// unchanged.
    #[must_use]
    pub fn from_introspection(error: IntrospectionError) -> Self {
        match error.status {
            Some(status) => Self::Documentation { status },
            None => Self::Introspection(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_message_contains_the_status() {
        let error = ProviderError::Documentation { status: 404 };
        assert_eq!(error.to_string(), "Cannot fetch documentation: 404");
    }

    #[test]
    fn test_status_carrying_parser_error_is_rewrapped() {
        let error =
            ProviderError::from_introspection(IntrospectionError::with_status("gone", 410));
        assert!(matches!(error, ProviderError::Documentation { status: 410 }));
    }

    #[test]
    fn test_statusless_parser_error_passes_through_unchanged() {
        let error = ProviderError::from_introspection(IntrospectionError::new("dns failure"));
        match error {
            ProviderError::Introspection(inner) => {
                assert_eq!(inner.message, "dns failure");
                assert_eq!(inner.status, None);
            }
            other => panic!("expected Introspection, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_operation_names_kind_and_resource() {
        let error = ProviderError::UnsupportedOperation {
            kind: OperationKind::UpdateMany,
            resource: "Book".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("UPDATE_MANY"));
        assert!(message.contains("Book"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let error: &dyn std::error::Error = &ProviderError::Documentation { status: 500 };
        let _ = error;

        let introspection: &dyn std::error::Error = &IntrospectionError::new("test");
        let _ = introspection;
    }
}
