//! Transport error types for the bundled GraphQL client.
//!
//! # Error Handling
//!
//! The transport distinguishes three failure scenarios:
//!
//! - [`HttpError::Response`]: non-2xx HTTP responses from the backend
//! - [`HttpError::Network`]: connection-level failures
//! - [`HttpError::InvalidBody`]: responses that are not valid JSON
//!
//! GraphQL-level errors (the `errors` array of a 200 response) are not
//! transport errors; the provider layer surfaces those as
//! [`ProviderError::ExecutionFailed`](crate::ProviderError::ExecutionFailed).

use thiserror::Error;

/// Unified error type for HTTP-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response from the backend.
    #[error("HTTP {code}: {message}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// The raw response body.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl HttpError {
    /// The HTTP status code, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { code, .. } => Some(*code),
            Self::Network(error) => error.status().map(|status| status.as_u16()),
            Self::InvalidBody(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_display_includes_code_and_body() {
        let error = HttpError::Response {
            code: 503,
            message: "upstream unavailable".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("upstream unavailable"));
    }

    #[test]
    fn test_response_error_exposes_status() {
        let error = HttpError::Response {
            code: 404,
            message: "not found".to_string(),
        };
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_invalid_body_has_no_status() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = HttpError::InvalidBody(parse_error);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &HttpError::Response {
            code: 400,
            message: "test".to_string(),
        };
        let _ = error;
    }
}
