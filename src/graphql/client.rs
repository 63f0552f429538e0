//! Thin HTTP transport for GraphQL requests.
//!
//! This module provides [`GraphqlHttpClient`], which POSTs GraphQL
//! documents to a single entrypoint as `{"query": ..., "variables": ...}`
//! JSON bodies. It carries no retry, timeout, or cancellation logic;
//! those concerns belong to callers or to the HTTP stack underneath.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ClientOptions;
use crate::graphql::HttpError;

/// Crate version reported in the User-Agent header.
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async GraphQL transport bound to a single entrypoint.
///
/// # Thread Safety
///
/// `GraphqlHttpClient` is `Send + Sync` and cheap to clone; the
/// underlying connection pool is shared between clones.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_data_provider::{ClientOptions, GraphqlHttpClient};
///
/// let client = GraphqlHttpClient::new(
///     &ClientOptions::new("https://example.com/graphql").header("Authorization", "Bearer t"),
/// );
///
/// let body = client.execute("query { books { id title } }", None).await?;
/// println!("{}", body["data"]["books"]);
/// ```
#[derive(Debug, Clone)]
pub struct GraphqlHttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The entrypoint URI every request is POSTed to.
    uri: String,
    /// Headers sent with every request.
    default_headers: HashMap<String, String>,
}

// Verify GraphqlHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlHttpClient>();
};

impl GraphqlHttpClient {
    /// Creates a client for the entrypoint described by `options`.
    ///
    /// Caller-supplied headers are merged over the defaults and win on
    /// collision.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(options: &ClientOptions) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "User-Agent".to_string(),
            format!("graphql-data-provider v{PROVIDER_VERSION}"),
        );
        default_headers.extend(options.headers.clone());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            uri: options.uri.clone(),
            default_headers,
        }
    }

    /// Returns the entrypoint URI this client POSTs to.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a GraphQL document and returns the parsed JSON body.
    ///
    /// The body is returned as-is, `errors` array included; interpreting
    /// it is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] for non-2xx responses,
    /// [`HttpError::Network`] for connection failures, and
    /// [`HttpError::InvalidBody`] when the body is not valid JSON.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, HttpError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let mut request = self.client.post(&self.uri).json(&body);
        for (name, value) in &self.default_headers {
            request = request.header(name, value);
        }

        tracing::debug!(uri = %self.uri, "sending GraphQL request");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(HttpError::Response {
                code: status.as_u16(),
                message: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_stores_entrypoint_uri() {
        let client = GraphqlHttpClient::new(&ClientOptions::new("https://example.com/graphql"));
        assert_eq!(client.uri(), "https://example.com/graphql");
    }

    #[test]
    fn test_default_headers_include_accept_and_user_agent() {
        let client = GraphqlHttpClient::new(&ClientOptions::new("https://example.com/graphql"));

        assert_eq!(
            client.default_headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert!(client
            .default_headers()
            .get("User-Agent")
            .is_some_and(|agent| agent.contains(PROVIDER_VERSION)));
    }

    #[test]
    fn test_caller_headers_win_on_collision() {
        let options = ClientOptions::new("https://example.com/graphql")
            .header("Accept", "application/graphql-response+json")
            .header("Authorization", "Bearer token");
        let client = GraphqlHttpClient::new(&options);

        assert_eq!(
            client.default_headers().get("Accept").map(String::as_str),
            Some("application/graphql-response+json")
        );
        assert_eq!(
            client
                .default_headers()
                .get("Authorization")
                .map(String::as_str),
            Some("Bearer token")
        );
    }
}
