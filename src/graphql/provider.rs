//! Default base provider executing operations over the bundled transport.
//!
//! [`GraphqlProvider`] is what [`build`](crate::build) wires in when no
//! custom factory is supplied: it derives the backend operation name from
//! the configured per-kind functions, enforces the include/exclude
//! filters, executes the built document, and extracts
//! `data.<operationName>` from the response.

use std::fmt;

use serde_json::Value;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::graphql::GraphqlHttpClient;
use crate::operation::OperationKind;
use crate::params::OperationParams;
use crate::provider::{BaseProvider, OperationResponse, ProviderFactory};
use crate::schema::Resource;

/// [`BaseProvider`] for convention-following GraphQL backends.
#[derive(Clone)]
pub struct GraphqlProvider {
    client: GraphqlHttpClient,
    config: ProviderConfig,
}

impl GraphqlProvider {
    /// Creates a provider from a resolved configuration.
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        let client = GraphqlHttpClient::new(&config.client);
        Self { client, config }
    }

    /// Returns the resolved configuration this provider runs with.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl fmt::Debug for GraphqlProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphqlProvider")
            .field("uri", &self.client.uri())
            .finish_non_exhaustive()
    }
}

impl BaseProvider for GraphqlProvider {
    async fn execute(
        &self,
        kind: OperationKind,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        if !self.config.introspection.serves(&resource.name) {
            return Err(ProviderError::UnknownResource {
                resource: resource.name.clone(),
            });
        }

        let operation_name = self
            .config
            .introspection
            .operation_name(kind, resource)
            .ok_or_else(|| ProviderError::UnsupportedOperation {
                kind,
                resource: resource.name.clone(),
            })?;

        let operation =
            self.config
                .query_builder
                .build(kind, &operation_name, resource, &params);

        tracing::debug!(
            %kind,
            resource = %resource.name,
            operation = %operation_name,
            "executing GraphQL operation"
        );

        let body = self
            .client
            .execute(&operation.document, Some(operation.variables))
            .await?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let message = errors
                    .iter()
                    .filter_map(|error| error.get("message").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ProviderError::ExecutionFailed { message });
            }
        }

        let data = body
            .get("data")
            .and_then(|data| data.get(&operation_name))
            .cloned()
            .ok_or_else(|| ProviderError::MalformedResponse {
                context: format!("missing data.{operation_name} in response"),
            })?;

        let total = match &data {
            Value::Array(items) => Some(items.len() as u64),
            Value::Object(object) => object.get("totalCount").and_then(Value::as_u64),
            _ => None,
        };

        Ok(OperationResponse { data, total })
    }
}

/// Factory producing [`GraphqlProvider`]s; the default provider builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphqlProviderFactory;

impl ProviderFactory for GraphqlProviderFactory {
    type Provider = GraphqlProvider;

    async fn build(&self, config: ProviderConfig) -> Result<Self::Provider, ProviderError> {
        Ok(GraphqlProvider::new(config))
    }
}
