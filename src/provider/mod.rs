//! Provider contract: traits, responses, and construction entry points.
//!
//! # Overview
//!
//! - [`BaseProvider`]: executes one operation against the backend
//! - [`ProviderFactory`]: builds a base provider from a resolved configuration
//! - [`SchemaParser`]: fetches and parses the API description
//! - [`DataProvider`]: the dispatcher wrapping all three
//! - [`build`] / [`build_with_options`] / [`build_with`]: constructors
//!
//! The traits are the injection seams: tests and non-GraphQL backends
//! implement them directly, while [`build`] wires in the bundled GraphQL
//! defaults from [`graphql`](crate::graphql).

mod data_provider;

pub use data_provider::DataProvider;

use serde_json::Value;

use crate::config::{ProviderConfig, ProviderOptions};
use crate::error::{IntrospectionError, ProviderError};
use crate::graphql::{GraphqlProvider, GraphqlProviderFactory, GraphqlSchemaParser};
use crate::operation::OperationKind;
use crate::params::OperationParams;
use crate::schema::{IntrospectedApi, Resource};

/// Result of one provider operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationResponse {
    /// The payload: a record, a record list, or an id list for bulk
    /// operations.
    pub data: Value,
    /// Total record count for paginated lists, when the backend reports
    /// one.
    pub total: Option<u64>,
}

/// Executes one operation against the backend.
///
/// Implementations receive the seven natively served kinds only when
/// driven through [`DataProvider`]; the emulated bulk kinds are expanded
/// before they get here.
#[allow(async_fn_in_trait)]
pub trait BaseProvider: Send + Sync {
    /// Executes `kind` for `resource` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the operation cannot be executed or
    /// the backend reports a failure.
    async fn execute(
        &self,
        kind: OperationKind,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError>;
}

/// Builds a base provider from a resolved configuration.
#[allow(async_fn_in_trait)]
pub trait ProviderFactory {
    /// The provider type this factory produces.
    type Provider: BaseProvider;

    /// Builds the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider cannot be constructed.
    async fn build(&self, config: ProviderConfig) -> Result<Self::Provider, ProviderError>;
}

/// Fetches and parses the API description for an entrypoint.
#[allow(async_fn_in_trait)]
pub trait SchemaParser: Send + Sync {
    /// Parses the API description behind `entrypoint`.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectionError`], carrying the transport status code
    /// when the failure came from an HTTP response.
    async fn parse(&self, entrypoint: &str) -> Result<IntrospectedApi, IntrospectionError>;
}

/// Builds a provider for `entrypoint` with the bundled GraphQL defaults.
///
/// # Errors
///
/// Returns [`ProviderError`] when the base provider cannot be
/// constructed.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_data_provider::{build, OperationParams, Resource};
/// use serde_json::json;
///
/// let provider = build("https://example.com/graphql").await?;
///
/// let schema = provider.introspect().await?;
/// let books = provider
///     .get_list(&Resource::new("Book"), OperationParams::new())
///     .await?;
/// let deleted = provider
///     .delete_many(
///         &Resource::new("Book"),
///         OperationParams::new().ids([json!(1), json!(2)]),
///     )
///     .await?;
/// ```
pub async fn build(
    entrypoint: impl Into<String>,
) -> Result<DataProvider<GraphqlProvider, GraphqlSchemaParser>, ProviderError> {
    build_with_options(entrypoint, ProviderOptions::new()).await
}

/// Builds a provider with the bundled defaults plus caller overrides.
///
/// # Errors
///
/// Returns [`ProviderError`] when the base provider cannot be
/// constructed.
pub async fn build_with_options(
    entrypoint: impl Into<String>,
    options: ProviderOptions,
) -> Result<DataProvider<GraphqlProvider, GraphqlSchemaParser>, ProviderError> {
    build_with(entrypoint, GraphqlSchemaParser, options, GraphqlProviderFactory).await
}

/// Builds a provider from explicit collaborators.
///
/// The configuration is resolved by layering `options` over the defaults
/// for `entrypoint` one level deep, then handed to `factory`; the
/// resulting base provider and `schema_parser` are wrapped in a
/// [`DataProvider`].
///
/// # Errors
///
/// Returns [`ProviderError`] when `factory` fails to build the base
/// provider.
pub async fn build_with<S, F>(
    entrypoint: impl Into<String>,
    schema_parser: S,
    options: ProviderOptions,
    factory: F,
) -> Result<DataProvider<F::Provider, S>, ProviderError>
where
    S: SchemaParser,
    F: ProviderFactory,
{
    let entrypoint = entrypoint.into();
    let config = ProviderConfig::new(entrypoint.clone()).apply(options);
    let base = factory.build(config).await?;
    Ok(DataProvider::new(entrypoint, base, schema_parser))
}
