//! Bundled GraphQL collaborators: transport, query building, the default
//! base provider, and introspection-based schema parsing.
//!
//! Everything here is replaceable. The dispatch layer in
//! [`provider`](crate::provider) only depends on the [`BaseProvider`],
//! [`ProviderFactory`], and [`SchemaParser`] traits; this module supplies
//! the implementations [`build`](crate::build) wires in by default.
//!
//! [`BaseProvider`]: crate::BaseProvider
//! [`ProviderFactory`]: crate::ProviderFactory
//! [`SchemaParser`]: crate::SchemaParser

mod client;
mod errors;
mod introspection;
mod provider;
mod query_builder;

pub use client::{GraphqlHttpClient, PROVIDER_VERSION};
pub use errors::HttpError;
pub use introspection::GraphqlSchemaParser;
pub use provider::{GraphqlProvider, GraphqlProviderFactory};
pub use query_builder::{DefaultQueryBuilder, GraphqlOperation, QueryBuilder};
