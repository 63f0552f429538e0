//! # GraphQL Data Provider
//!
//! A data provider adapter for resource-oriented GraphQL admin APIs,
//! translating the fixed admin-UI data-fetching contract (list, get-one,
//! get-many, get-many-by-reference, create, update, delete, update-many,
//! delete-many, plus introspection) onto backends whose operations are
//! named by simple pluralization/casing conventions.
//!
//! ## Overview
//!
//! This crate provides:
//! - A closed [`OperationKind`] enum with exhaustive-match dispatch
//! - Default operation-name derivation (`Book` → `books`, `book`,
//!   `createBook`, ...) via [`naming`]
//! - One-level-deep configuration override semantics via
//!   [`ProviderConfig`] and [`ProviderOptions`]
//! - Client-side emulation of `update_many`/`delete_many` as parallel
//!   single-item calls with input-order id aggregation
//! - A per-instance, retry-friendly introspection cache
//! - Bundled GraphQL defaults (transport, query builder, base provider,
//!   introspection schema parser) behind replaceable trait seams
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graphql_data_provider::{build, OperationParams, Resource};
//! use serde_json::json;
//!
//! let provider = build("https://example.com/graphql").await?;
//!
//! // Discover the backend's resources (cached after the first call).
//! let schema = provider.introspect().await?;
//!
//! // The nine admin operations.
//! let book = Resource::new("Book");
//! let page = provider.get_list(&book, OperationParams::new()).await?;
//! let one = provider
//!     .get_one(&book, OperationParams::new().id(json!(1)))
//!     .await?;
//! let gone = provider
//!     .delete_many(&book, OperationParams::new().ids([json!(1), json!(2)]))
//!     .await?;
//! assert_eq!(gone.data, json!([1, 2]));
//! ```
//!
//! ## Configuration
//!
//! Overrides replace defaults one level deep: overriding the whole
//! `introspection` key discards the default operation-name functions
//! along with it.
//!
//! ```rust,ignore
//! use graphql_data_provider::{build_with_options, ClientOptions, ProviderOptions};
//!
//! let provider = build_with_options(
//!     "https://example.com/graphql",
//!     ProviderOptions::new().client(
//!         ClientOptions::new("https://example.com/graphql")
//!             .header("Authorization", "Bearer token"),
//!     ),
//! )
//! .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the introspection cache lives on the provider
//!   instance, never in a process-wide variable
//! - **Exhaustive dispatch**: operation kinds are a closed enum, so an
//!   unhandled kind is a compile error
//! - **Faithful bulk semantics**: the fan-out has no concurrency cap, no
//!   cancellation, and no rollback; a failed bulk call means "unknown
//!   subset applied"
//! - **Thread-safe**: providers are `Send + Sync` and usable across
//!   async tasks
//! - **Async-first**: designed for the Tokio runtime

pub mod config;
pub mod error;
pub mod graphql;
pub mod naming;
pub mod operation;
pub mod params;
pub mod provider;
pub mod schema;

// Re-export public types at crate root for convenience
pub use config::{
    ClientOptions, IntrospectionOptions, OperationNameFn, ProviderConfig, ProviderOptions,
};
pub use error::{IntrospectionError, ProviderError};
pub use operation::OperationKind;
pub use params::{OperationParams, Pagination, SortDirection, SortOrder};
pub use provider::{
    build, build_with, build_with_options, BaseProvider, DataProvider, OperationResponse,
    ProviderFactory, SchemaParser,
};
pub use schema::{Api, CustomRoute, Field, IntrospectResult, IntrospectedApi, Resource};

// Re-export the bundled GraphQL collaborators
pub use graphql::{
    DefaultQueryBuilder, GraphqlHttpClient, GraphqlOperation, GraphqlProvider,
    GraphqlProviderFactory, GraphqlSchemaParser, HttpError, QueryBuilder,
};
