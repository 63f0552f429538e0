//! Provider configuration: defaults, overrides, and merge semantics.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ProviderConfig`]: the resolved configuration handed to a provider factory
//! - [`ProviderOptions`]: caller-supplied overrides, every field optional
//! - [`IntrospectionOptions`]: per-kind operation-name functions and resource filters
//! - [`ClientOptions`]: transport settings derived from the entrypoint
//!
//! # Merge semantics
//!
//! Overrides are applied ONE LEVEL DEEP: a set field in
//! [`ProviderOptions`] replaces the whole default value for that key.
//! There is no deep merge. In particular, overriding `introspection`
//! wholesale discards the default operation-name functions along with
//! it; callers who only want to add an include filter must start from
//! [`IntrospectionOptions::default()`] and mutate that.
//!
//! # Example
//!
//! ```rust
//! use graphql_data_provider::{ClientOptions, ProviderConfig, ProviderOptions};
//!
//! let config = ProviderConfig::new("https://example.com/graphql").apply(
//!     ProviderOptions::new()
//!         .client(ClientOptions::new("https://staging.example.com/graphql")),
//! );
//!
//! // The client options were replaced; the naming defaults were not.
//! assert_eq!(config.client.uri, "https://staging.example.com/graphql");
//! assert_eq!(config.introspection.operation_names.len(), 7);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::graphql::{DefaultQueryBuilder, QueryBuilder};
use crate::naming::default_operation_name;
use crate::operation::OperationKind;
use crate::schema::Resource;

/// Function deriving a GraphQL operation name from a resource.
pub type OperationNameFn = Arc<dyn Fn(&Resource) -> String + Send + Sync>;

/// Introspection-related options: operation naming and resource filters.
///
/// The default carries a name function for each of the seven natively
/// served kinds and no filters. The emulated bulk kinds have no entry;
/// they are synthesized client-side and never named.
#[derive(Clone)]
pub struct IntrospectionOptions {
    /// Per-kind operation-name functions. A kind with no entry cannot be
    /// served by the base provider.
    pub operation_names: HashMap<OperationKind, OperationNameFn>,
    /// When set, only these resources are served.
    pub include: Option<Vec<String>>,
    /// When set, these resources are never served.
    pub exclude: Option<Vec<String>>,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        let mut operation_names: HashMap<OperationKind, OperationNameFn> = HashMap::new();
        for kind in OperationKind::ALL {
            if kind.is_emulated() {
                continue;
            }
            operation_names.insert(
                kind,
                Arc::new(move |resource: &Resource| {
                    default_operation_name(kind, resource).unwrap_or_default()
                }),
            );
        }

        Self {
            operation_names,
            include: None,
            exclude: None,
        }
    }
}

impl IntrospectionOptions {
    /// Applies the configured name function for `kind` to `resource`.
    ///
    /// Returns `None` when no function is configured for the kind.
    #[must_use]
    pub fn operation_name(&self, kind: OperationKind, resource: &Resource) -> Option<String> {
        self.operation_names.get(&kind).map(|derive| derive(resource))
    }

    /// Whether `resource` passes the include/exclude filters.
    ///
    /// An `exclude` entry always wins; with an `include` list present,
    /// only listed resources are served; with neither, everything is.
    #[must_use]
    pub fn serves(&self, resource: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.iter().any(|name| name == resource) {
                return false;
            }
        }
        if let Some(include) = &self.include {
            return include.iter().any(|name| name == resource);
        }
        true
    }

    /// Sets the include filter.
    #[must_use]
    pub fn include<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.include = Some(resources.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the exclude filter.
    #[must_use]
    pub fn exclude<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exclude = Some(resources.into_iter().map(Into::into).collect());
        self
    }
}

impl fmt::Debug for IntrospectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&'static str> = self
            .operation_names
            .keys()
            .map(|kind| kind.as_str())
            .collect();
        kinds.sort_unstable();

        f.debug_struct("IntrospectionOptions")
            .field("operation_names", &kinds)
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .finish()
    }
}

/// Transport options handed to the base provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base network address of the backend API. Not validated here;
    /// validation is delegated to the transport.
    pub uri: String,
    /// Extra headers sent with every request (e.g. authorization).
    pub headers: HashMap<String, String>,
}

impl ClientOptions {
    /// Creates options pointing at `uri` with no extra headers.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// The resolved provider configuration.
///
/// Built from defaults via [`ProviderConfig::new`] and layered with
/// caller overrides via [`ProviderConfig::apply`], then handed to the
/// provider factory.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Builds GraphQL documents for operations.
    pub query_builder: Arc<dyn QueryBuilder>,
    /// Operation naming and resource filters.
    pub introspection: IntrospectionOptions,
    /// Transport settings.
    pub client: ClientOptions,
}

impl ProviderConfig {
    /// Builds the default configuration for `entrypoint`.
    #[must_use]
    pub fn new(entrypoint: impl Into<String>) -> Self {
        Self {
            query_builder: Arc::new(DefaultQueryBuilder),
            introspection: IntrospectionOptions::default(),
            client: ClientOptions::new(entrypoint),
        }
    }

    /// Layers caller overrides over this configuration, one level deep.
    ///
    /// A set field replaces the whole default for that key; unset fields
    /// leave the default untouched.
    #[must_use]
    pub fn apply(mut self, options: ProviderOptions) -> Self {
        if let Some(query_builder) = options.query_builder {
            self.query_builder = query_builder;
        }
        if let Some(introspection) = options.introspection {
            self.introspection = introspection;
        }
        if let Some(client) = options.client {
            self.client = client;
        }
        self
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("introspection", &self.introspection)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Caller-supplied configuration overrides.
///
/// Every field is optional; see the module documentation for the
/// one-level-deep merge semantics.
#[derive(Clone, Default)]
pub struct ProviderOptions {
    /// Replaces the default query builder.
    pub query_builder: Option<Arc<dyn QueryBuilder>>,
    /// Replaces the default introspection options wholesale, including
    /// the default operation-name functions.
    pub introspection: Option<IntrospectionOptions>,
    /// Replaces the entrypoint-derived client options.
    pub client: Option<ClientOptions>,
}

impl ProviderOptions {
    /// Creates empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query builder override.
    #[must_use]
    pub fn query_builder(mut self, query_builder: Arc<dyn QueryBuilder>) -> Self {
        self.query_builder = Some(query_builder);
        self
    }

    /// Sets the introspection override.
    #[must_use]
    pub fn introspection(mut self, introspection: IntrospectionOptions) -> Self {
        self.introspection = Some(introspection);
        self
    }

    /// Sets the client override.
    #[must_use]
    pub fn client(mut self, client: ClientOptions) -> Self {
        self.client = Some(client);
        self
    }
}

impl fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("query_builder", &self.query_builder.as_ref().map(|_| "<custom>"))
            .field("introspection", &self.introspection)
            .field("client", &self.client)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_name_the_seven_native_kinds() {
        let options = IntrospectionOptions::default();
        assert_eq!(options.operation_names.len(), 7);
        assert!(!options.operation_names.contains_key(&OperationKind::UpdateMany));
        assert!(!options.operation_names.contains_key(&OperationKind::DeleteMany));
    }

    #[test]
    fn test_default_name_functions_follow_the_convention() {
        let options = IntrospectionOptions::default();
        let book = Resource::new("Book");

        assert_eq!(
            options.operation_name(OperationKind::GetList, &book).as_deref(),
            Some("books")
        );
        assert_eq!(
            options.operation_name(OperationKind::Delete, &book).as_deref(),
            Some("deleteBook")
        );
        assert_eq!(options.operation_name(OperationKind::DeleteMany, &book), None);
    }

    #[test]
    fn test_serves_without_filters_allows_everything() {
        let options = IntrospectionOptions::default();
        assert!(options.serves("Book"));
        assert!(options.serves("Anything"));
    }

    #[test]
    fn test_include_filter_restricts_to_listed_resources() {
        let options = IntrospectionOptions::default().include(["Book"]);
        assert!(options.serves("Book"));
        assert!(!options.serves("Review"));
    }

    #[test]
    fn test_exclude_filter_wins() {
        let options = IntrospectionOptions::default()
            .include(["Book", "Review"])
            .exclude(["Review"]);
        assert!(options.serves("Book"));
        assert!(!options.serves("Review"));
    }

    #[test]
    fn test_apply_with_empty_options_keeps_defaults() {
        let config =
            ProviderConfig::new("https://example.com/graphql").apply(ProviderOptions::new());

        assert_eq!(config.client.uri, "https://example.com/graphql");
        assert_eq!(config.introspection.operation_names.len(), 7);
    }

    #[test]
    fn test_client_override_leaves_naming_defaults_intact() {
        let config = ProviderConfig::new("https://example.com/graphql").apply(
            ProviderOptions::new()
                .client(ClientOptions::new("https://other.example.com/graphql")),
        );

        assert_eq!(config.client.uri, "https://other.example.com/graphql");
        assert_eq!(config.introspection.operation_names.len(), 7);
        assert_eq!(
            config
                .introspection
                .operation_name(OperationKind::Create, &Resource::new("Book"))
                .as_deref(),
            Some("createBook")
        );
    }

    #[test]
    fn test_introspection_override_replaces_naming_defaults_wholesale() {
        let bare = IntrospectionOptions {
            operation_names: HashMap::new(),
            include: None,
            exclude: None,
        };
        let config = ProviderConfig::new("https://example.com/graphql")
            .apply(ProviderOptions::new().introspection(bare));

        // The documented footgun: the defaults are gone, not merged.
        assert!(config.introspection.operation_names.is_empty());
        assert_eq!(
            config
                .introspection
                .operation_name(OperationKind::GetList, &Resource::new("Book")),
            None
        );
    }

    #[test]
    fn test_client_options_collect_headers() {
        let options = ClientOptions::new("https://example.com/graphql")
            .header("Authorization", "Bearer token")
            .header("X-Tenant", "acme");

        assert_eq!(
            options.headers.get("Authorization").map(String::as_str),
            Some("Bearer token")
        );
        assert_eq!(options.headers.len(), 2);
    }
}
