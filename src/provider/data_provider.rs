//! Operation dispatch, bulk emulation, and the introspection cache.

use std::mem;
use std::sync::RwLock;

use futures::future::join_all;
use serde_json::Value;

use crate::error::ProviderError;
use crate::operation::OperationKind;
use crate::params::OperationParams;
use crate::provider::{BaseProvider, OperationResponse, SchemaParser};
use crate::schema::{Api, IntrospectResult, IntrospectedApi, Resource};

/// Data provider for resource-oriented GraphQL backends.
///
/// Exposes the nine admin operations plus
/// [`introspect`](Self::introspect). Seven operations pass straight
/// through to the wrapped base provider; [`update_many`](Self::update_many)
/// and [`delete_many`](Self::delete_many) are emulated by fanning out one
/// single-item call per id and aggregating the returned ids.
///
/// # Thread Safety
///
/// `DataProvider` is `Send + Sync` when its base provider and schema
/// parser are; the introspection cache is owned by the instance, so two
/// providers never share schema state.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_data_provider::{build, OperationParams, Resource};
/// use serde_json::json;
///
/// let provider = build("https://example.com/graphql").await?;
/// let book = Resource::new("Book");
///
/// let one = provider
///     .get_one(&book, OperationParams::new().id(json!(1)))
///     .await?;
///
/// // One DELETE-equivalent mutation per id, ids returned in input order.
/// let deleted = provider
///     .delete_many(&book, OperationParams::new().ids([json!(1), json!(2)]))
///     .await?;
/// assert_eq!(deleted.data, json!([1, 2]));
/// ```
#[derive(Debug)]
pub struct DataProvider<P, S> {
    entrypoint: String,
    base: P,
    schema_parser: S,
    /// Introspection cache; `None` until the first successful fetch.
    api_schema: RwLock<Option<Api>>,
}

// Verify the default provider assembly is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<
        DataProvider<crate::graphql::GraphqlProvider, crate::graphql::GraphqlSchemaParser>,
    >();
};

impl<P: BaseProvider, S: SchemaParser> DataProvider<P, S> {
    /// Wraps a base provider and schema parser for `entrypoint`.
    #[must_use]
    pub fn new(entrypoint: impl Into<String>, base: P, schema_parser: S) -> Self {
        Self {
            entrypoint: entrypoint.into(),
            base,
            schema_parser,
            api_schema: RwLock::new(None),
        }
    }

    /// Returns the entrypoint this provider is bound to.
    #[must_use]
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    /// Fetches a filtered, sorted, paginated page of records.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn get_list(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::GetList, resource, params).await
    }

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn get_one(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::GetOne, resource, params).await
    }

    /// Fetches several records by id in one call.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn get_many(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::GetMany, resource, params).await
    }

    /// Fetches the records referencing another record.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn get_many_reference(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::GetManyReference, resource, params)
            .await
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn create(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::Create, resource, params).await
    }

    /// Updates a record.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn update(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::Update, resource, params).await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged.
    pub async fn delete(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::Delete, resource, params).await
    }

    /// Updates every record named in `params.ids`.
    ///
    /// Emulated: one update call per id, all issued concurrently. The
    /// response data is the list of updated ids in input order. There is
    /// no atomicity across the fan-out; see [`delete_many`](Self::delete_many).
    ///
    /// # Errors
    ///
    /// Rejects with the first per-id error, in input order. Some updates
    /// may already have taken effect; callers must treat a failed bulk
    /// call as "unknown subset applied".
    pub async fn update_many(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::UpdateMany, resource, params)
            .await
    }

    /// Deletes every record named in `params.ids`.
    ///
    /// Emulated: one delete call per id, all issued concurrently. The
    /// response data is the list of deleted ids in input order, not the
    /// deleted records.
    ///
    /// # Errors
    ///
    /// Rejects with the first per-id error, in input order. Completed
    /// deletes are not rolled back.
    pub async fn delete_many(
        &self,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        self.execute(OperationKind::DeleteMany, resource, params)
            .await
    }

    /// Dispatches one operation: the emulated bulk kinds fan out, the
    /// rest pass through to the base provider verbatim.
    ///
    /// # Errors
    ///
    /// Propagates the base provider's error unchanged; for bulk kinds,
    /// the first per-id error in input order.
    pub async fn execute(
        &self,
        kind: OperationKind,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        match kind {
            OperationKind::UpdateMany => {
                self.fan_out(OperationKind::Update, resource, params).await
            }
            OperationKind::DeleteMany => {
                self.fan_out(OperationKind::Delete, resource, params).await
            }
            OperationKind::GetList
            | OperationKind::GetOne
            | OperationKind::GetMany
            | OperationKind::GetManyReference
            | OperationKind::Create
            | OperationKind::Update
            | OperationKind::Delete => self.base.execute(kind, resource, params).await,
        }
    }

    /// The backend has no bulk operations, so each id gets its own
    /// single-item call. All calls are started before any completes and
    /// all run to completion; a failed sibling does not cancel the rest.
    /// The aggregated id list follows the input order, not completion
    /// order.
    async fn fan_out(
        &self,
        kind: OperationKind,
        resource: &Resource,
        params: OperationParams,
    ) -> Result<OperationResponse, ProviderError> {
        let mut rest = params;
        let ids = mem::take(&mut rest.ids);

        tracing::debug!(
            %kind,
            resource = %resource.name,
            count = ids.len(),
            "emulating bulk operation"
        );

        let calls = ids
            .iter()
            .map(|id| self.base.execute(kind, resource, rest.with_id(id.clone())));
        let results = join_all(calls).await;

        let mut data = Vec::with_capacity(results.len());
        for result in results {
            let response = result?;
            data.push(response.data.get("id").cloned().unwrap_or(Value::Null));
        }

        Ok(OperationResponse {
            data: Value::Array(data),
            total: None,
        })
    }

    /// Returns the API description, fetching it on the first call and
    /// serving this instance's cache afterwards.
    ///
    /// Cache hits omit `custom_routes`; only the first successful fetch
    /// exposes them. A failed fetch leaves the cache empty, so the next
    /// call retries instead of failing permanently. Two concurrent first
    /// calls may both fetch; the duplicate write is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Documentation`] when the parser failure
    /// carries a transport status, otherwise the parser's error
    /// unchanged.
    pub async fn introspect(&self) -> Result<IntrospectResult, ProviderError> {
        if let Some(api) = self.cached_schema() {
            tracing::debug!(entrypoint = %self.entrypoint, "introspection cache hit");
            return Ok(IntrospectResult {
                data: api,
                custom_routes: None,
            });
        }

        let IntrospectedApi { api, custom_routes } = self
            .schema_parser
            .parse(&self.entrypoint)
            .await
            .map_err(|error| {
                tracing::warn!(entrypoint = %self.entrypoint, %error, "introspection failed");
                ProviderError::from_introspection(error)
            })?;

        if let Ok(mut cache) = self.api_schema.write() {
            *cache = Some(api.clone());
        }

        Ok(IntrospectResult {
            data: api,
            custom_routes: Some(custom_routes),
        })
    }

    fn cached_schema(&self) -> Option<Api> {
        self.api_schema.read().ok().and_then(|cache| cache.clone())
    }
}
