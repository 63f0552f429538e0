//! Per-call parameters passed to provider operations.
//!
//! Parameters are owned by the caller and read once per call; the
//! provider never retains them beyond the call, except the `ids` list of
//! a bulk operation, which is destructured and iterated for the fan-out.
//! Ids and payloads are [`serde_json::Value`] so the adapter stays
//! agnostic of backend id and record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Sort order for list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// The field to sort by.
    pub field: String,
    /// The direction to sort in.
    pub order: SortDirection,
}

impl SortOrder {
    /// Creates an ascending sort on `field`.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Asc,
        }
    }

    /// Creates a descending sort on `field`.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortDirection::Desc,
        }
    }
}

/// Page-based pagination for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
}

/// Parameters for a single provider call.
///
/// Only the fields relevant to the operation kind are read; the rest are
/// ignored. The struct is `Clone` because bulk emulation derives one
/// single-id parameter set per id via [`with_id`](Self::with_id).
///
/// # Example
///
/// ```rust
/// use graphql_data_provider::{OperationParams, Pagination, SortOrder};
/// use serde_json::json;
///
/// let params = OperationParams::new()
///     .filter(json!({"published": true}))
///     .sort(SortOrder::descending("createdAt"))
///     .pagination(Pagination { page: 1, per_page: 25 });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationParams {
    /// The record id, for single-record operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Record ids, for `get_many` and the bulk operations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Value>,
    /// The record payload, for `create` and `update`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// The record as it was before the change, when the caller has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_data: Option<Value>,
    /// Filter expression for list operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Sort order for list operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Pagination for list operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Referencing field name, for `get_many_reference`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Referenced record id, for `get_many_reference`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Value>,
    /// Free-form extra parameters the caller wants passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl OperationParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record id.
    #[must_use]
    pub fn id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the record ids.
    #[must_use]
    pub fn ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the record payload.
    #[must_use]
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the previous record payload.
    #[must_use]
    pub fn previous_data(mut self, data: Value) -> Self {
        self.previous_data = Some(data);
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the pagination.
    #[must_use]
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Sets the reference target field and id.
    #[must_use]
    pub fn reference(mut self, target: impl Into<String>, target_id: impl Into<Value>) -> Self {
        self.target = Some(target.into());
        self.target_id = Some(target_id.into());
        self
    }

    /// Sets the free-form extra parameters.
    #[must_use]
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Clone of these params carrying a single id and an empty ids list,
    /// as used by the per-item calls of a bulk fan-out.
    #[must_use]
    pub fn with_id(&self, id: Value) -> Self {
        let mut single = self.clone();
        single.ids = Vec::new();
        single.id = Some(id);
        single
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_id_moves_one_id_and_keeps_the_rest() {
        let params = OperationParams::new()
            .ids([json!(1), json!(2)])
            .data(json!({"title": "Updated"}));

        let single = params.with_id(json!(2));

        assert_eq!(single.id, Some(json!(2)));
        assert!(single.ids.is_empty());
        assert_eq!(single.data, Some(json!({"title": "Updated"})));
        // the originals are untouched
        assert_eq!(params.ids, vec![json!(1), json!(2)]);
        assert!(params.id.is_none());
    }

    #[test]
    fn test_empty_params_serialize_to_empty_object() {
        let json = serde_json::to_value(OperationParams::new()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_sort_direction_serializes_uppercase() {
        let sort = SortOrder::descending("createdAt");
        let json = serde_json::to_value(&sort).unwrap();
        assert_eq!(json, json!({"field": "createdAt", "order": "DESC"}));
    }

    #[test]
    fn test_reference_sets_target_and_id() {
        let params = OperationParams::new().reference("authorId", json!(7));
        assert_eq!(params.target.as_deref(), Some("authorId"));
        assert_eq!(params.target_id, Some(json!(7)));
    }
}
