//! Query construction for convention-following GraphQL backends.
//!
//! The provider does not hardcode documents; it asks a [`QueryBuilder`]
//! to turn (kind, operation name, resource, params) into a document plus
//! variables. [`DefaultQueryBuilder`] targets the pluralization/casing
//! convention; backends with a different shape supply their own builder
//! via [`ProviderOptions::query_builder`](crate::ProviderOptions::query_builder).

use serde_json::{json, Map, Value};

use crate::operation::OperationKind;
use crate::params::OperationParams;
use crate::schema::Resource;

/// A GraphQL document plus its variables, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlOperation {
    /// The GraphQL document.
    pub document: String,
    /// The variables object.
    pub variables: Value,
}

/// Builds GraphQL documents for provider operations.
pub trait QueryBuilder: Send + Sync {
    /// Builds the document and variables for one operation.
    ///
    /// `operation_name` is the already-derived backend operation name
    /// (e.g. `books` or `createBook`).
    fn build(
        &self,
        kind: OperationKind,
        operation_name: &str,
        resource: &Resource,
        params: &OperationParams,
    ) -> GraphqlOperation;
}

/// Query builder for the default naming convention.
///
/// Collection reads accept `filter`, `sort`, and `pagination` variables;
/// mutations wrap their payload in an `input` object named
/// `<operationName>Input`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultQueryBuilder;

impl QueryBuilder for DefaultQueryBuilder {
    fn build(
        &self,
        kind: OperationKind,
        operation_name: &str,
        resource: &Resource,
        params: &OperationParams,
    ) -> GraphqlOperation {
        let op = operation_name;
        let selection = selection_set(resource);

        match kind {
            OperationKind::GetList | OperationKind::GetManyReference => {
                let filter = match kind {
                    OperationKind::GetManyReference => reference_filter(params),
                    _ => params.filter.clone().unwrap_or(Value::Null),
                };
                GraphqlOperation {
                    document: format!(
                        "query {op}($filter: JSON, $sort: JSON, $pagination: JSON) \
                         {{ {op}(filter: $filter, sort: $sort, pagination: $pagination) {{ {selection} }} }}"
                    ),
                    variables: json!({
                        "filter": filter,
                        "sort": serde_json::to_value(&params.sort).unwrap_or(Value::Null),
                        "pagination": serde_json::to_value(&params.pagination).unwrap_or(Value::Null),
                    }),
                }
            }
            OperationKind::GetOne => GraphqlOperation {
                document: format!("query {op}($id: ID!) {{ {op}(id: $id) {{ {selection} }} }}"),
                variables: json!({ "id": params.id.clone().unwrap_or(Value::Null) }),
            },
            OperationKind::GetMany => GraphqlOperation {
                document: format!(
                    "query {op}($ids: [ID!]!) {{ {op}(ids: $ids) {{ {selection} }} }}"
                ),
                variables: json!({ "ids": params.ids.clone() }),
            },
            OperationKind::Create => GraphqlOperation {
                document: format!(
                    "mutation {op}($input: {op}Input!) {{ {op}(input: $input) {{ {selection} }} }}"
                ),
                variables: json!({ "input": params.data.clone().unwrap_or(Value::Null) }),
            },
            OperationKind::Update => GraphqlOperation {
                document: format!(
                    "mutation {op}($input: {op}Input!) {{ {op}(input: $input) {{ {selection} }} }}"
                ),
                variables: json!({ "input": update_input(params) }),
            },
            OperationKind::Delete => GraphqlOperation {
                document: format!(
                    "mutation {op}($input: {op}Input!) {{ {op}(input: $input) {{ id }} }}"
                ),
                variables: json!({
                    "input": { "id": params.id.clone().unwrap_or(Value::Null) }
                }),
            },
            // The provider emulates these, so they only get here through a
            // configuration that names a native bulk operation.
            OperationKind::UpdateMany => GraphqlOperation {
                document: format!(
                    "mutation {op}($ids: [ID!]!, $input: {op}Input!) \
                     {{ {op}(ids: $ids, input: $input) {{ id }} }}"
                ),
                variables: json!({
                    "ids": params.ids.clone(),
                    "input": params.data.clone().unwrap_or(Value::Null),
                }),
            },
            OperationKind::DeleteMany => GraphqlOperation {
                document: format!(
                    "mutation {op}($ids: [ID!]!) {{ {op}(ids: $ids) {{ id }} }}"
                ),
                variables: json!({ "ids": params.ids.clone() }),
            },
        }
    }
}

/// The selection set for a resource: its known fields, or `id` when the
/// schema source exposed none.
fn selection_set(resource: &Resource) -> String {
    if resource.fields.is_empty() {
        "id".to_string()
    } else {
        resource
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Folds the reference target into the caller's filter.
fn reference_filter(params: &OperationParams) -> Value {
    let mut filter = match params.filter.clone() {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    if let Some(target) = &params.target {
        filter.insert(
            target.clone(),
            params.target_id.clone().unwrap_or(Value::Null),
        );
    }
    Value::Object(filter)
}

/// The update payload with the id folded in.
fn update_input(params: &OperationParams) -> Value {
    let mut input = match params.data.clone() {
        Some(Value::Object(map)) => map,
        Some(other) => return other,
        None => Map::new(),
    };
    if let Some(id) = &params.id {
        input.insert("id".to_string(), id.clone());
    }
    Value::Object(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Pagination, SortOrder};
    use crate::schema::Field;

    fn book() -> Resource {
        Resource::new("Book").with_fields(vec![Field::new("id"), Field::new("title")])
    }

    #[test]
    fn test_get_one_document_and_variables() {
        let params = OperationParams::new().id(serde_json::json!("b-1"));
        let operation =
            DefaultQueryBuilder.build(OperationKind::GetOne, "book", &book(), &params);

        assert_eq!(
            operation.document,
            "query book($id: ID!) { book(id: $id) { id title } }"
        );
        assert_eq!(operation.variables, json!({"id": "b-1"}));
    }

    #[test]
    fn test_get_list_passes_filter_sort_and_pagination() {
        let params = OperationParams::new()
            .filter(json!({"published": true}))
            .sort(SortOrder::ascending("title"))
            .pagination(Pagination { page: 2, per_page: 10 });
        let operation =
            DefaultQueryBuilder.build(OperationKind::GetList, "books", &book(), &params);

        assert!(operation.document.starts_with("query books("));
        assert_eq!(
            operation.variables,
            json!({
                "filter": {"published": true},
                "sort": {"field": "title", "order": "ASC"},
                "pagination": {"page": 2, "per_page": 10},
            })
        );
    }

    #[test]
    fn test_get_many_reference_folds_target_into_filter() {
        let params = OperationParams::new()
            .filter(json!({"published": true}))
            .reference("authorId", json!(7));
        let operation = DefaultQueryBuilder.build(
            OperationKind::GetManyReference,
            "books",
            &book(),
            &params,
        );

        assert_eq!(
            operation.variables["filter"],
            json!({"published": true, "authorId": 7})
        );
    }

    #[test]
    fn test_get_many_sends_the_ids() {
        let params = OperationParams::new().ids([json!(1), json!(2)]);
        let operation =
            DefaultQueryBuilder.build(OperationKind::GetMany, "books", &book(), &params);

        assert!(operation.document.contains("$ids: [ID!]!"));
        assert_eq!(operation.variables, json!({"ids": [1, 2]}));
    }

    #[test]
    fn test_create_wraps_payload_as_input() {
        let params = OperationParams::new().data(json!({"title": "New"}));
        let operation =
            DefaultQueryBuilder.build(OperationKind::Create, "createBook", &book(), &params);

        assert!(operation.document.starts_with("mutation createBook("));
        assert!(operation.document.contains("$input: createBookInput!"));
        assert_eq!(operation.variables, json!({"input": {"title": "New"}}));
    }

    #[test]
    fn test_update_folds_id_into_input() {
        let params = OperationParams::new()
            .id(json!("b-1"))
            .data(json!({"title": "Renamed"}));
        let operation =
            DefaultQueryBuilder.build(OperationKind::Update, "updateBook", &book(), &params);

        assert_eq!(
            operation.variables,
            json!({"input": {"id": "b-1", "title": "Renamed"}})
        );
    }

    #[test]
    fn test_delete_selects_only_the_id() {
        let params = OperationParams::new().id(json!("b-1"));
        let operation =
            DefaultQueryBuilder.build(OperationKind::Delete, "deleteBook", &book(), &params);

        assert_eq!(
            operation.document,
            "mutation deleteBook($input: deleteBookInput!) { deleteBook(input: $input) { id } }"
        );
        assert_eq!(operation.variables, json!({"input": {"id": "b-1"}}));
    }

    #[test]
    fn test_selection_falls_back_to_id_without_fields() {
        let bare = Resource::new("Book");
        let operation = DefaultQueryBuilder.build(
            OperationKind::GetOne,
            "book",
            &bare,
            &OperationParams::new().id(json!(1)),
        );

        assert!(operation.document.contains("{ id }"));
    }
}
