//! Default schema parser using GraphQL introspection.
//!
//! Runs the standard introspection query against the entrypoint and maps
//! object types to [`Resource`]s, skipping introspection internals and
//! the root operation types. Field types are unwrapped through non-null
//! and list wrappers to their named type; fields whose named type is
//! itself an object type are marked as references.

use serde_json::Value;

use crate::config::ClientOptions;
use crate::error::IntrospectionError;
use crate::graphql::GraphqlHttpClient;
use crate::provider::SchemaParser;
use crate::schema::{Api, Field, IntrospectedApi, Resource};

/// The document sent to the backend to discover its schema.
const INTROSPECTION_QUERY: &str = "\
query IntrospectionQuery { __schema { \
queryType { name } mutationType { name } subscriptionType { name } \
types { kind name fields { name type { kind name ofType { kind name ofType { kind name } } } } } \
} }";

/// Default [`SchemaParser`]: introspects the entrypoint over HTTP.
///
/// A non-2xx response yields an [`IntrospectionError`] carrying the
/// status code, which the provider rewraps into its documentation-fetch
/// error; transport failures carry no status and pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphqlSchemaParser;

impl SchemaParser for GraphqlSchemaParser {
    async fn parse(&self, entrypoint: &str) -> Result<IntrospectedApi, IntrospectionError> {
        let client = GraphqlHttpClient::new(&ClientOptions::new(entrypoint));

        let body = client
            .execute(INTROSPECTION_QUERY, None)
            .await
            .map_err(|error| match error.status() {
                Some(status) => IntrospectionError::with_status(error.to_string(), status),
                None => IntrospectionError::new(error.to_string()),
            })?;

        let schema = body
            .get("data")
            .and_then(|data| data.get("__schema"))
            .ok_or_else(|| {
                IntrospectionError::new("introspection response is missing data.__schema")
            })?;

        let roots = root_type_names(schema);
        let types: Vec<Value> = schema
            .get("types")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let object_names: Vec<String> = types
            .iter()
            .filter_map(|ty| object_type_name(ty, &roots))
            .collect();
        let resources = types
            .iter()
            .filter(|ty| object_type_name(ty, &roots).is_some())
            .map(|ty| map_resource(ty, &object_names))
            .collect();

        Ok(IntrospectedApi {
            api: Api {
                entrypoint: entrypoint.to_string(),
                resources,
            },
            custom_routes: Vec::new(),
        })
    }
}

/// Names of the root operation types; their fields are operations, not
/// resources.
fn root_type_names(schema: &Value) -> Vec<String> {
    ["queryType", "mutationType", "subscriptionType"]
        .iter()
        .filter_map(|key| {
            schema
                .get(key)
                .and_then(|root| root.get("name"))
                .and_then(Value::as_str)
                .map(ToString::to_string)
        })
        .collect()
}

/// The type's name, when it is a resource-bearing object type.
fn object_type_name(ty: &Value, roots: &[String]) -> Option<String> {
    if ty.get("kind").and_then(Value::as_str) != Some("OBJECT") {
        return None;
    }
    let name = ty.get("name").and_then(Value::as_str)?;
    if name.starts_with("__") || roots.iter().any(|root| root == name) {
        return None;
    }
    Some(name.to_string())
}

fn map_resource(ty: &Value, object_names: &[String]) -> Resource {
    let name = ty
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let fields = ty
        .get("fields")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(|f| map_field(f, object_names)).collect())
        .unwrap_or_default();

    Resource { name, fields }
}

fn map_field(field: &Value, object_names: &[String]) -> Option<Field> {
    let name = field.get("name").and_then(Value::as_str)?.to_string();
    let ty = field.get("type")?;
    let required = ty.get("kind").and_then(Value::as_str) == Some("NON_NULL");
    let type_name = named_type(ty).map(ToString::to_string);
    let reference = type_name
        .as_ref()
        .filter(|candidate| object_names.iter().any(|object| &object == candidate))
        .cloned();

    Some(Field {
        name,
        type_name,
        required,
        reference,
    })
}

/// Unwraps non-null and list wrappers down to the named type.
fn named_type(ty: &Value) -> Option<&str> {
    let mut current = ty;
    loop {
        if let Some(name) = current.get("name").and_then(Value::as_str) {
            return Some(name);
        }
        match current.get("ofType") {
            Some(inner) if !inner.is_null() => current = inner,
            _ => return None,
        }
    }
}
