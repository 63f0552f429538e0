//! API description types produced by schema introspection.
//!
//! These types model what the provider knows about the backend: which
//! resources exist and which fields they expose. They are consumed as
//! opaque handles by the operation-name derivation and by UI layers
//! generating admin screens; this crate never mutates them after parsing.

use serde::{Deserialize, Serialize};

/// A named entity type exposed by the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource name as the backend spells it (e.g. `Book`).
    pub name: String,
    /// Fields known for this resource. May be empty when the schema
    /// source does not expose field-level detail.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Resource {
    /// Creates a resource with the given name and no known fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Replaces the field list.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

/// A single field on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The field name.
    pub name: String,
    /// The named type behind any list/non-null wrappers, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Whether the field is non-nullable.
    #[serde(default)]
    pub required: bool,
    /// Name of the resource this field references, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Field {
    /// Creates a nullable field with no type information.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            required: false,
            reference: None,
        }
    }
}

/// The parsed description of the backend API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    /// The entrypoint this description was parsed from.
    pub entrypoint: String,
    /// Every resource the backend exposes.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Api {
    /// Looks up a resource by name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.name == name)
    }
}

/// An extra route discovered during introspection, outside the
/// resource-oriented convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRoute {
    /// The route path.
    pub path: String,
}

/// Output of a schema parser run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectedApi {
    /// The parsed API description.
    pub api: Api,
    /// Custom routes the parser found. Empty when the parser reports none.
    #[serde(default)]
    pub custom_routes: Vec<CustomRoute>,
}

/// Result of [`DataProvider::introspect`](crate::DataProvider::introspect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectResult {
    /// The API description, freshly fetched or served from the cache.
    pub data: Api,
    /// Present only on the first successful fetch; `None` on cache hits.
    pub custom_routes: Option<Vec<CustomRoute>>,
}
