//! Operation kinds understood by the data provider.
//!
//! The admin-UI contract consists of a fixed set of nine operations. This
//! module defines them as a closed enum so dispatch is exhaustive: adding
//! a kind without handling it everywhere is a compile error, not a
//! silently ignored string constant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of operations a data provider exposes.
///
/// Seven kinds are served natively by convention-following backends.
/// [`UpdateMany`](Self::UpdateMany) and [`DeleteMany`](Self::DeleteMany)
/// have no backend counterpart and are emulated client-side by the
/// provider; they never reach a base provider as distinct operations.
///
/// # Example
///
/// ```rust
/// use graphql_data_provider::OperationKind;
///
/// assert_eq!(OperationKind::GetList.as_str(), "GET_LIST");
/// assert!(OperationKind::DeleteMany.is_emulated());
/// assert!(!OperationKind::Delete.is_emulated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    /// Fetch a filtered, sorted, paginated page of records.
    GetList,
    /// Fetch a single record by id.
    GetOne,
    /// Fetch several records by id in one call.
    GetMany,
    /// Fetch records referencing another record.
    GetManyReference,
    /// Create a record.
    Create,
    /// Update a record.
    Update,
    /// Delete a record.
    Delete,
    /// Update several records by id. Emulated, never served natively.
    UpdateMany,
    /// Delete several records by id. Emulated, never served natively.
    DeleteMany,
}

impl OperationKind {
    /// Every operation kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::GetList,
        Self::GetOne,
        Self::GetMany,
        Self::GetManyReference,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::UpdateMany,
        Self::DeleteMany,
    ];

    /// Whether this kind is synthesized client-side instead of being
    /// passed through to the base provider.
    #[must_use]
    pub const fn is_emulated(self) -> bool {
        matches!(self, Self::UpdateMany | Self::DeleteMany)
    }

    /// The wire-style constant name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetList => "GET_LIST",
            Self::GetOne => "GET_ONE",
            Self::GetMany => "GET_MANY",
            Self::GetManyReference => "GET_MANY_REFERENCE",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::UpdateMany => "UPDATE_MANY",
            Self::DeleteMany => "DELETE_MANY",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_kind_once() {
        assert_eq!(OperationKind::ALL.len(), 9);
        for kind in OperationKind::ALL {
            assert_eq!(
                OperationKind::ALL.iter().filter(|k| **k == kind).count(),
                1
            );
        }
    }

    #[test]
    fn test_only_bulk_kinds_are_emulated() {
        let emulated: Vec<OperationKind> = OperationKind::ALL
            .into_iter()
            .filter(|kind| kind.is_emulated())
            .collect();
        assert_eq!(
            emulated,
            vec![OperationKind::UpdateMany, OperationKind::DeleteMany]
        );
    }

    #[test]
    fn test_display_matches_wire_constants() {
        assert_eq!(OperationKind::GetManyReference.to_string(), "GET_MANY_REFERENCE");
        assert_eq!(OperationKind::DeleteMany.to_string(), "DELETE_MANY");
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&OperationKind::GetList).unwrap();
        assert_eq!(json, r#""GET_LIST""#);

        let kind: OperationKind = serde_json::from_str(r#""UPDATE_MANY""#).unwrap();
        assert_eq!(kind, OperationKind::UpdateMany);
    }

    #[test]
    fn test_kind_is_usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(OperationKind::Create, "createBook");
        assert_eq!(map.get(&OperationKind::Create), Some(&"createBook"));
    }
}
