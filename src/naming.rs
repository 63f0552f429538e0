//! Default operation-name derivation for convention-following backends.
//!
//! Backends targeted by this crate name their GraphQL operations by
//! simple pluralization/casing rules: collections are the lowercased
//! plural of the resource name, single-record reads the lowercased
//! singular, and mutations prefix the verb onto the unchanged name.

use crate::operation::OperationKind;
use crate::schema::Resource;

/// Lowercases the first character of `s`, preserving the rest.
#[must_use]
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Derives the conventional operation name for `kind` on `resource`.
///
/// For a resource named `Book`:
///
/// - `GetList` / `GetMany` / `GetManyReference` → `books`
/// - `GetOne` → `book`
/// - `Create` → `createBook`, `Update` → `updateBook`, `Delete` → `deleteBook`
///
/// Returns `None` for the emulated bulk kinds, which have no backend
/// operation to name.
#[must_use]
pub fn default_operation_name(kind: OperationKind, resource: &Resource) -> Option<String> {
    let name = resource.name.as_str();
    match kind {
        OperationKind::GetList | OperationKind::GetMany | OperationKind::GetManyReference => {
            Some(lcfirst(&pluralizer::pluralize(name, 2, false)))
        }
        OperationKind::GetOne => Some(lcfirst(name)),
        OperationKind::Create => Some(format!("create{name}")),
        OperationKind::Update => Some(format!("update{name}")),
        OperationKind::Delete => Some(format!("delete{name}")),
        OperationKind::UpdateMany | OperationKind::DeleteMany => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Resource {
        Resource::new("Book")
    }

    #[test]
    fn test_collection_kinds_derive_lowercased_plural() {
        for kind in [
            OperationKind::GetList,
            OperationKind::GetMany,
            OperationKind::GetManyReference,
        ] {
            assert_eq!(
                default_operation_name(kind, &book()).as_deref(),
                Some("books")
            );
        }
    }

    #[test]
    fn test_get_one_derives_lowercased_singular() {
        assert_eq!(
            default_operation_name(OperationKind::GetOne, &book()).as_deref(),
            Some("book")
        );
    }

    #[test]
    fn test_mutations_prefix_verb_onto_unchanged_name() {
        assert_eq!(
            default_operation_name(OperationKind::Create, &book()).as_deref(),
            Some("createBook")
        );
        assert_eq!(
            default_operation_name(OperationKind::Update, &book()).as_deref(),
            Some("updateBook")
        );
        assert_eq!(
            default_operation_name(OperationKind::Delete, &book()).as_deref(),
            Some("deleteBook")
        );
    }

    #[test]
    fn test_bulk_kinds_have_no_default_name() {
        assert_eq!(default_operation_name(OperationKind::UpdateMany, &book()), None);
        assert_eq!(default_operation_name(OperationKind::DeleteMany, &book()), None);
    }

    #[test]
    fn test_irregular_plural() {
        let resource = Resource::new("Category");
        assert_eq!(
            default_operation_name(OperationKind::GetList, &resource).as_deref(),
            Some("categories")
        );
    }

    #[test]
    fn test_lcfirst_handles_edge_cases() {
        assert_eq!(lcfirst(""), "");
        assert_eq!(lcfirst("A"), "a");
        assert_eq!(lcfirst("already"), "already");
        assert_eq!(lcfirst("HTTPRoute"), "hTTPRoute");
    }
}
