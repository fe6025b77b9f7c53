//! Header lists built from the traversal

use template_core::prelude::*;

use super::traverser::TypeTraverser;

/// Flattened header paths of `class`, in traversal order.
///
/// Duplicates are kept and nothing is sorted.
#[must_use]
pub fn collect_headers<P>(
    provider: &P,
    policy: &RecursionPolicy,
    class: &ClassDefinition,
) -> Vec<String>
where
    P: SchemaProvider + ?Sized,
{
    let mut headers = Vec::new();
    let mut visit = |prefix: &str, field: &FieldDefinition| {
        headers.push(format!("{prefix}{}", field.name));
    };
    TypeTraverser::new(provider, policy).traverse(class, &mut visit);
    headers
}

/// Flattened header paths of `class` paired with the leaf field each column
/// holds.
#[must_use]
pub fn collect_leaves<'a, P>(
    provider: &'a P,
    policy: &'a RecursionPolicy,
    class: &'a ClassDefinition,
) -> Vec<(String, &'a FieldDefinition)>
where
    P: SchemaProvider + ?Sized,
{
    let mut leaves = Vec::new();
    let mut visit = |prefix: &str, field: &'a FieldDefinition| {
        leaves.push((format!("{prefix}{}", field.name), field));
    };
    TypeTraverser::new(provider, policy).traverse(class, &mut visit);
    leaves
}

/// Sheet name and header list for every root of `schema`, in root order
#[must_use]
pub fn collect_root_headers(
    schema: &DomainSchema,
    policy: &RecursionPolicy,
) -> Vec<(String, Vec<String>)> {
    schema
        .root_classes()
        .map(|class| {
            let headers = collect_headers(schema, policy, class);
            tracing::debug!(class = %class.name, columns = headers.len(), "Collected headers");
            (class.name.clone(), headers)
        })
        .collect()
}
