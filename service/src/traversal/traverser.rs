//! Depth-first walk over the fields of a class

use template_core::prelude::*;
use tracing::trace;

/// Walks a class and reports every field that becomes a single column.
///
/// Sequences are expanded into their element class under the synthetic
/// element segment, recursable classes into their own fields. Any other class
/// is dropped without a column. There is no cycle detection: the depth limit
/// of the [`RecursionPolicy`] is what stops self-referencing schemas.
pub struct TypeTraverser<'a, P: SchemaProvider + ?Sized> {
    provider: &'a P,
    policy: &'a RecursionPolicy,
}

impl<'a, P: SchemaProvider + ?Sized> TypeTraverser<'a, P> {
    /// Create a traverser over `provider` bounded by `policy`
    #[must_use]
    pub fn new(provider: &'a P, policy: &'a RecursionPolicy) -> Self {
        Self { provider, policy }
    }

    /// Visit the leaf fields of `class`, starting at depth 0 with no prefix.
    ///
    /// `visit` receives the accumulated path prefix and the leaf field, in
    /// depth-first declaration order.
    pub fn traverse<F>(&self, class: &'a ClassDefinition, visit: &mut F)
    where
        F: FnMut(&str, &'a FieldDefinition),
    {
        self.traverse_from(class, visit, 0, "");
    }

    /// Visit the leaf fields of `class` as if it were reached at `depth`
    /// below a field path of `prefix`.
    pub fn traverse_from<F>(
        &self,
        class: &'a ClassDefinition,
        visit: &mut F,
        depth: usize,
        prefix: &str,
    ) where
        F: FnMut(&str, &'a FieldDefinition),
    {
        for field in class.fields() {
            match self.provider.shape_of(field) {
                _ if self.policy.is_beyond_limit(depth) => visit(prefix, field),
                FieldShape::Leaf => visit(prefix, field),
                FieldShape::CollectionOf(Some(element)) => {
                    let prefix = self.policy.element_prefix(prefix, &field.name);
                    self.descend(element, visit, depth + 1, &prefix);
                }
                FieldShape::CollectionOf(None) => {
                    trace!(
                        class = %class.name,
                        field = %field.name,
                        "Skipping sequence without element type"
                    );
                }
                FieldShape::Recursable(name) => {
                    let prefix = self.policy.composite_prefix(prefix, &field.name);
                    self.descend(name, visit, depth + 1, &prefix);
                }
                FieldShape::Opaque(name) => {
                    trace!(
                        class = %class.name,
                        field = %field.name,
                        range = name,
                        "Skipping field of non-recursable class"
                    );
                }
            }
        }
    }

    fn descend<F>(&self, name: &str, visit: &mut F, depth: usize, prefix: &str)
    where
        F: FnMut(&str, &'a FieldDefinition),
    {
        // Scalar and enum elements have no fields to expand.
        if let Some(class) = self.provider.class(name) {
            self.traverse_from(class, visit, depth, prefix);
        } else {
            trace!(range = name, prefix, "No fields to expand");
        }
    }
}
