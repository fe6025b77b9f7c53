//! Core trait definitions for schema sources

use crate::types::{ClassDefinition, DomainSchema, FieldDefinition, FieldShape, ScalarType};

/// Source of type descriptions for header flattening.
///
/// Implementors only need to resolve class and enum names; the shape of a
/// field is derived from that in [`SchemaProvider::shape_of`].
pub trait SchemaProvider {
    /// Look up a class by name
    fn class(&self, name: &str) -> Option<&ClassDefinition>;

    /// Whether `name` is a declared enumeration
    fn is_enum(&self, name: &str) -> bool;

    /// Classify a field by its effective (nullable-unwrapped) type.
    ///
    /// Sequences are checked before classes. A single-valued field without a
    /// range is text.
    fn shape_of<'a>(&self, field: &'a FieldDefinition) -> FieldShape<'a> {
        let range = field.effective_range();

        if field.multivalued {
            return FieldShape::CollectionOf(range);
        }

        let Some(range) = range else {
            return FieldShape::Leaf;
        };

        if ScalarType::from_name(range).is_some() || self.is_enum(range) {
            return FieldShape::Leaf;
        }

        match self.class(range) {
            Some(class) if class.recursable => FieldShape::Recursable(range),
            _ => FieldShape::Opaque(range),
        }
    }
}

impl SchemaProvider for DomainSchema {
    fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    fn is_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }
}
