use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};

/// Domain schema: the static description of every class the template covers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DomainSchema {
    /// Schema name
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Classes that get their own sheet, in sheet order
    #[serde(default)]
    pub roots: Vec<String>,

    /// Enumerations, keyed by name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub enums: IndexMap<String, EnumDefinition>,

    /// Classes, keyed by name, in declaration order
    #[serde(default)]
    pub classes: IndexMap<String, ClassDefinition>,
}

impl DomainSchema {
    /// Create an empty schema
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a schema from YAML and validate it.
    ///
    /// Class and enum names are taken from their map keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML for this model or if
    /// [`DomainSchema::validate`] rejects it.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let mut schema: Self = serde_yaml::from_str(content)?;

        for (name, class) in &mut schema.classes {
            class.name.clone_from(name);
        }
        for (name, enum_def) in &mut schema.enums {
            enum_def.name.clone_from(name);
        }

        schema.validate()?;
        tracing::debug!(
            schema = %schema.name,
            classes = schema.classes.len(),
            enums = schema.enums.len(),
            "Loaded domain schema"
        );
        Ok(schema)
    }

    /// Add a class, keyed by its name
    #[must_use]
    pub fn with_class(mut self, class: ClassDefinition) -> Self {
        self.classes.insert(class.name.clone(), class);
        self
    }

    /// Add an enum, keyed by its name
    #[must_use]
    pub fn with_enum(mut self, enum_def: EnumDefinition) -> Self {
        self.enums.insert(enum_def.name.clone(), enum_def);
        self
    }

    /// Append a root class
    #[must_use]
    pub fn with_root(mut self, name: impl Into<String>) -> Self {
        self.roots.push(name.into());
        self
    }

    /// Root classes in sheet order. Unknown roots are skipped; run
    /// [`DomainSchema::validate`] to reject them instead.
    pub fn root_classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.roots.iter().filter_map(|name| self.classes.get(name))
    }

    /// Check that every name the schema references resolves.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: no roots, an unknown root, a name used
    /// for both a class and an enum, or an unknown range. Repeated field names
    /// within a class are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(SchemaError::NoRoots(self.name.clone()));
        }

        if let Some(root) = self.roots.iter().find(|r| !self.classes.contains_key(*r)) {
            return Err(SchemaError::UnknownRoot(root.clone()));
        }

        if let Some(name) = self.enums.keys().find(|e| self.classes.contains_key(*e)) {
            return Err(SchemaError::AmbiguousName(name.clone()));
        }

        for class in self.classes.values() {
            for field in &class.fields {
                if let Some(range) = field.effective_range()
                    && ScalarType::from_name(range).is_none()
                    && !self.enums.contains_key(range)
                    && !self.classes.contains_key(range)
                {
                    return Err(SchemaError::UnknownRange {
                        class: class.name.clone(),
                        field: field.name.clone(),
                        range: range.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Class definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassDefinition {
    /// Name of the class
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether fields of this class type are expanded into their own columns
    #[serde(default)]
    pub recursable: bool,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl ClassDefinition {
    /// Create a class with no fields
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Mark the class as expandable when used as a field type
    #[must_use]
    pub fn recursable(mut self) -> Self {
        self.recursable = true;
        self
    }

    /// Append a field
    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields in declaration order
    #[must_use]
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }
}

/// A single field of a class
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    /// Field name, used verbatim as the header segment
    pub name: String,

    /// Declared range: a scalar name, an enum name or a class name.
    /// Single-valued fields without a range are text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Field holds a sequence of `range` values
    #[serde(default)]
    pub multivalued: bool,

    /// Field value may be absent
    #[serde(default)]
    pub nullable: bool,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDefinition {
    /// Create a single-valued, non-nullable field
    #[must_use]
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: Some(range.into()),
            ..Default::default()
        }
    }

    /// Create a sequence field. `None` models a sequence whose element type
    /// is not known.
    #[must_use]
    pub fn sequence(name: impl Into<String>, element: Option<&str>) -> Self {
        Self {
            name: name.into(),
            range: element.map(str::to_string),
            multivalued: true,
            ..Default::default()
        }
    }

    /// Mark the field as nullable
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The range with any nullable wrapper removed.
    ///
    /// Nullability is recorded separately from the range, so the effective
    /// range is the declared one.
    #[must_use]
    pub fn effective_range(&self) -> Option<&str> {
        self.range.as_deref()
    }
}

/// Enumeration definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnumDefinition {
    /// Enum name
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permitted values
    #[serde(default)]
    pub permissible_values: Vec<String>,
}

impl EnumDefinition {
    /// Create an enum from its values
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: None,
            permissible_values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Built-in primitive-like ranges. Every scalar is written as one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `boolean`
    Boolean,
    /// `integer`
    Integer,
    /// `float`
    Float,
    /// `text`
    Text,
    /// `datetime`
    DateTime,
    /// `decimal` (fixed point)
    Decimal,
}

impl ScalarType {
    /// Resolve a range name to a scalar, accepting the usual aliases
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" | "bool" => Some(Self::Boolean),
            "integer" | "int" => Some(Self::Integer),
            "float" | "double" => Some(Self::Float),
            "text" | "string" => Some(Self::Text),
            "datetime" | "date" | "time" => Some(Self::DateTime),
            "decimal" => Some(Self::Decimal),
            _ => None,
        }
    }
}

/// How a field's effective type takes part in header flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape<'a> {
    /// Scalar or enum: one column
    Leaf,
    /// Class listed as recursable: its fields are expanded
    Recursable(&'a str),
    /// Sequence: its element type is expanded under the synthetic index
    /// segment. `None` when the element type is unknown.
    CollectionOf(Option<&'a str>),
    /// Any other class: contributes nothing
    Opaque(&'a str),
}
