//! The measurement domain model the template is generated from.

use template_core::{DomainSchema, Result};

/// Schema source compiled into the binary
pub const DOMAIN_SCHEMA_YAML: &str = include_str!("../schemas/domain.yaml");

/// Parse and validate the embedded domain schema.
///
/// # Errors
///
/// Returns an error if the embedded document does not parse or references an
/// undeclared class, enum or root.
pub fn domain_schema() -> Result<DomainSchema> {
    DomainSchema::from_yaml_str(DOMAIN_SCHEMA_YAML)
}
