//! # Domain Template Core
//!
//! Schema model for the domain spreadsheet template generator.
//!
//! A [`DomainSchema`] lists the classes of the domain model with their fields in
//! declaration order. Each field is classified into a [`FieldShape`] through
//! the [`SchemaProvider`] trait, and a [`RecursionPolicy`] bounds how far
//! nested classes are expanded into columns.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for schema loading and validation
pub mod error;

/// Trait seam between schema sources and the traverser
pub mod traits;

/// Schema model
pub mod types;

/// Recursion limits and header path tokens
pub mod config;

// Re-export commonly used types
pub use config::RecursionPolicy;
pub use error::{Result, SchemaError};
pub use traits::SchemaProvider;
pub use types::{
    ClassDefinition, DomainSchema, EnumDefinition, FieldDefinition, FieldShape, ScalarType,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{Result, SchemaError};
    pub use crate::traits::*;
    pub use crate::types::*;
}
