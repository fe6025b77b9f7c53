//! Error types for domain schema operations

use thiserror::Error;

/// Main error type for schema loading and validation
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema document could not be parsed
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in the document if available
        location: Option<String>,
    },

    /// A root names a class the schema does not declare
    #[error("Root '{0}' is not a declared class")]
    UnknownRoot(String),

    /// A field range is neither a scalar, an enum nor a declared class
    #[error("Field '{class}.{field}' has unknown range '{range}'")]
    UnknownRange {
        /// Owning class
        class: String,
        /// Field name
        field: String,
        /// Unresolved range
        range: String,
    },

    /// A name is declared both as a class and as an enum
    #[error("'{0}' is declared both as a class and as an enum")]
    AmbiguousName(String),

    /// Schema declares no root classes
    #[error("Schema '{0}' declares no root classes")]
    NoRoots(String),
}

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

impl SchemaError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(err: serde_yaml::Error) -> Self {
        match err.location() {
            Some(loc) => Self::parse_at(
                err.to_string(),
                format!("line {}, column {}", loc.line(), loc.column()),
            ),
            None => Self::parse(err.to_string()),
        }
    }
}
