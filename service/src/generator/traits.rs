//! Generator error and result types

use template_core::SchemaError;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while producing the template workbook
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Workbook generation error
    #[error("Workbook generation failed: {0}")]
    Generation(String),

    /// Output path could not be determined
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl From<rust_xlsxwriter::XlsxError> for GeneratorError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GeneratorError::Generation(err.to_string())
    }
}
