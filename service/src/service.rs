//! Template generation run: domain schema in, workbook out.

use crate::config::GeneratorConfig;
use crate::domain::domain_schema;
use crate::generator::{ExcelGenerator, GeneratorResult};
use crate::traversal::collect_root_headers;
use std::path::PathBuf;
use template_core::DomainSchema;
use tracing::info;

/// What a generation run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    /// Path of the saved workbook
    pub output_path: PathBuf,
    /// Sheet names with their column counts, in sheet order
    pub sheets: Vec<(String, usize)>,
}

impl TemplateSummary {
    /// Total number of header columns across all sheets
    #[must_use]
    pub fn total_columns(&self) -> usize {
        self.sheets.iter().map(|(_, columns)| columns).sum()
    }
}

/// Generate the template for the embedded domain schema.
///
/// # Errors
///
/// Returns an error if the embedded schema is invalid or the workbook cannot
/// be generated or saved.
pub fn generate_template(config: &GeneratorConfig) -> GeneratorResult<TemplateSummary> {
    let schema = domain_schema()?;
    generate_template_for(&schema, config)
}

/// Generate the template for `schema`: one sheet per root class, headers in
/// row 1, saved to the configured output path.
///
/// # Errors
///
/// Returns an error if `schema` fails validation or the workbook cannot be
/// generated or saved.
pub fn generate_template_for(
    schema: &DomainSchema,
    config: &GeneratorConfig,
) -> GeneratorResult<TemplateSummary> {
    schema.validate()?;

    let sheets = collect_root_headers(schema, &config.recursion);
    ExcelGenerator::new().generate_file(&sheets, &config.output_path)?;

    let summary = TemplateSummary {
        output_path: config.output_path.clone(),
        sheets: sheets
            .iter()
            .map(|(name, headers)| (name.clone(), headers.len()))
            .collect(),
    };
    info!(
        schema = %schema.name,
        sheets = summary.sheets.len(),
        columns = summary.total_columns(),
        "Generated domain template"
    );
    Ok(summary)
}
