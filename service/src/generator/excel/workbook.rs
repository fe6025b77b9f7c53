use super::super::traits::{GeneratorError, GeneratorResult};
use super::generator::ExcelGenerator;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, info};

/// Excel has a maximum of 16,384 columns (2^14).
const MAX_EXCEL_COLUMNS: usize = 16_384;

impl ExcelGenerator {
    /// Generate the template workbook and save it to `path`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if workbook generation fails or the file cannot be written.
    pub fn generate_file<S, H>(&self, sheets: &[(S, Vec<H>)], path: &Path) -> GeneratorResult<()>
    where
        S: AsRef<str>,
        H: AsRef<str>,
    {
        let content = self.generate_buffer(sheets)?;
        std::fs::write(path, &content)?;
        info!(
            path = %path.display(),
            sheets = sheets.len(),
            bytes = content.len(),
            "Saved template workbook"
        );
        Ok(())
    }

    /// Generate the template workbook as a byte buffer.
    ///
    /// Each `(sheet name, headers)` pair becomes one worksheet, in order, with
    /// the headers written left to right into row 1.
    ///
    /// # Errors
    ///
    /// Returns an error if a sheet name is rejected, a header list is wider
    /// than Excel allows, or the workbook cannot be serialized.
    pub fn generate_buffer<S, H>(&self, sheets: &[(S, Vec<H>)]) -> GeneratorResult<Vec<u8>>
    where
        S: AsRef<str>,
        H: AsRef<str>,
    {
        let mut workbook = Workbook::new();

        for (sheet_name, headers) in sheets {
            let sheet_name = Self::sanitize_sheet_name(sheet_name.as_ref());
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_name).map_err(|e| {
                GeneratorError::Generation(format!("Invalid sheet name '{sheet_name}': {e}"))
            })?;

            Self::write_header_row(worksheet, headers)?;
            debug!(sheet = %sheet_name, columns = headers.len(), "Wrote header row");
        }

        workbook
            .save_to_buffer()
            .map_err(|e| GeneratorError::Generation(format!("Failed to save workbook: {e}")))
    }

    fn write_header_row<H: AsRef<str>>(
        worksheet: &mut Worksheet,
        headers: &[H],
    ) -> GeneratorResult<()> {
        if headers.len() > MAX_EXCEL_COLUMNS {
            return Err(GeneratorError::Generation(format!(
                "Sheet '{}' needs {} columns (max: {})",
                worksheet.name(),
                headers.len(),
                MAX_EXCEL_COLUMNS
            )));
        }

        for (col, header) in headers.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| {
                GeneratorError::Generation(format!("Column index {col} cannot fit in u16"))
            })?;
            worksheet.write_string(0, col, header.as_ref())?;
        }
        Ok(())
    }
}
