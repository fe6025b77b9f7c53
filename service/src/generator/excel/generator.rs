/// Longest worksheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Excel template generator entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelGenerator;

impl ExcelGenerator {
    /// Create a new Excel generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Make a class name usable as a worksheet name.
    ///
    /// Removes the characters Excel forbids, strips surrounding apostrophes and
    /// truncates to [`MAX_SHEET_NAME_LEN`] characters.
    #[must_use]
    pub fn sanitize_sheet_name(name: &str) -> String {
        let sanitized = name
            .chars()
            .filter(|c| !matches!(c, '\\' | '/' | '?' | '*' | '[' | ']' | ':'))
            .collect::<String>();

        sanitized
            .trim_matches('\'')
            .chars()
            .take(MAX_SHEET_NAME_LEN)
            .collect()
    }
}
