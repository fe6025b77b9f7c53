//! Generator configuration

use crate::generator::{GeneratorError, GeneratorResult};
use std::path::{Path, PathBuf};
use template_core::RecursionPolicy;

/// File name of the generated template
pub const OUTPUT_FILE_NAME: &str = "domain.xlsx";

/// Settings for one template generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Where the workbook is written; an existing file is replaced
    pub output_path: PathBuf,

    /// Expansion limits for nested classes
    pub recursion: RecursionPolicy,
}

impl GeneratorConfig {
    /// Configuration writing to `output_path` with the default recursion policy
    #[must_use]
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            recursion: RecursionPolicy::default(),
        }
    }

    /// Configuration writing [`OUTPUT_FILE_NAME`] next to the running executable
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn from_executable_dir() -> GeneratorResult<Self> {
        Ok(Self::new(default_output_path()?))
    }

    /// Override the output path
    #[must_use]
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Override the recursion policy
    #[must_use]
    pub fn with_recursion(mut self, recursion: RecursionPolicy) -> Self {
        self.recursion = recursion;
        self
    }
}

/// [`OUTPUT_FILE_NAME`] in the directory holding the running executable
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined or has no
/// parent directory.
pub fn default_output_path() -> GeneratorResult<PathBuf> {
    let exe = std::env::current_exe()?;
    output_path_beside(&exe)
}

fn output_path_beside(exe: &Path) -> GeneratorResult<PathBuf> {
    exe.parent()
        .map(|dir| dir.join(OUTPUT_FILE_NAME))
        .ok_or_else(|| {
            GeneratorError::Configuration(format!(
                "Executable path {} has no parent directory",
                exe.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_beside_executable() {
        let path = output_path_beside(Path::new("/opt/tools/domain-template"))
            .expect("path has a parent");
        assert_eq!(path, Path::new("/opt/tools/domain.xlsx"));
    }

    #[test]
    fn test_output_path_needs_parent() {
        assert!(matches!(
            output_path_beside(Path::new("/")),
            Err(GeneratorError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_config_file_name() {
        let config = GeneratorConfig::from_executable_dir().expect("test binary has a path");
        assert_eq!(
            config.output_path.file_name().and_then(|n| n.to_str()),
            Some(OUTPUT_FILE_NAME)
        );
        assert_eq!(config.recursion, RecursionPolicy::default());
    }

    #[test]
    fn test_builders_override() {
        let policy = RecursionPolicy {
            separator: ".".to_string(),
            ..RecursionPolicy::default()
        };
        let config = GeneratorConfig::new("a.xlsx")
            .with_output_path("b.xlsx")
            .with_recursion(policy.clone());
        assert_eq!(config.output_path, PathBuf::from("b.xlsx"));
        assert_eq!(config.recursion, policy);
    }
}
