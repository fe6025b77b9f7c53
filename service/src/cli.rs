//! Command-line interface for the template generator.

use crate::config::GeneratorConfig;
use crate::service::generate_template;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Generate the domain data-entry template workbook
#[derive(Parser, Debug)]
#[command(name = "domain-template", version, about)]
pub struct TemplateCli {
    /// Write the workbook here instead of `domain.xlsx` next to the executable
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode - only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl TemplateCli {
    /// Configuration for this invocation
    ///
    /// # Errors
    ///
    /// Returns an error if no output path was given and the executable
    /// directory cannot be determined.
    pub fn config(&self) -> anyhow::Result<GeneratorConfig> {
        let config = match &self.output {
            Some(path) => GeneratorConfig::new(path),
            None => GeneratorConfig::from_executable_dir()?,
        };
        Ok(config)
    }

    fn default_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Configure the tracing subscriber; `RUST_LOG` takes precedence over the
    /// flags.
    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level()));
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
        {
            debug!("Keeping the existing tracing subscriber: {err}");
        }
    }

    /// Generate the template
    ///
    /// # Errors
    ///
    /// Returns an error if the output path cannot be resolved or generation fails.
    pub fn run(self) -> anyhow::Result<()> {
        self.init_logging();

        let config = self.config()?;
        debug!(output = %config.output_path.display(), "Starting template generation");

        generate_template(&config).map(|_| ()).map_err(|err| {
            error!("Template generation failed: {err}");
            err.into()
        })
    }
}

/// Parse the process arguments and generate the template
///
/// # Errors
///
/// Returns an error if generation fails.
pub fn run() -> anyhow::Result<()> {
    TemplateCli::parse().run()
}
