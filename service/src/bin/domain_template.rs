//! `domain-template` command-line entry point
//!
//! Writes `domain.xlsx`, one sheet per domain root class with the flattened
//! field names in row 1.

fn main() -> anyhow::Result<()> {
    template_service::cli::run()
}
