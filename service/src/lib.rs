//! # Domain Template Service
//!
//! Generates an Excel data-entry template from the domain model.
//!
//! Every root class of the [`DomainSchema`](template_core::DomainSchema) gets
//! its own worksheet. Row 1 of that sheet holds the flattened header path of
//! every field that becomes a column:
//!
//! - scalar and enum fields are columns named after the field;
//! - fields of a recursable class expand to `Field/Child`;
//! - multivalued fields expand their element class to `Field/0/Child`;
//! - fields of any other class are left out;
//! - below nesting depth 3 every field is a column.
//!
//! ## Quick Start
//!
//! ```no_run
//! use template_service::config::GeneratorConfig;
//! use template_service::service::generate_template;
//!
//! let config = GeneratorConfig::new("domain.xlsx");
//! let summary = generate_template(&config)?;
//! println!("{} columns written", summary.total_columns());
//! # Ok::<(), template_service::generator::GeneratorError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod generator;
pub mod service;
pub mod traversal;

pub use config::GeneratorConfig;
pub use generator::{ExcelGenerator, GeneratorError, GeneratorResult};
pub use service::{TemplateSummary, generate_template, generate_template_for};
pub use traversal::{TypeTraverser, collect_headers, collect_leaves, collect_root_headers};
