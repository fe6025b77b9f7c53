//! Flattening of domain classes into spreadsheet header paths.
//!
//! [`TypeTraverser`] walks a class depth-first and reports every field that
//! becomes a column; the functions in [`headers`] turn that walk into header
//! lists.

pub mod headers;
pub mod traverser;

pub use headers::{collect_headers, collect_leaves, collect_root_headers};
pub use traverser::TypeTraverser;
