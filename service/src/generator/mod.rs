//! Output generators for flattened header lists

pub mod excel;
pub mod traits;

pub use excel::ExcelGenerator;
pub use traits::{GeneratorError, GeneratorResult};
