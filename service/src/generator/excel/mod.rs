//! Excel template generator.
//!
//! Writes one worksheet per `(sheet name, headers)` pair with the headers in
//! row 1 and nothing else.

mod generator;
mod workbook;

pub use generator::{ExcelGenerator, MAX_SHEET_NAME_LEN};
