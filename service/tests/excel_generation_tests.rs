//! End-to-end workbook generation, read back with calamine

use calamine::{Data, Reader, Xlsx, open_workbook};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;
use template_core::prelude::*;
use template_service::config::GeneratorConfig;
use template_service::generator::{ExcelGenerator, GeneratorError};
use template_service::service::{generate_template, generate_template_for};

/// Every row of every sheet as strings, keyed by sheet name in workbook order
fn read_sheets(path: &Path) -> anyhow::Result<Vec<(String, Vec<Vec<String>>)>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect();
        sheets.push((name, rows));
    }
    Ok(sheets)
}

fn two_root_schema() -> DomainSchema {
    DomainSchema::new("orders")
        .with_class(
            ClassDefinition::new("OrderLine")
                .with_field(FieldDefinition::new("Name", "text"))
                .with_field(FieldDefinition::new("Qty", "decimal")),
        )
        .with_class(
            ClassDefinition::new("Customer").with_field(FieldDefinition::new("Id", "integer")),
        )
        .with_root("OrderLine")
        .with_root("Customer")
}

#[test]
fn test_two_roots_produce_two_header_sheets() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GeneratorConfig::new(temp_dir.path().join("domain.xlsx"));

    let summary = generate_template_for(&two_root_schema(), &config)?;
    assert_eq!(
        summary.sheets,
        vec![("OrderLine".to_string(), 2), ("Customer".to_string(), 1)]
    );

    let sheets = read_sheets(&config.output_path)?;
    assert_eq!(
        sheets,
        vec![
            (
                "OrderLine".to_string(),
                vec![vec!["Name".to_string(), "Qty".to_string()]]
            ),
            ("Customer".to_string(), vec![vec!["Id".to_string()]]),
        ]
    );
    Ok(())
}

#[test]
fn test_repeated_field_names_give_repeated_headers() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GeneratorConfig::new(temp_dir.path().join("domain.xlsx"));
    let schema = DomainSchema::new("repeated")
        .with_class(
            ClassDefinition::new("A")
                .with_field(FieldDefinition::new("X", "text"))
                .with_field(FieldDefinition::new("X", "integer")),
        )
        .with_root("A");

    let summary = generate_template_for(&schema, &config)?;
    assert_eq!(summary.sheets, vec![("A".to_string(), 2)]);

    let sheets = read_sheets(&config.output_path)?;
    assert_eq!(
        sheets,
        vec![(
            "A".to_string(),
            vec![vec!["X".to_string(), "X".to_string()]]
        )]
    );
    Ok(())
}

#[test]
fn test_existing_file_is_overwritten() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("domain.xlsx");
    std::fs::write(&path, b"not a workbook")?;

    generate_template_for(&two_root_schema(), &GeneratorConfig::new(&path))?;

    let sheets = read_sheets(&path)?;
    assert_eq!(sheets.len(), 2);
    Ok(())
}

#[test]
fn test_embedded_domain_template() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GeneratorConfig::new(temp_dir.path().join("domain.xlsx"));

    let summary = generate_template(&config)?;
    assert_eq!(summary.total_columns(), 26 + 37);

    let sheets = read_sheets(&config.output_path)?;
    let names: Vec<_> = sheets.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["ProductQuality", "ProductQuantity"]);

    let (_, quality) = &sheets[0];
    assert_eq!(quality.len(), 1);
    assert_eq!(quality[0].len(), 26);
    assert_eq!(quality[0][0], "Id");
    assert_eq!(quality[0][15], "MolecularCompositions/0/Formula");

    let (_, quantity) = &sheets[1];
    assert_eq!(quantity.len(), 1);
    assert_eq!(quantity[0].len(), 37);
    assert_eq!(quantity[0][36], "Approved");
    Ok(())
}

#[test]
fn test_empty_header_list_gives_empty_sheet() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.xlsx");
    let sheets: Vec<(&str, Vec<&str>)> = vec![("Blank", vec![]), ("Filled", vec!["A", "B"])];

    ExcelGenerator::new().generate_file(&sheets, &path)?;

    let read = read_sheets(&path)?;
    assert_eq!(read[0].0, "Blank");
    assert!(read[0].1.is_empty());
    assert_eq!(read[1].1, vec![vec!["A".to_string(), "B".to_string()]]);
    Ok(())
}

#[test]
fn test_long_class_names_are_truncated() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("long.xlsx");
    let long_name = "MeasurementPointCalibrationCertificate";
    let sheets = vec![(long_name, vec!["Id"])];

    ExcelGenerator::new().generate_file(&sheets, &path)?;

    let read = read_sheets(&path)?;
    assert_eq!(read[0].0, long_name[..31]);
    Ok(())
}

#[test]
fn test_unwritable_path_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = GeneratorConfig::new(temp_dir.path().join("missing").join("domain.xlsx"));

    let result = generate_template_for(&two_root_schema(), &config);
    assert!(matches!(result, Err(GeneratorError::Io(_))));
}

#[test]
fn test_invalid_schema_fails_before_writing() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = GeneratorConfig::new(temp_dir.path().join("domain.xlsx"));
    let schema = two_root_schema().with_root("Missing");

    let result = generate_template_for(&schema, &config);
    assert!(matches!(
        result,
        Err(GeneratorError::Schema(SchemaError::UnknownRoot(_)))
    ));
    assert!(!config.output_path.exists());
}
