//! Integration tests for spreadsheet export.

mod common;

use common::{entry, perfect_entries};
use ecoscore::config::ExportConfig;
use ecoscore::export::{export_path, ENTRIES_SHEET, EXPORT_FILE_NAME, SUMMARY_SHEET};
use ecoscore::{build_workbook, compute_summary, write_workbook, Category, Entry, Session};
use std::fs;
use std::io::{Cursor, Read};
use tempfile::TempDir;

/// Read one part of an xlsx container as text
fn workbook_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Numeric value stored in cell `cell` of a worksheet part
fn cell_number(sheet_xml: &str, cell: &str) -> f64 {
    let marker = format!("r=\"{}\"", cell);
    let start = sheet_xml.find(&marker).unwrap_or_else(|| panic!("no cell {cell}"));
    let rest = &sheet_xml[start..];
    let value_start = rest.find("<v>").unwrap() + 3;
    let value_end = rest.find("</v>").unwrap();
    rest[value_start..value_end].parse().unwrap()
}

#[test]
fn test_export_writes_xlsx_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.xlsx");
    let entries = perfect_entries();

    write_workbook(&path, &entries, &compute_summary(&entries)).unwrap();

    let bytes = fs::read(&path).unwrap();
    // xlsx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_overwrites_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(EXPORT_FILE_NAME);
    fs::write(&path, "stale").unwrap();

    let entries = vec![entry(Category::Ecology, "Air quality", 40.0, 20.0)];
    write_workbook(&path, &entries, &compute_summary(&entries)).unwrap();

    assert_eq!(&fs::read(&path).unwrap()[..2], b"PK");
}

#[test]
fn test_export_keeps_non_numeric_entries() {
    let entries = vec![Entry::new(Category::Cohesion, "Services and facilities", "n/a", "", "pending")];
    let bytes = build_workbook(&entries, &compute_summary(&entries)).unwrap();

    let sheet = workbook_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(cell_number(&sheet, "C2"), 0.0);
    assert_eq!(cell_number(&sheet, "D2"), 0.0);

    let strings = workbook_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("Services and facilities"));
    assert!(strings.contains("pending"));
}

#[test]
fn test_workbook_has_named_sheets_and_headers() {
    let entries = perfect_entries();
    let bytes = build_workbook(&entries, &compute_summary(&entries)).unwrap();

    let workbook = workbook_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(&format!("name=\"{}\"", ENTRIES_SHEET)));
    assert!(workbook.contains(&format!("name=\"{}\"", SUMMARY_SHEET)));
    assert_eq!(workbook.matches("<sheet ").count(), 2);

    let strings = workbook_part(&bytes, "xl/sharedStrings.xml");
    for header in [
        "Indicator",
        "Max points",
        "Achieved points",
        "Comments",
        "% achieved",
        "Weight (%)",
        "Contribution (out of 100)",
    ] {
        assert!(strings.contains(header), "missing header {header}");
    }
}

#[test]
fn test_summary_sheet_has_one_row_per_category() {
    let entries = vec![
        entry(Category::Compactness, "Absolute compactness", 20.0, 20.0),
        entry(Category::Compactness, "Street density", 10.0, 0.0),
        entry(Category::Ecology, "Air quality", 40.0, 10.0),
    ];
    let bytes = build_workbook(&entries, &compute_summary(&entries)).unwrap();

    let entries_sheet = workbook_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(entries_sheet.matches("<row ").count(), entries.len() + 1);

    let summary_sheet = workbook_part(&bytes, "xl/worksheets/sheet2.xml");
    assert_eq!(summary_sheet.matches("<row ").count(), 3);
    assert_eq!(cell_number(&summary_sheet, "B2"), 30.0);
    assert_eq!(cell_number(&summary_sheet, "C2"), 20.0);
    assert_eq!(cell_number(&summary_sheet, "E2"), 25.0);
    assert_eq!(cell_number(&summary_sheet, "B3"), 40.0);
    assert_eq!(cell_number(&summary_sheet, "D3"), 25.0);
    assert_eq!(cell_number(&summary_sheet, "F3"), 6.25);
}

#[test]
fn test_session_export_to_configured_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = ExportConfig {
        directory: temp_dir.path().to_path_buf(),
        ..ExportConfig::default()
    };

    let mut session = Session::new();
    session.add_entry(Category::Metabolism, "Waste management", 35.0, 35.0, "");
    let path = export_path(&config, None);
    write_workbook(&path, session.entries(), &session.summary()).unwrap();

    assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
    assert!(path.exists());
}

#[test]
fn test_export_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.xlsx");
    let entries = perfect_entries();

    let result = write_workbook(&path, &entries, &compute_summary(&entries));
    assert!(matches!(result, Err(ecoscore::Error::FileSystem { .. })));
}
