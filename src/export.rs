//! Spreadsheet export of entries and the per-category summary.
//!
//! The workbook has exactly two sheets: the entries (with numeric fields
//! already coerced) and the summary table. No totals or grade are written.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ExportConfig;
use crate::entry::Entry;
use crate::errors::{Error, Result};
use crate::scoring::Summary;

/// Default file name offered for download
pub const EXPORT_FILE_NAME: &str = "Validation_Sustainability.xlsx";

/// MIME type of the produced document
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const ENTRIES_SHEET: &str = "Indicators";
pub const SUMMARY_SHEET: &str = "Summary by Category";

const ENTRIES_HEADERS: [&str; 5] = [
    "Category",
    "Indicator",
    "Max points",
    "Achieved points",
    "Comments",
];

const SUMMARY_HEADERS: [&str; 6] = [
    "Category",
    "Max points",
    "Achieved points",
    "% achieved",
    "Weight (%)",
    "Contribution (out of 100)",
];

/// Build the workbook and return the encoded bytes
pub fn build_workbook(entries: &[Entry], summary: &Summary) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(ENTRIES_SHEET)?;
    write_entries_sheet(sheet, entries, &header)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)?;
    write_summary_sheet(sheet, summary, &header)?;

    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook and write it to `path`
pub fn write_workbook(path: &Path, entries: &[Entry], summary: &Summary) -> Result<()> {
    let bytes = build_workbook(entries, summary)?;
    std::fs::write(path, &bytes)
        .map_err(|e| Error::file_system("Failed to write workbook", path, e))?;
    info!(
        path = %path.display(),
        bytes = bytes.len(),
        rows = entries.len(),
        "Workbook exported"
    );
    Ok(())
}

/// Resolve where an export goes: an explicit path wins, then the configured
/// directory and file name.
pub fn export_path(config: &ExportConfig, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => config.directory.join(&config.file_name),
    }
}

fn write_header(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, title) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, format)?;
    }
    Ok(())
}

fn write_entries_sheet(sheet: &mut Worksheet, entries: &[Entry], header: &Format) -> Result<()> {
    write_header(sheet, &ENTRIES_HEADERS, header)?;
    for (idx, entry) in entries.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, entry.category.label())?;
        sheet.write_string(row, 1, entry.indicator.as_str())?;
        sheet.write_number(row, 2, entry.max_points.coerce())?;
        sheet.write_number(row, 3, entry.achieved_points.coerce())?;
        sheet.write_string(row, 4, entry.comment.as_str())?;
    }
    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(1, 36)?;
    sheet.set_column_width(4, 48)?;
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, summary: &Summary, header: &Format) -> Result<()> {
    write_header(sheet, &SUMMARY_HEADERS, header)?;
    for (idx, row) in summary.iter().enumerate() {
        let r = idx as u32 + 1;
        sheet.write_string(r, 0, row.category.label())?;
        sheet.write_number(r, 1, row.sum_max_points)?;
        sheet.write_number(r, 2, row.sum_achieved_points)?;
        sheet.write_number(r, 3, row.percent_achieved)?;
        sheet.write_number(r, 4, row.weight)?;
        sheet.write_number(r, 5, row.contribution)?;
    }
    sheet.set_column_width(0, 40)?;
    sheet.set_column_width(5, 26)?;
    Ok(())
}
