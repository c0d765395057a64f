use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::entries_file::read_entries;
use crate::config::ExportConfig;
use crate::export::{export_path, write_workbook};
use crate::observability::{set_current_file, set_operation, Operation};
use crate::scoring::compute_summary;

/// Export entries read from `entries` and return where the workbook went
pub fn export_entries(
    entries: &Path,
    output: Option<&Path>,
    config: &ExportConfig,
) -> Result<PathBuf> {
    let entries = read_entries(entries)
        .with_context(|| format!("Failed to load entries from {}", entries.display()))?;

    let path = export_path(config, output);
    let _op = set_operation(Operation::Exporting);
    let _file = set_current_file(&path);
    write_workbook(&path, &entries, &compute_summary(&entries))
        .with_context(|| format!("Failed to export workbook to {}", path.display()))?;

    println!("Exported {} entries to {}", entries.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_uses_configured_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let entries = temp.path().join("entries.json");
        std::fs::write(&entries, "[]").unwrap();
        let config = ExportConfig {
            directory: temp.path().to_path_buf(),
            ..ExportConfig::default()
        };

        let path = export_entries(&entries, None, &config).unwrap();
        assert_eq!(path, temp.path().join("Validation_Sustainability.xlsx"));
        assert!(path.exists());
    }
}
