use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::display::{DisplayConfig, TuiConfig};
use crate::export::EXPORT_FILE_NAME;

/// Root configuration structure for ecoscore
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EcoscoreConfig {
    /// Spreadsheet export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive session settings
    #[serde(default)]
    pub tui: TuiConfig,
}

impl EcoscoreConfig {
    /// Collect validation problems of every section
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(e) = self.export.validate() {
            errors.push(e);
        }
        if let Err(e) = self.tui.validate() {
            errors.push(e);
        }
        errors
    }

    /// Replace invalid sections with their defaults, returning what was reset
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut reset = Vec::new();
        if let Err(e) = self.export.validate() {
            reset.push(e);
            self.export = ExportConfig::default();
        }
        if let Err(e) = self.tui.validate() {
            reset.push(e);
            self.tui = TuiConfig::default();
        }
        reset
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Workbook file name
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Directory the workbook is written to
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            directory: default_directory(),
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), String> {
        let name = self.file_name.trim();
        if name.is_empty() {
            return Err("export.file_name must not be empty".to_string());
        }
        if !name.to_ascii_lowercase().ends_with(".xlsx") {
            return Err(format!(
                "export.file_name must end with .xlsx, got '{}'",
                self.file_name
            ));
        }
        if name.contains(['/', '\\']) {
            return Err("export.file_name must not contain path separators".to_string());
        }
        Ok(())
    }
}

fn default_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}
