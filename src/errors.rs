//! Shared error types for ecoscore

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ecoscore operations
///
/// Scoring itself never fails: invalid numbers are coerced and empty input
/// yields an empty summary. Errors only come from the edges (config files,
/// entry files, spreadsheet export).
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A category key that is not one of the four known axes
    #[error("Unknown category '{0}' (expected eje1, eje2, eje3 or eje4)")]
    UnknownCategory(String),

    /// Spreadsheet export errors
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
