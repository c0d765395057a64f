// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod errors;
pub mod export;
pub mod observability;
pub mod output;
pub mod scoring;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use crate::catalog::{Category, IndicatorDefinition};
pub use crate::entry::{Entry, EntryDraft, PointsValue};
pub use crate::errors::{Error, Result};
pub use crate::scoring::{
    classify, compute_summary, overall, CategorySummary, Grade, OverallResult, Summary,
};
pub use crate::session::Session;

pub use crate::config::{load_config, EcoscoreConfig};
pub use crate::export::{build_workbook, write_workbook};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
