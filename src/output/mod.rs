//! Report writers for the non-interactive commands.

pub mod json;
pub mod terminal;

use serde::Serialize;
use std::io::Write;

use crate::catalog::IndicatorDefinition;
use crate::entry::Entry;
use crate::scoring::{OverallResult, Summary, EMPTY_PROMPT};

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Everything a scoring run displays
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport<'a> {
    pub entries: &'a [Entry],
    pub summary: &'a Summary,
    pub result: Option<OverallResult>,
    /// Informational prompt, present only when there is nothing to score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<'a> ScoreReport<'a> {
    pub fn new(entries: &'a [Entry], summary: &'a Summary) -> Self {
        let result = crate::scoring::overall(summary);
        Self {
            entries,
            summary,
            result,
            message: result.is_none().then_some(EMPTY_PROMPT),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport<'_>) -> anyhow::Result<()>;

    fn write_catalog(&mut self, indicators: &[&IndicatorDefinition]) -> anyhow::Result<()>;
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
    use_color: bool,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, use_color)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
