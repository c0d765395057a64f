use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::entries_file::read_entries;
use crate::export::write_workbook;
use crate::observability::{set_operation, Operation};
use crate::output::{create_writer, OutputFormat, ScoreReport};
use crate::session::Session;

/// Options for `ecoscore score`
#[derive(Debug, Clone)]
pub struct ScoreConfig<'a> {
    pub entries: &'a Path,
    pub format: OutputFormat,
    pub export: Option<&'a Path>,
    pub use_color: bool,
}

pub fn score_entries(config: ScoreConfig<'_>) -> Result<()> {
    let entries = read_entries(config.entries)
        .with_context(|| format!("Failed to load entries from {}", config.entries.display()))?;
    let session = Session::from_entries(entries);

    let stdout = std::io::stdout();
    write_score_report(&session, config.format, config.use_color, stdout.lock())?;

    if let Some(path) = config.export {
        let _op = set_operation(Operation::Exporting);
        write_workbook(path, session.entries(), &session.summary())
            .with_context(|| format!("Failed to export workbook to {}", path.display()))?;
        info!("Exported workbook to {}", path.display());
    }
    Ok(())
}

/// Render the report of a session into `writer`
pub fn write_score_report<W: Write>(
    session: &Session,
    format: OutputFormat,
    use_color: bool,
    writer: W,
) -> Result<()> {
    let _op = set_operation(Operation::Scoring);
    let summary = session.summary();
    let report = ScoreReport::new(session.entries(), &summary);
    create_writer(format, writer, use_color).write_report(&report)
}
